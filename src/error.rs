// ⚠️ Error taxonomy for loading people and writing reports

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which header expectation a rejected header line violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderViolation {
    /// The header did not declare exactly the expected number of fields.
    FieldCount { expected: usize, found: usize },
    /// A required field name is absent (missing, renamed or duplicated away).
    MissingField(&'static str),
}

impl std::fmt::Display for HeaderViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderViolation::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            HeaderViolation::MissingField(name) => write!(f, "missing field '{}'", name),
        }
    }
}

#[derive(Debug, Error)]
pub enum PeopleError {
    #[error("source file {} doesn't exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("first line of {} does not contain field headers", .path.display())]
    MalformedHeader { path: PathBuf },

    #[error("unexpected field headers: {violation}")]
    InvalidHeader { violation: HeaderViolation },

    #[error("line has incorrect number of fields (expected {expected}, found {found}): {line}")]
    FieldCount {
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("address '{address}' is not in 'HouseNumber StreetName StreetType' form")]
    AddressFormat { address: String },

    /// A line was parsed through the store before any header had been resolved.
    #[error("column positions are unresolved; load a file with a valid header first")]
    ColumnsUnresolved,

    #[error("failed to load people from {}: {source}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to write report to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PeopleError>;
