// People Report - Core Library
// Loads personal records from a comma-delimited file and derives two reports:
// name frequencies and addresses ordered by street name.

pub mod error;
pub mod job;
pub mod models;
pub mod report;
pub mod store;

// Re-export commonly used types
pub use error::{HeaderViolation, PeopleError, Result};
pub use job::{describe_error, run_job, JobConfig, JobSummary};
pub use models::{Address, NameFrequency, Person};
pub use report::{name_frequencies, ordered_addresses, write_report};
pub use store::{create_record_from_line, resolve_columns, validate_header, ColumnMap, PersonStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
