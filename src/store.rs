// 📇 Record Store - header validation and line → Person mapping
//
// Source format:
//   FirstName,LastName,Address,PhoneNumber      <- header, any column order
//   Jimmy,Smith,102 Long Lane,29384857          <- values in header order

use crate::error::{HeaderViolation, PeopleError, Result};
use crate::models::{Address, NameFrequency, Person};
use crate::report;
use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// ============================================================================
// FIELD NAMES
// ============================================================================

pub const FIELD_DELIMITER: char = ',';
pub const FIELD_COUNT: usize = 4;

pub const FIRST_NAME_FIELD: &str = "FirstName";
pub const LAST_NAME_FIELD: &str = "LastName";
pub const ADDRESS_FIELD: &str = "Address";
pub const PHONE_NUMBER_FIELD: &str = "PhoneNumber";

const BYTE_ORDER_MARK: char = '\u{feff}';

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Positions of the four required fields within a header line.
///
/// Only [`resolve_columns`] builds one, so every position is below
/// [`FIELD_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    first_name: usize,
    last_name: usize,
    address: usize,
    phone_number: usize,
}

impl ColumnMap {
    pub fn first_name(&self) -> usize {
        self.first_name
    }

    pub fn last_name(&self) -> usize {
        self.last_name
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn phone_number(&self) -> usize {
        self.phone_number
    }
}

/// Validate header fields and look up where each required field lives.
///
/// The header must hold exactly [`FIELD_COUNT`] fields and contain every
/// required name; order is free.
pub fn resolve_columns<S: AsRef<str>>(fields: &[S]) -> Result<ColumnMap> {
    if fields.len() != FIELD_COUNT {
        return Err(PeopleError::InvalidHeader {
            violation: HeaderViolation::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            },
        });
    }

    let position = |name: &'static str| {
        fields
            .iter()
            .position(|field| field.as_ref() == name)
            .ok_or(PeopleError::InvalidHeader {
                violation: HeaderViolation::MissingField(name),
            })
    };

    Ok(ColumnMap {
        first_name: position(FIRST_NAME_FIELD)?,
        last_name: position(LAST_NAME_FIELD)?,
        address: position(ADDRESS_FIELD)?,
        phone_number: position(PHONE_NUMBER_FIELD)?,
    })
}

/// True if the header fields are exactly the required set, in any order.
pub fn validate_header<S: AsRef<str>>(fields: &[S]) -> bool {
    resolve_columns(fields).is_ok()
}

// ============================================================================
// LINE → PERSON
// ============================================================================

/// Convert one data line into a [`Person`] using resolved column positions.
pub fn create_record_from_line(line: &str, columns: &ColumnMap) -> Result<Person> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    person_from_fields(&fields, columns)
}

fn check_field_count(fields: &[&str]) -> Result<()> {
    if fields.len() != FIELD_COUNT {
        // Fields were split on the delimiter without quoting, so joining them
        // restores the line verbatim.
        return Err(PeopleError::FieldCount {
            line: fields.join(","),
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }
    Ok(())
}

fn person_from_fields(fields: &[&str], columns: &ColumnMap) -> Result<Person> {
    check_field_count(fields)?;

    Ok(Person {
        first_name: fields[columns.first_name].to_string(),
        last_name: fields[columns.last_name].to_string(),
        address: Address::parse(fields[columns.address])?,
        phone_number: fields[columns.phone_number].to_string(),
    })
}

// ============================================================================
// PERSON STORE
// ============================================================================

/// In-memory list of people loaded from a source file, in file order.
#[derive(Debug, Default)]
pub struct PersonStore {
    people: Vec<Person>,
    columns: Option<ColumnMap>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load people from a comma-delimited file, replacing the current contents.
    ///
    /// Nothing changes if the load fails. Returns the number of people loaded.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(PeopleError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let (columns, people) = read_people(path)?;
        info!("Loaded {} people from {}", people.len(), path.display());

        self.people = people;
        self.columns = Some(columns);
        Ok(self.people.len())
    }

    /// Convert a data line using the columns of the last successful load.
    pub fn create_record_from_line(&self, line: &str) -> Result<Person> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        check_field_count(&fields)?;

        let columns = self.columns.as_ref().ok_or(PeopleError::ColumnsUnresolved)?;
        person_from_fields(&fields, columns)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn columns(&self) -> Option<&ColumnMap> {
        self.columns.as_ref()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn name_frequencies(&self) -> Vec<NameFrequency> {
        report::name_frequencies(&self.people)
    }

    pub fn ordered_addresses(&self) -> Vec<Address> {
        report::ordered_addresses(&self.people)
    }

    pub fn write_name_frequencies<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        report::write_report(&self.name_frequencies(), path.as_ref())
    }

    pub fn write_ordered_addresses<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        report::write_report(&self.ordered_addresses(), path.as_ref())
    }
}

fn load_failure(
    path: &Path,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> PeopleError {
    PeopleError::LoadFailure {
        path: path.to_path_buf(),
        source: source.into(),
    }
}

/// Read up to the first `\r`, `\n` or `\r\n`, the same terminators the csv
/// reader accepts for data lines.
fn read_header_line<R: BufRead>(source: &mut R) -> io::Result<String> {
    let mut line = Vec::new();

    loop {
        let buf = source.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                line.extend_from_slice(&buf[..end]);
                let terminator = buf[end];
                source.consume(end + 1);

                if terminator == b'\r' && source.fill_buf()?.first() == Some(&b'\n') {
                    source.consume(1);
                }
                break;
            }
            None => {
                line.extend_from_slice(buf);
                let len = buf.len();
                source.consume(len);
            }
        }
    }

    String::from_utf8(line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn read_people(path: &Path) -> Result<(ColumnMap, Vec<Person>)> {
    let file = File::open(path).map_err(|e| load_failure(path, e))?;
    let mut source = BufReader::new(file);

    // The csv reader skips blank lines, so the header is read by hand to
    // catch an empty first line.
    let header = read_header_line(&mut source).map_err(|e| load_failure(path, e))?;
    let header = header.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&header);

    if header.is_empty() {
        return Err(PeopleError::MalformedHeader {
            path: path.to_path_buf(),
        });
    }

    let header_fields: Vec<&str> = header.split(FIELD_DELIMITER).collect();
    let columns = resolve_columns(&header_fields)?;
    debug!("Resolved columns for {}: {:?}", path.display(), columns);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(FIELD_DELIMITER as u8)
        .from_reader(source);

    let mut people = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| load_failure(path, e))?;
        let fields: Vec<&str> = record.iter().collect();
        people.push(person_from_fields(&fields, &columns)?);
    }

    Ok((columns, people))
}

// ============================================================================
// TESTS
// ============================================================================
