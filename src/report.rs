// 📊 Reports - name frequencies and street-ordered addresses

use crate::error::{PeopleError, Result};
use crate::models::{Address, NameFrequency, Person};
use log::info;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Count every first and last name, most frequent first.
///
/// Names are compared exactly (case-sensitive). Equal frequencies are ordered
/// by name ascending.
pub fn name_frequencies(people: &[Person]) -> Vec<NameFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    let names = people
        .iter()
        .map(|p| p.first_name.as_str())
        .chain(people.iter().map(|p| p.last_name.as_str()));

    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut frequencies: Vec<NameFrequency> = counts
        .into_iter()
        .map(|(name, count)| NameFrequency::new(name, count))
        .collect();

    frequencies.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.name.cmp(&b.name))
    });

    frequencies
}

/// Addresses sorted by street name; equal street names keep input order.
pub fn ordered_addresses(people: &[Person]) -> Vec<Address> {
    let mut addresses: Vec<Address> = people.iter().map(|p| p.address.clone()).collect();
    addresses.sort_by(|a, b| a.street_name.cmp(&b.street_name));
    addresses
}

/// Write one line per item, replacing whatever is at `path`.
pub fn write_report<T: Display>(items: &[T], path: &Path) -> Result<()> {
    let write_failure = |source: std::io::Error| PeopleError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);

    for item in items {
        writeln!(writer, "{}", item).map_err(write_failure)?;
    }
    writer.flush().map_err(write_failure)?;

    info!("Wrote {} lines to {}", items.len(), path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
