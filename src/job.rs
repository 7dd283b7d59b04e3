// ⚙️ Job configuration - where to read people from and where reports go
//
// JSON form (every key optional):
//   {
//     "source": "data.csv",
//     "name_frequency_output": "name_frequencies.csv",
//     "ordered_address_output": "ordered_addresses.csv"
//   }

use crate::store::PersonStore;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_FILE: &str = "data.csv";
pub const DEFAULT_NAME_FREQUENCY_FILE: &str = "name_frequencies.csv";
pub const DEFAULT_ORDERED_ADDRESS_FILE: &str = "ordered_addresses.csv";

pub const USAGE: &str = "usage: people-report [<source.csv> [<output_dir>]] | --config <job.json>";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub source: PathBuf,
    pub name_frequency_output: PathBuf,
    pub ordered_address_output: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            source: PathBuf::from(DEFAULT_SOURCE_FILE),
            name_frequency_output: PathBuf::from(DEFAULT_NAME_FREQUENCY_FILE),
            ordered_address_output: PathBuf::from(DEFAULT_ORDERED_ADDRESS_FILE),
        }
    }
}

impl JobConfig {
    /// Read `source` and write both reports, with their default names, into `output_dir`.
    pub fn with_output_dir<P: Into<PathBuf>, D: AsRef<Path>>(source: P, output_dir: D) -> Self {
        let output_dir = output_dir.as_ref();
        JobConfig {
            source: source.into(),
            name_frequency_output: output_dir.join(DEFAULT_NAME_FREQUENCY_FILE),
            ordered_address_output: output_dir.join(DEFAULT_ORDERED_ADDRESS_FILE),
        }
    }

    /// Load a job from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read job file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse job JSON")
    }

    /// Build a job from command-line arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(JobConfig::default()),
            [flag, path] if flag == "--config" => JobConfig::from_file(path),
            [flag, ..] if flag.starts_with('-') => bail!("unrecognised arguments\n{}", USAGE),
            [source] => Ok(JobConfig::with_output_dir(source, ".")),
            [source, output_dir] => Ok(JobConfig::with_output_dir(source, output_dir)),
            _ => bail!("too many arguments\n{}", USAGE),
        }
    }
}

/// Counts produced by one [`run_job`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub people: usize,
    pub distinct_names: usize,
    pub addresses: usize,
}

impl JobSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} people loaded | {} distinct names | {} addresses",
            self.people, self.distinct_names, self.addresses
        )
    }
}

/// Load the source, then write the name-frequency and address reports, in that order.
pub fn run_job(config: &JobConfig) -> Result<JobSummary> {
    let mut store = PersonStore::new();

    store
        .load_from_file(&config.source)
        .context("Failed to load people")?;

    let frequencies = store.name_frequencies();
    crate::report::write_report(&frequencies, &config.name_frequency_output)
        .context("Failed to output the name frequency list")?;

    let addresses = store.ordered_addresses();
    crate::report::write_report(&addresses, &config.ordered_address_output)
        .context("Failed to output the ordered address list")?;

    Ok(JobSummary {
        people: store.len(),
        distinct_names: frequencies.len(),
        addresses: addresses.len(),
    })
}

/// Render an error and its causes for the operator, skipping any cause whose
/// text is already part of the message.
pub fn describe_error(err: &anyhow::Error) -> String {
    let mut message = String::new();

    for cause in err.chain() {
        let text = cause.to_string();
        if message.contains(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }

    message
}
