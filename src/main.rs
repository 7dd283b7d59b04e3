use anyhow::Result;
use log::{error, info};
use std::env;

use people_report::{describe_error, run_job, JobConfig, VERSION};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("The following error has occurred: {}", describe_error(&err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = JobConfig::from_args(&args)?;

    info!("people-report {} reading {}", VERSION, config.source.display());

    let summary = run_job(&config)?;

    info!("{}", summary.summary());
    info!("Name frequencies: {}", config.name_frequency_output.display());
    info!("Ordered addresses: {}", config.ordered_address_output.display());

    Ok(())
}
