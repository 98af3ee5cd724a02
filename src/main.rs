use clap::Parser;
use script_harvest::{Batch, BatchReport, HarvestConfig, HarvestError};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            println!(
                "{} sites harvested, {} failed",
                report.harvested(),
                report.failed()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<BatchReport, HarvestError> {
    let mut batch = match &args.config {
        Some(path) => Batch::with_config_file(path)?,
        None => Batch::new(HarvestConfig::default()),
    };

    if let Some(input) = args.input {
        batch = batch.with_input_path(input);
    }
    if let Some(output) = args.output {
        batch = batch.with_output_root(output);
    }
    if let Some(max_sites) = args.max_sites {
        batch = batch.with_max_sites(max_sites);
    }
    if let Some(user_agent) = args.user_agent {
        batch = batch.with_user_agent(user_agent);
    }
    if let Some(resolution) = args.resolution {
        batch = batch.with_url_resolution(resolution.into());
    }
    if let Some(timeout) = args.timeout {
        batch = batch.with_request_timeout(timeout);
    }
    if args.keep_empty_inline {
        batch = batch.with_keep_empty_inline(true);
    }

    ::log::info!(
        "Harvesting from {} into {}",
        batch.config().input_path.display(),
        batch.config().output_root.display()
    );

    let report = batch.run().await?;

    if let Some(path) = args.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json).map_err(|e| HarvestError::Io { path, source: e })?;
    }

    Ok(report)
}
