use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use processor::{format_logs, Processor, Report};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod loader;

use config::{Config, Format};
use error::Error;

fn main() -> ExitCode {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let workload = loader::load(&config.input)?;
    let outcome = Processor::run(scheduler::for_policy(workload.policy), &workload.events);

    if config.trace {
        print!("{}", format_logs(&outcome.logs));
    }

    let rendered = render(&outcome.report(), config.format)?;
    if config.writes_to_stdout() {
        io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|source| Error::OutputUnavailable {
                path: config.output.clone(),
                source,
            })
    } else {
        fs::write(&config.output, rendered).map_err(|source| Error::OutputUnavailable {
            path: config.output.clone(),
            source,
        })
    }
}

fn render(report: &Report, format: Format) -> Result<String, Error> {
    match format {
        Format::Text => Ok(report.to_string()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests;
