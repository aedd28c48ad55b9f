//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `unique_endpoints` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use unique_endpoints::initialization::init_logger_with;
use unique_endpoints::{run_extract, Config, EndpointRecord};

fn print_visible(records: &[EndpointRecord]) {
    // Listing shows the identity columns; request/response bodies are only
    // reachable through the exports
    println!("{:>6}  {:<7}  {}", "S. No", "Status", "Endpoint");
    for record in records {
        println!("{:>6}  {:<7}  {}", record.serial, record.status, record.url);
    }
}

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // A CSV export to stdout owns stdout; everything else moves to the log
    let csv_on_stdout = matches!(config.output.as_deref(), Some(p) if p.as_os_str() == "-");

    match run_extract(&config) {
        Ok(report) => {
            if config.list && !csv_on_stdout {
                print_visible(&report.visible);
            }

            let summary = format!(
                "{} unique endpoint{} from {} captured exchange{} ({} shown after filtering)",
                report.unique_endpoints,
                if report.unique_endpoints == 1 { "" } else { "s" },
                report.total_exchanges,
                if report.total_exchanges == 1 { "" } else { "s" },
                report.visible.len()
            );
            if csv_on_stdout {
                log::info!("{summary}");
            } else {
                println!("✅ {summary}");
            }

            if let Some(path) = &report.csv_path {
                println!("Data saved to: {}", path.display());
            }
            if let Some(copied) = report.copied_rows {
                println!("Copied {copied} rows successfully!");
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("unique_endpoints error: {:#}", e);
            process::exit(1);
        }
    }
}
