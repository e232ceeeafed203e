//! Orthoatlas CLI - Main entry point

use clap::Parser;
use orthoatlas_cli::Cli;
use orthoatlas_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::info;

#[tokio::main]
async fn main() {
    // Values from .env feed the env-backed flags, so load it before parsing
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("orthoatlas")
        .build();

    // Environment variables take precedence over the flag-derived defaults
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The report does not depend on logging, so a failed init is not fatal
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match orthoatlas_cli::run(&cli, std::io::stdout()).await {
        Ok(summary) => {
            info!(reports = summary.reports, failures = summary.failures, "Done");
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    }
}
