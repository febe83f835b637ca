//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailauth_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mailauth_check::initialization::init_logger_with;
use mailauth_check::{run_checks, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // ANTHROPIC_API_KEY may live in a .env next to the working directory or the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_checks(config).await {
        Ok(report) => {
            // Results go to stdout as JSON lines; the summary goes to stderr
            eprintln!(
                "Checked {} domain{} ({} pass, {} fail, {} warning, {} error{}) in {:.1}s",
                report.total_domains - report.skipped_domains,
                if report.total_domains - report.skipped_domains == 1 {
                    ""
                } else {
                    "s"
                },
                report.passed,
                report.failed,
                report.warnings,
                report.errors,
                if report.skipped_domains > 0 {
                    format!(", {} skipped", report.skipped_domains)
                } else {
                    String::new()
                },
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("mailauth_check error: {:#}", e);
            process::exit(1);
        }
    }
}
