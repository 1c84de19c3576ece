//! Trailhead - all-paths maze search CLI
//!
//! Runs breadth-first and depth-first search over the bundled maze (or a
//! graph loaded from JSON) and prints every path found between two nodes.

mod cli;
mod commands;
mod maze;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use trailhead_core::error::{ExitCode as TrailheadExitCode, TrailheadError};
use trailhead_core::format::OutputFormat;
use trailhead_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Parsing can fail before `Cli.format` is available; honour an
            // explicit `--format json` with a structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        TrailheadError::UsageError(err.to_string())
                    }
                    _ => TrailheadError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TrailheadExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == Some(OutputFormat::Json) {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
