//! `riordino`: computes reorder quantities for a point-of-sale stock export.
use std::process;

use clap::Parser as _;
use tracing::debug;

mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Compute {
            file,
            output,
            weeks,
            pack_size,
            unit_weight_kg,
            preview,
        } => {
            let bytes = read(file, cli.max_file_size)?;
            let args = cmd::compute::ComputeArgs {
                weeks: weeks.as_deref(),
                pack_size: *pack_size,
                unit_weight_kg: *unit_weight_kg,
                output: output.as_deref(),
                preview: *preview,
            };
            cmd::compute::run(&bytes, &args, &cli.format)
        }
        Command::Inspect { file } => {
            let bytes = read(file, cli.max_file_size)?;
            cmd::inspect::run(&bytes, &cli.format)
        }
    }
}

fn read(file: &PathOrStdin, max_file_size: u64) -> Result<Vec<u8>, CliError> {
    let bytes = io::read_input(file, max_file_size)?;
    debug!(input = %file.label(), bytes = bytes.len(), "input read");
    Ok(bytes)
}
