//! Implementation of `riordino compute <file>`.
//!
//! Runs the reorder pipeline, optionally writes the filled workbook to
//! `--output`, and prints the report to stdout.
//!
//! Exit codes: 0 = success, 1 = output could not be written, 2 = unreadable
//! input, missing header or column, or invalid policy flags.
use std::path::Path;

use riordino_core::{CoverageWeeks, ReorderPolicy};
use tracing::{info, warn};

use crate::OutputFormat;
use crate::error::CliError;
use crate::{format, io};

/// Arguments of the `compute` subcommand after clap parsing.
#[derive(Debug, Clone)]
pub struct ComputeArgs<'a> {
    /// Raw `--weeks` text; `None` when neither flag nor env var is set.
    pub weeks: Option<&'a str>,
    /// Units per supplier pack.
    pub pack_size: u32,
    /// Weight of one unit in kg.
    pub unit_weight_kg: f64,
    /// Destination of the filled workbook.
    pub output: Option<&'a Path>,
    /// Lines shown in human output.
    pub preview: usize,
}

/// Runs the `compute` command over the workbook in `bytes`.
///
/// # Errors
///
/// Returns [`CliError`] if the policy flags are invalid, the pipeline
/// rejects the workbook, or the workbook or report cannot be written.
pub fn run(bytes: &[u8], args: &ComputeArgs<'_>, format: &OutputFormat) -> Result<(), CliError> {
    let weeks = coverage_weeks(args.weeks);
    let policy = ReorderPolicy::new(args.pack_size, args.unit_weight_kg).map_err(|e| {
        CliError::InvalidArgument {
            detail: e.to_string(),
        }
    })?;

    let output = riordino_excel::compute_reorder(bytes, weeks, &policy)?;

    if let Some(path) = args.output {
        io::write_output(path, &output.workbook)?;
        info!(
            path = %path.display(),
            bytes = output.workbook.len(),
            "filled workbook written"
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => {
            format::write_report_human(&mut out, &output.report, args.preview, args.output)
        }
        OutputFormat::Json => format::write_report_json(&mut out, &output.report),
    }
    .map_err(|e| CliError::OutputFailed {
        target: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Resolves the raw `--weeks` value, logging when it had to be adjusted.
fn coverage_weeks(raw: Option<&str>) -> CoverageWeeks {
    let Some(raw) = raw else {
        return CoverageWeeks::default();
    };
    let (weeks, problem) = CoverageWeeks::from_input(raw);
    if let Some(problem) = problem {
        warn!(input = raw, using = weeks.get(), "coverage weeks adjusted: {problem}");
    }
    weeks
}
