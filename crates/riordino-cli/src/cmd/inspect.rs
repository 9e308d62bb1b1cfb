//! Implementation of `riordino inspect <file>`.
//!
//! Locates the header row and binds the six columns without computing any
//! order. Useful when onboarding a new export layout: the output shows which
//! header text each field was bound to.
//!
//! Exit codes: 0 = success, 2 = unreadable input or missing header/column.
use tracing::debug;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format;

/// Runs the `inspect` command over the workbook in `bytes`.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if the layout cannot be detected.
pub fn run(bytes: &[u8], format: &OutputFormat) -> Result<(), CliError> {
    let layout = riordino_excel::inspect_workbook(bytes)?;
    debug!(
        sheet = %layout.sheet_name,
        header_row = layout.header.number,
        "layout detected"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => format::write_layout_human(&mut out, &layout),
        OutputFormat::Json => format::write_layout_json(&mut out, &layout),
    }
    .map_err(|e| CliError::OutputFailed {
        target: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
