/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `riordino` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The input could not be read, is not a
///   usable workbook, or an argument is invalid. Nothing was computed.
/// - Exit code **1**: output failure. Orders were computed but the filled
///   workbook or the report could not be written.
use std::fmt;
use std::path::PathBuf;

use riordino_excel::ReorderError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `riordino` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// The filesystem path, or `"-"` for stdin.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The workbook was read but rejected: unreadable, no header row, or a
    /// required column is missing.
    InputRejected {
        /// The pipeline's diagnostic, shown verbatim.
        detail: String,
    },

    /// A command-line value is out of its valid domain.
    InvalidArgument {
        /// Description of the problem.
        detail: String,
    },

    // --- Exit code 1: output failures ---
    /// The filled workbook or the report could not be written.
    OutputFailed {
        /// Where the output was going.
        target: String,
        /// The underlying error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::InputRejected { .. }
            | Self::InvalidArgument { .. } => 2,

            Self::OutputFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::InputRejected { detail } => format!("error: {detail}"),
            Self::InvalidArgument { detail } => format!("error: invalid argument: {detail}"),
            Self::OutputFailed { target, detail } => {
                format!("error: cannot write {target}: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<ReorderError> for CliError {
    fn from(e: ReorderError) -> Self {
        match e {
            ReorderError::HeaderNotFound { .. }
            | ReorderError::ColumnNotFound { .. }
            | ReorderError::WorkbookRead { .. } => Self::InputRejected {
                detail: e.to_string(),
            },
            ReorderError::WorkbookWrite { .. } => Self::OutputFailed {
                target: "workbook".to_owned(),
                detail: e.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
