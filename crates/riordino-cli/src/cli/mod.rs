//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use riordino_core::{DEFAULT_PACK_SIZE, DEFAULT_PREVIEW_ROWS, DEFAULT_UNIT_WEIGHT_KG};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl PathOrStdin {
    /// Label used in diagnostics: the path, or `-` for stdin.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "-".to_owned(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text (default).
    Human,
    /// A single JSON object on stdout.
    Json,
}

/// All top-level subcommands exposed by the `riordino` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Compute reorder quantities for a sales/stock workbook.
    Compute {
        /// Path to an .xlsx export, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Write the workbook with the order columns filled in to this path.
        ///
        /// When omitted only the report is printed.
        #[arg(long, short = 'o', value_name = "OUT")]
        output: Option<PathBuf>,
        /// Coverage window in weeks (1 to 4).
        ///
        /// Out-of-range values are clamped, fractions are truncated and
        /// non-numeric values fall back to 4; a warning is logged in each
        /// case.
        #[arg(
            long,
            short = 'w',
            env = "RIORDINO_COVERAGE_WEEKS",
            value_name = "WEEKS",
            allow_hyphen_values = true
        )]
        weeks: Option<String>,
        /// Units per supplier pack; orders are rounded up to whole packs.
        #[arg(long, env = "RIORDINO_PACK_SIZE", default_value_t = DEFAULT_PACK_SIZE)]
        pack_size: u32,
        /// Weight of one unit in kilograms.
        #[arg(long, env = "RIORDINO_UNIT_WEIGHT_KG", default_value_t = DEFAULT_UNIT_WEIGHT_KG)]
        unit_weight_kg: f64,
        /// Number of report lines shown in human output.
        #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        preview: usize,
    },

    /// Show the detected header row and column mapping of a workbook.
    Inspect {
        /// Path to an .xlsx export, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `riordino` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "riordino",
    version,
    about = "Reorder quantities from a weekly sales/stock export",
    long_about = "Reads a weekly sales and stock export (.xlsx), computes how many\n\
                  units to order for a 1 to 4 week coverage window in whole supplier\n\
                  packs, and fills the order columns of the workbook."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log header detection and column binding to stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `RIORDINO_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 52428800 (50 MB).
    #[arg(
        long,
        global = true,
        env = "RIORDINO_MAX_FILE_SIZE",
        default_value = "52428800"
    )]
    pub max_file_size: u64,
}
