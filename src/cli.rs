//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Version string with build details for `--version`.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("ERRLINES_BUILD_DATE"),
    ")"
);

/// Version string with build details for `--version`.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("ERRLINES_BUILD_DATE"),
    ")"
);

/// Extract readable error messages from crash dumps and multi-error reports.
#[derive(Parser, Debug)]
#[command(name = "errlines", version, long_version = LONG_VERSION)]
#[command(about = "Extract readable error messages from crash dumps and multi-error reports")]
#[command(
    long_about = "Extract readable error messages from crash dumps and multi-error reports.\n\n\
    Recognizes unhandled-exception dumps (launcher lines, object back-references\n\
    and VisibleError traces are stripped) and bulleted 'N errors occurred:'\n\
    reports (labels are stripped). Anything else is printed unchanged."
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract display lines from diagnostic dumps
    #[command(long_about = "Extract display lines from diagnostic dumps.\n\n\
        Reads each FILE in order, or stdin when no FILE is given or FILE is '-'.\n\n\
        EXAMPLES:\n    \
        errlines extract crash.log\n    \
        pulumi up 2>&1 | errlines extract\n    \
        errlines extract --json --show-format a.log b.log")]
    Extract(ExtractArgs),

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Input files ('-' for stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Report the detected format
    #[arg(long)]
    pub show_format: bool,

    /// Print nothing when no lines are extracted instead of the raw input
    #[arg(long)]
    pub no_fallback: bool,

    /// Prefix for every printed line
    #[arg(long, value_name = "STR")]
    pub prefix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
