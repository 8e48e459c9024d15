//! errlines - extract human-readable error messages from raw diagnostic dumps.
//!
//! The heart of the crate is [`extract()`]: hand it the captured text of a
//! crash dump or multi-error report and get back the lines worth showing.
//!
//! # Module Structure
//!
//! - [`extract`](mod@extract) - Format classification and line extraction
//! - [`config`] - TOML configuration for the CLI
//! - [`output`] - Plain and JSON rendering
//! - [`cli`] - Command-line definition shared with `xtask`

pub mod cli;
pub mod config;
pub mod extract;
pub mod output;

pub use config::{Config, ConfigError, OutputConfig, OutputFormat};
pub use extract::{classify, extract, extract_with_format, DiagnosticFormat, Extraction};
pub use output::Renderer;
