//! Error message extraction from raw diagnostic dumps.
//!
//! Runtimes and provisioning tools report failures as free-form text: crash
//! dumps with stack traces, bulleted multi-error reports, or a plain message.
//! This module recognizes the shape of such a dump and reduces it to the lines
//! worth showing to a user.
//!
//! # Formats
//!
//! Classification is a substring heuristic, checked in priority order:
//!
//! 1. [`DiagnosticFormat::ExceptionTrace`] - contains
//!    `failed with an unhandled exception`
//! 2. [`DiagnosticFormat::Aggregate`] - contains `occurred:`
//! 3. [`DiagnosticFormat::Fallback`] - anything else, returned as-is
//!
//! Both markers may appear in the same dump; the crash dump wins.
//!
//! # Usage
//!
//! ```
//! use errlines::extract;
//!
//! let dump = "3 errors occurred:\n\t* Error: ResourceType: message one\n\t* message two\n";
//! assert_eq!(extract(dump), vec!["message one", "message two"]);
//! ```
//!
//! Extraction never fails. An empty result means nothing was extracted;
//! callers that always want something to show can use
//! [`Extraction::or_raw`].

mod aggregate;
mod exception;
mod patterns;

use serde::Serialize;
use std::fmt;

use patterns::{ERRORS_OCCURRED, UNHANDLED_EXCEPTION};

/// The shape of a diagnostic dump, as detected by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticFormat {
    /// Crash dump of an unhandled exception, with stack trace
    ExceptionTrace,
    /// Bulleted list of several errors
    Aggregate,
    /// Unrecognized text, shown unchanged
    Fallback,
}

impl DiagnosticFormat {
    /// Stable identifier used in CLI and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExceptionTrace => "exception-trace",
            Self::Aggregate => "aggregate",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DiagnosticFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display lines extracted from one dump, with the format that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Detected format of the input
    pub format: DiagnosticFormat,
    /// Lines to display, top to bottom
    pub lines: Vec<String>,
}

impl Extraction {
    /// Whether extraction produced no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace an empty result with the raw input (trailing newlines removed).
    ///
    /// The detected format is kept so callers can still report it.
    pub fn or_raw(mut self, raw: &str) -> Self {
        if self.lines.is_empty() {
            self.lines.push(trim_trailing_newlines(raw).to_string());
        }
        self
    }
}

/// Detect the format of a dump.
pub fn classify(input: &str) -> DiagnosticFormat {
    if input.contains(UNHANDLED_EXCEPTION) {
        DiagnosticFormat::ExceptionTrace
    } else if input.contains(ERRORS_OCCURRED) {
        DiagnosticFormat::Aggregate
    } else {
        DiagnosticFormat::Fallback
    }
}

/// Extract display lines from a dump.
///
/// Shorthand for [`extract_with_format`] when the format is not needed.
pub fn extract(input: &str) -> Vec<String> {
    extract_with_format(input).lines
}

/// Classify a dump and extract its display lines.
pub fn extract_with_format(input: &str) -> Extraction {
    let input = trim_trailing_newlines(input);
    let format = classify(input);

    let lines = match format {
        DiagnosticFormat::ExceptionTrace => exception::extract(input),
        DiagnosticFormat::Aggregate => aggregate::extract(input),
        DiagnosticFormat::Fallback => vec![input.to_string()],
    };

    tracing::debug!(
        format = format.name(),
        input_len = input.len(),
        lines = lines.len(),
        "extracted diagnostic lines"
    );

    Extraction { format, lines }
}

fn trim_trailing_newlines(input: &str) -> &str {
    input.trim_end_matches('\n')
}
