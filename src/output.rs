//! Rendering of extracted lines for the terminal.
//!
//! Plain output writes one extracted line per row. JSON output writes one
//! document per input so several inputs can be streamed into `jq`.

use serde::Serialize;
use std::io::{self, Write};

use crate::config::{OutputConfig, OutputFormat};
use crate::extract::{DiagnosticFormat, Extraction};

/// ANSI escape codes for plain output.
pub mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Writes extractions in the configured format.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    prefix: String,
    color: bool,
    show_format: bool,
}

/// JSON shape used when the detected format is requested.
#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    format: DiagnosticFormat,
    lines: &'a [String],
}

impl Renderer {
    /// Create a renderer from output settings. Color starts disabled; the
    /// caller decides whether the destination is a terminal.
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            prefix: config.prefix.clone(),
            color: false,
            show_format: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_show_format(mut self, show_format: bool) -> Self {
        self.show_format = show_format;
        self
    }

    /// Write one extraction.
    ///
    /// `source` names the input (a path, or `<stdin>`) and only appears in
    /// JSON output with the detected format.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        source: &str,
        extraction: &Extraction,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => self.render_plain(out, extraction),
            OutputFormat::Json => self.render_json(out, source, extraction),
        }
    }

    /// Notice describing the detected format, for stderr in plain mode.
    /// `None` when not requested or when the format is part of JSON output.
    pub fn format_notice(&self, source: &str, format: DiagnosticFormat) -> Option<String> {
        if !self.show_format || self.format == OutputFormat::Json {
            return None;
        }
        let notice = format!("{}: {}", source, format);
        Some(if self.color {
            format!("{}{}{}", ansi::DIM, notice, ansi::RESET)
        } else {
            notice
        })
    }

    fn render_plain<W: Write>(&self, out: &mut W, extraction: &Extraction) -> io::Result<()> {
        for line in &extraction.lines {
            if self.color {
                writeln!(out, "{}{}{}{}", ansi::RED, self.prefix, line, ansi::RESET)?;
            } else {
                writeln!(out, "{}{}", self.prefix, line)?;
            }
        }
        Ok(())
    }

    fn render_json<W: Write>(
        &self,
        out: &mut W,
        source: &str,
        extraction: &Extraction,
    ) -> io::Result<()> {
        if self.show_format {
            let report = Report {
                source,
                format: extraction.format,
                lines: &extraction.lines,
            };
            serde_json::to_writer(&mut *out, &report)?;
        } else {
            serde_json::to_writer(&mut *out, &extraction.lines)?;
        }
        writeln!(out)
    }
}
