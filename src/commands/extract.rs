//! Extract command handler

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::Path;

use errlines::cli::ExtractArgs;
use errlines::{extract_with_format, Config, OutputConfig, OutputFormat, Renderer};

/// Name shown for stdin in notices and JSON reports.
const STDIN_SOURCE: &str = "<stdin>";

/// Extract display lines from every input and print them in order.
pub fn handle(args: &ExtractArgs, config: &Config) -> Result<()> {
    let output = effective_output(args, config);
    let fallback = output.fallback_on_empty && !args.no_fallback;

    let renderer = Renderer::new(&output)
        .with_color(use_color(&output))
        .with_show_format(args.show_format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.files.is_empty() {
        process(&renderer, &mut out, STDIN_SOURCE, &read_stdin()?, fallback)?;
    } else {
        for path in &args.files {
            let (source, raw) = if path.as_os_str() == "-" {
                (STDIN_SOURCE.to_string(), read_stdin()?)
            } else {
                (path.display().to_string(), read_file(path)?)
            };
            process(&renderer, &mut out, &source, &raw, fallback)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn process<W: Write>(
    renderer: &Renderer,
    out: &mut W,
    source: &str,
    raw: &str,
    fallback: bool,
) -> Result<()> {
    let mut extraction = extract_with_format(raw);
    if extraction.is_empty() && fallback {
        tracing::debug!(source, "nothing extracted, showing raw input");
        extraction = extraction.or_raw(raw);
    }

    if let Some(notice) = renderer.format_notice(source, extraction.format) {
        eprintln!("{}", notice);
    }

    renderer.render(out, source, &extraction)?;
    Ok(())
}

/// Apply command-line overrides to the configured output settings.
fn effective_output(args: &ExtractArgs, config: &Config) -> OutputConfig {
    let mut output = config.output.clone();
    if args.json {
        output.format = OutputFormat::Json;
    }
    if let Some(prefix) = &args.prefix {
        output.prefix = prefix.clone();
    }
    output
}

/// Color only plain output on a terminal, and never with NO_COLOR set.
fn use_color(output: &OutputConfig) -> bool {
    output.color
        && output.format == OutputFormat::Plain
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

fn read_stdin() -> Result<String> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context("Failed to read stdin")?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
