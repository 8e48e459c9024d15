//! Unhandled-exception crash dumps.
//!
//! A crash dump is the runtime's default report for a program that threw:
//! a launcher line, the exception header and a stack trace. Launcher lines
//! and back-reference markers are dropped; a `VisibleError` header collapses
//! the whole dump to its message.

use super::patterns::{re_crash_header, re_launcher_line, re_ref_marker};

/// Prefix of an exception whose message is already meant for end users.
const VISIBLE_ERROR: &str = "VisibleError";

/// Separator between an exception name and its message.
const MESSAGE_SEPARATOR: &str = ": ";

/// Extract display lines from a crash dump.
pub(super) fn extract(input: &str) -> Vec<String> {
    let text = re_launcher_line().replace_all(input, "");
    let text = strip_crash_header(&text);

    let mut ref_markers = 0usize;
    let text = re_ref_marker().replace_all(text, |_: &regex::Captures<'_>| {
        ref_markers += 1;
        ""
    });
    if ref_markers > 0 {
        tracing::debug!(ref_markers, "stripped object back-references");
    }

    let text = text.trim();
    if text.starts_with(VISIBLE_ERROR) {
        return visible_message(text);
    }

    text.split('\n').map(str::to_string).collect()
}

/// Drop the first line when it is a bare crash header. Later lines that
/// mention the marker are part of the error and stay.
fn strip_crash_header(text: &str) -> &str {
    let text = text.trim_start();
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    if re_crash_header().is_match(first) {
        rest
    } else {
        text
    }
}

/// The message of a `VisibleError` header. The trace below it is dropped.
///
/// A header without a `": "` separator carries no message and yields nothing.
fn visible_message(text: &str) -> Vec<String> {
    let header = text.split('\n').next().unwrap_or_default();
    match header.split_once(MESSAGE_SEPARATOR) {
        Some((_, message)) => vec![message.to_string()],
        None => {
            tracing::debug!(header, "VisibleError header without a message");
            Vec::new()
        }
    }
}
