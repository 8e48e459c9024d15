//! Multi-error aggregate reports.
//!
//! ```text
//! 3 errors occurred:
//! 	* Error: ResourceType: message one
//! 	* message two
//! ```
//!
//! Everything before the first `*` bullet is preamble. Each bullet line keeps
//! only the text after its last `Label:` prefix.

use super::patterns::re_label;

/// Bullet character that starts each sub-error.
const BULLET: char = '*';

/// Extract display lines from a bulleted multi-error report.
pub(super) fn extract(input: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for section in input.split(BULLET).skip(1) {
        for line in section.split('\n') {
            let message = strip_labels(line.trim());
            lines.extend(
                message
                    .split('\n')
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );
        }
    }

    lines
}

/// Remove every leading `Label:` prefix, keeping the text after the last one.
fn strip_labels(line: &str) -> &str {
    re_label()
        .split(line)
        .last()
        .unwrap_or_default()
        .trim()
}
