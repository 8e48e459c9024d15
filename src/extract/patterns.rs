//! Compiled patterns shared by the format handlers.
//!
//! Each accessor uses a `OnceLock` to compile the pattern at most once.

use regex::Regex;
use std::sync::OnceLock;

/// Marker phrase printed by the runtime when a program crashes.
pub(super) const UNHANDLED_EXCEPTION: &str = "failed with an unhandled exception";

/// Marker phrase that introduces a bulleted multi-error report.
pub(super) const ERRORS_OCCURRED: &str = "occurred:";

/// Launcher noise: `Running program <anything>` lines, newline included.
pub(super) fn re_launcher_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^Running program .*$\n?")
            .expect("re_launcher_line: pattern is valid and should always compile")
    })
}

/// A bare crash header line, e.g. `failed with an unhandled exception` or
/// `error: Running program '/app' failed with an unhandled exception:`.
/// Matched against a single line only.
pub(super) fn re_crash_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^(?:\w+: )?(?:Running program .*)?{}:?[ \t]*$",
            regex::escape(UNHANDLED_EXCEPTION)
        ))
        .expect("re_crash_header: pattern is valid and should always compile")
    })
}

/// Object back-reference markers such as `<ref *1> ` emitted by inspectors.
pub(super) fn re_ref_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<ref \*\d+>\s*")
            .expect("re_ref_marker: pattern is valid and should always compile")
    })
}

/// A colon-terminated label (`Error:`, `ResourceType:`).
pub(super) fn re_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[a-zA-Z]+:").expect("re_label: pattern is valid and should always compile")
    })
}
