//! Library-level extraction tests against captured dumps

use errlines::{classify, extract, extract_with_format, DiagnosticFormat};

use crate::helpers::load_fixture;

// ============================================================================
// Captured Fixtures
// ============================================================================

#[test]
fn node_crash_keeps_trace_without_launcher_or_refs() {
    let lines = extract(&load_fixture("node_crash.txt"));

    insta::assert_snapshot!(lines.join("\n"), @r"
    TypeError: Cannot read properties of undefined (reading 'id')
        at Object.<anonymous> (/home/app/index.ts:12:30)
        at Module._compile (node:internal/modules/cjs/loader:1256:14)
    ");
}

#[test]
fn visible_error_collapses_to_message() {
    let result = extract_with_format(&load_fixture("visible_error.txt"));

    assert_eq!(result.format, DiagnosticFormat::ExceptionTrace);
    assert_eq!(result.lines, vec!["Bucket name \"assets\" is already taken"]);
}

#[test]
fn aggregate_report_keeps_final_messages() {
    let lines = extract(&load_fixture("aggregate.txt"));

    insta::assert_snapshot!(lines.join("\n"), @r"
    The requested bucket name is not available
    User is not authorized to update the role
    ");
}

#[test]
fn unrecognized_text_is_returned_whole() {
    let raw = load_fixture("plain.txt");
    let result = extract_with_format(&raw);

    assert_eq!(result.format, DiagnosticFormat::Fallback);
    assert_eq!(result.lines, vec![raw.trim_end_matches('\n').to_string()]);
}

// ============================================================================
// Documented Behaviour
// ============================================================================

#[test]
fn exception_trace_without_visible_error() {
    let input = "failed with an unhandled exception\nRunning program foo.js\nTypeError: bad thing\n    at x (y:1:1)";
    assert_eq!(
        extract(input),
        vec!["TypeError: bad thing", "    at x (y:1:1)"]
    );
}

#[test]
fn exception_trace_with_visible_error() {
    let input =
        "failed with an unhandled exception\nVisibleError: something broke\n    at x (y:1:1)";
    assert_eq!(extract(input), vec!["something broke"]);
}

#[test]
fn ref_markers_never_survive() {
    let input = "failed with an unhandled exception\nError: cycle\n  value: <ref *1> {foo: 1}";
    let lines = extract(input);
    assert!(lines.iter().all(|line| !line.contains("<ref *1>")));
    assert_eq!(lines, vec!["Error: cycle", "  value: {foo: 1}"]);
}

#[test]
fn multi_error_aggregate() {
    let input = "3 errors occurred:\n\t* Error: ResourceType: message one\n\t* message two";
    assert_eq!(extract(input), vec!["message one", "message two"]);
}

#[test]
fn empty_input() {
    assert_eq!(extract(""), vec![""]);
}

#[test]
fn fallback_for_text_without_markers() {
    for input in ["", "x", "a\nb\n", "  padded  \n", "Error: nothing special\n\n\n"] {
        assert_eq!(classify(input), DiagnosticFormat::Fallback);
        assert_eq!(extract(input), vec![input.trim_end_matches('\n').to_string()]);
    }
}

#[test]
fn crash_marker_beats_aggregate_marker() {
    let input = "Running program x failed with an unhandled exception:\nError: 2 errors occurred:\n* a";
    let result = extract_with_format(input);
    assert_eq!(result.format, DiagnosticFormat::ExceptionTrace);
    assert_eq!(result.lines, vec!["Error: 2 errors occurred:", "* a"]);
}

#[test]
fn extraction_is_thread_safe() {
    let raw = load_fixture("aggregate.txt");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let raw = raw.clone();
            std::thread::spawn(move || extract(&raw))
        })
        .collect();

    let expected = extract(&raw);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
