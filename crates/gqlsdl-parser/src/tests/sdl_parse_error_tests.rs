//! Tests for error rendering.

use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::SdlParser;
use crate::SdlSourceSpan;
use crate::SourcePosition;

fn parse_err(source: &str) -> SdlParseError {
    SdlParser::new(source)
        .parse_schema_document()
        .unwrap_err()
}

#[test]
fn oneline_format_uses_one_based_line_and_column() {
    let error = parse_err("type User { name String }");
    assert_eq!(
        error.format_oneline(),
        "<input>:1:18: error: expected `:` in field definition, found `String`",
    );
    assert_eq!(error.to_string(), error.format_oneline());
}

#[test]
fn detailed_format_underlines_the_offending_token() {
    let source = "type User { name String }";
    let error = parse_err(source);
    let detailed = error.format_detailed(Some(source));

    assert!(detailed.starts_with("error: expected `:` in field definition"));
    assert!(detailed.contains("  --> <input>:1:18\n"));
    assert!(detailed.contains(" 1 | type User { name String }\n"));
    assert!(detailed.contains("^^^^^^\n"));
}

#[test]
fn detailed_format_without_source_omits_snippet() {
    let error = parse_err("type User { name String }");
    let detailed = error.format_detailed(None);
    assert!(!detailed.contains(" | "));
    assert!(detailed.contains("  --> <input>:1:18"));
}

#[test]
fn detailed_format_renders_notes() {
    let source = "type Query {\n  hello: String\n";
    let error = parse_err(source);
    let detailed = error.format_detailed(Some(source));
    assert!(detailed.contains("   = note: "));
    assert!(detailed.contains("   = help: "));
}

#[test]
fn manual_error_with_help() {
    let span = SdlSourceSpan::new(
        SourcePosition::new(2, 4, 20),
        SourcePosition::new(2, 7, 23),
    );
    let mut error = SdlParseError::new(
        "something odd",
        span,
        SdlParseErrorKind::MalformedUnionMembers,
    );
    error.add_help("try something else");

    assert_eq!(error.line(), 3);
    assert!(!error.is_lexical());
    assert_eq!(error.notes().len(), 1);
    assert_eq!(error.format_oneline(), "<input>:3:5: error: something odd");
}
