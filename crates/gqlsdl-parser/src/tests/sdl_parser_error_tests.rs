//! Tests for parse failures: every error aborts the parse.

use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::SdlParser;
use crate::tests::utils::MockTokenSource;
use crate::tests::utils::mock_eof_token;
use crate::tests::utils::mock_name_token;
use crate::tests::utils::mock_token_on_line;
use crate::token::SdlKeyword;
use crate::token::SdlTokenKind;

fn parse_err(source: &str) -> SdlParseError {
    match SdlParser::new(source).parse_schema_document() {
        Ok(document) => panic!("expected a parse error, got {document:#?}"),
        Err(error) => error,
    }
}

#[test]
fn unterminated_block_cites_opening_line() {
    let error = parse_err("type Query { hello: String");
    assert!(error.is_lexical());
    assert_eq!(error.line(), 1);
    assert!(error.message().contains("unterminated type block"));

    let error = parse_err("scalar Date\n\ntype Query {\n  hello: String\n");
    assert_eq!(error.line(), 3);
}

#[test]
fn double_pipe_in_union_is_malformed() {
    let error = parse_err("union X = A || B");
    assert_eq!(error.kind(), &SdlParseErrorKind::MalformedUnionMembers);
    assert_eq!(error.line(), 1);
}

#[test]
fn trailing_pipe_in_union_is_malformed() {
    let error = parse_err("type A { a: Int }\nunion X = A |\ntype Query { x: X }");
    assert_eq!(error.kind(), &SdlParseErrorKind::MalformedUnionMembers);
    assert_eq!(error.line(), 2);
}

#[test]
fn leading_pipe_in_union_is_malformed() {
    let error = parse_err("union X = | A");
    assert_eq!(error.kind(), &SdlParseErrorKind::MalformedUnionMembers);
}

#[test]
fn union_without_members() {
    let error = parse_err("union X =\n");
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn missing_colon_names_expected_and_found() {
    let error = parse_err("type User { name String }");
    assert_eq!(
        error.kind(),
        &SdlParseErrorKind::UnexpectedToken {
            expected: vec![":".to_string()],
            found: "String".to_string(),
        },
    );
    assert_eq!(
        error.message(),
        "expected `:` in field definition, found `String`",
    );
}

#[test]
fn missing_block_start() {
    let error = parse_err("type User name: String");
    assert_eq!(
        error.kind(),
        &SdlParseErrorKind::UnexpectedToken {
            expected: vec!["{".to_string()],
            found: "name".to_string(),
        },
    );
}

#[test]
fn missing_type_name() {
    let error = parse_err("type { a: Int }");
    assert!(error.message().contains("expected `name` in object type declaration"));
}

#[test]
fn stray_token_at_top_level() {
    let error = parse_err("type A { a: Int }\nQuery");
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { found, .. } if found == "Query"));
    assert_eq!(error.line(), 2);
}

#[test]
fn empty_argument_list() {
    let error = parse_err("type Query { f(): Int }");
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { found, .. } if found == ")"));
}

#[test]
fn missing_comma_between_arguments() {
    let error = parse_err("type Query { f(a: Int b: Int): Int }");
    assert_eq!(
        error.kind(),
        &SdlParseErrorKind::UnexpectedToken {
            expected: vec![",".to_string(), ")".to_string()],
            found: "b".to_string(),
        },
    );
}

#[test]
fn nested_lists_are_rejected() {
    let error = parse_err("type Query { matrix: [[Int]] }");
    assert!(error.message().contains("list type"));
}

#[test]
fn missing_field_type() {
    let error = parse_err("type Query { f: }");
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { found, .. } if found == "}"));
}

#[test]
fn input_fields_take_no_arguments() {
    let error = parse_err("input Filter { f(a: Int): Int }");
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { found, .. } if found == "("));
}

#[test]
fn duplicate_root_operation_in_schema_block() {
    let error = parse_err("schema { query: A query: B }");
    assert_eq!(
        error.kind(),
        &SdlParseErrorKind::DuplicateRootOperation {
            operation: "query".to_string(),
        },
    );
    assert_eq!(error.notes().len(), 1);
}

#[test]
fn unknown_root_operation_in_schema_block() {
    let error = parse_err("schema { subscription: S }");
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { found, .. } if found == "subscription"));
}

#[test]
fn lexical_error_surfaces_as_parse_error() {
    let error = parse_err("type Query { hello: String }\ntype Bad{ a: Int }");
    assert!(error.is_lexical());
    assert_eq!(error.line(), 2);
    assert!(error.message().contains("bad character"));
}

#[test]
fn file_path_appears_in_oneline_format() {
    let path = std::path::Path::new("schema.graphql");
    let error = SdlParser::with_file_path("type Query { f Int }", path)
        .parse_schema_document()
        .unwrap_err();
    assert!(error.format_oneline().starts_with("schema.graphql:1:16: error: "));
}

/// The token source is consumed to exhaustion after an error.
#[test]
fn token_source_is_drained_on_error() {
    let source = MockTokenSource::new(vec![
        mock_name_token("oops"),
        mock_token_on_line(SdlTokenKind::Keyword(SdlKeyword::Type), 1),
        mock_name_token("Query"),
        mock_token_on_line(SdlTokenKind::CurlyBraceOpen, 1),
        mock_token_on_line(SdlTokenKind::CurlyBraceClose, 1),
        mock_eof_token(),
    ]);
    let pulled = source.pulled_counter();
    let error = SdlParser::from_token_source(source)
        .parse_schema_document()
        .unwrap_err();
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { .. }));
    assert_eq!(pulled.get(), 6);
}

#[test]
fn token_source_without_eof() {
    let source = MockTokenSource::new(vec![mock_name_token("x")]);
    let error = SdlParser::from_token_source(source)
        .parse_schema_document()
        .unwrap_err();
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { .. }));

    let source = MockTokenSource::new(vec![]);
    let error = SdlParser::from_token_source(source)
        .parse_schema_document()
        .unwrap_err();
    assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn description_without_declaration() {
    let error = parse_err("type A { a: Int }\n\"\"\"dangling\"\"\"");
    let SdlParseErrorKind::UnexpectedEof { expected } = error.kind() else {
        panic!("expected UnexpectedEof, got {:?}", error.kind());
    };
    assert!(expected.contains(&"type".to_string()));
    assert_eq!(error.line(), 2);
    assert!(error.message().ends_with("in document, found end of input"));
}
