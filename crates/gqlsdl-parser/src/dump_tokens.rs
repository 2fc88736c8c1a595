use crate::token_source::StrSdlTokenSource;
use std::fmt::Write;

/// Renders the full token sequence of `source`, one token per line as
/// `line: kind: "text"`, up to and including the `Eof` or `Error` token.
///
/// Diagnostic output only; the format is not stable.
///
/// ```
/// let dump = gqlsdl_parser::dump_tokens("union U = A | B");
/// assert_eq!(
///     dump.lines().collect::<Vec<_>>(),
///     [
///         r#"1: keyword: "union""#,
///         r#"1: identifier: "U""#,
///         r#"1: punctuation: "=""#,
///         r#"1: identifier: "A""#,
///         r#"1: punctuation: "|""#,
///         r#"1: identifier: "B""#,
///         r#"1: union-end: """#,
///         r#"1: eof: """#,
///     ],
/// );
/// ```
pub fn dump_tokens(source: &str) -> String {
    let mut out = String::new();
    for token in StrSdlTokenSource::new(source) {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}: {}: {:?}",
            token.line(),
            token.kind.category(),
            token.text(),
        );
    }
    out
}
