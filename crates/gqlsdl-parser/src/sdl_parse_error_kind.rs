/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` field of
/// [`SdlParseError`](crate::SdlParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SdlParseErrorKind {
    /// The scanner emitted an error token (malformed character sequence,
    /// unterminated block, unterminated text block, excess `]`, ...).
    ///
    /// The scanner's message and notes are preserved in the parent
    /// `SdlParseError`.
    ///
    /// # Example
    /// ```text
    /// type Query { hello: String
    /// ^ unterminated type block
    /// ```
    #[error("lexical error")]
    LexerError,

    /// Expected specific token(s) at a grammar decision point but found
    /// something else.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g., `[":"]`).
        expected: Vec<String>,
        /// Description of what was found (e.g., `"String"` or `"}"`).
        found: String,
    },

    /// The token stream ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when the stream ended.
        expected: Vec<String>,
    },

    /// A union member list with an empty member: a leading `|`, two
    /// consecutive `|`, or a trailing `|`.
    ///
    /// # Example
    /// ```text
    /// union X = A || B
    ///              ^ expected union member, found `|`
    /// ```
    #[error("malformed union member list")]
    MalformedUnionMembers,

    /// A `schema { ... }` declaration names the same root operation twice.
    #[error("duplicate root operation: `{operation}`")]
    DuplicateRootOperation {
        operation: String,
    },
}
