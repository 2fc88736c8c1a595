use crate::SdlErrorNotes;
use crate::token::SdlKeyword;
use std::borrow::Cow;

/// The kind of a schema-language token.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy scanning: `StrSdlTokenSource`
/// borrows name and text-block slices directly from the source text using
/// `Cow::Borrowed`.
#[derive(Clone, Debug, PartialEq)]
pub enum SdlTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}` (block end)
    CurlyBraceClose,
    /// `{` (block start)
    CurlyBraceOpen,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Names, keywords and text
    // =========================================================================
    /// An identifier that is not a reserved keyword.
    Name(Cow<'src, str>),

    /// A reserved keyword.
    Keyword(SdlKeyword),

    /// The verbatim contents of a `"""` text block, without the delimiters.
    /// No escape processing is applied.
    StringValue(Cow<'src, str>),

    // =========================================================================
    // Terminators
    // =========================================================================
    /// End of a union member list (the line terminator or end of input that
    /// closed it).
    UnionEnd,

    /// End of input.
    Eof,

    /// A lexical error. Always the last token of a sequence.
    Error {
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context.
        error_notes: SdlErrorNotes,
    },
}

impl<'src> SdlTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        SdlTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `StringValue` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        SdlTokenKind::StringValue(Cow::Borrowed(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: SdlErrorNotes) -> Self {
        SdlTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            SdlTokenKind::Ampersand => Some("&"),
            SdlTokenKind::Bang => Some("!"),
            SdlTokenKind::Colon => Some(":"),
            SdlTokenKind::Comma => Some(","),
            SdlTokenKind::CurlyBraceClose => Some("}"),
            SdlTokenKind::CurlyBraceOpen => Some("{"),
            SdlTokenKind::Equals => Some("="),
            SdlTokenKind::ParenClose => Some(")"),
            SdlTokenKind::ParenOpen => Some("("),
            SdlTokenKind::Pipe => Some("|"),
            SdlTokenKind::SquareBracketClose => Some("]"),
            SdlTokenKind::SquareBracketOpen => Some("["),

            SdlTokenKind::Name(_)
            | SdlTokenKind::Keyword(_)
            | SdlTokenKind::StringValue(_)
            | SdlTokenKind::UnionEnd
            | SdlTokenKind::Eof
            | SdlTokenKind::Error { .. } => None,
        }
    }

    /// Short lowercase label for the token's category, used by the token
    /// dump.
    pub fn category(&self) -> &'static str {
        match self {
            SdlTokenKind::Name(_) => "identifier",
            SdlTokenKind::Keyword(_) => "keyword",
            SdlTokenKind::StringValue(_) => "string",
            SdlTokenKind::CurlyBraceOpen => "block-start",
            SdlTokenKind::CurlyBraceClose => "block-end",
            SdlTokenKind::UnionEnd => "union-end",
            SdlTokenKind::Eof => "eof",
            SdlTokenKind::Error { .. } => "error",
            _ => "punctuation",
        }
    }

    /// Returns `true` if this is an `Eof` or `Error` token, i.e. the last
    /// token a source will ever produce.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SdlTokenKind::Eof | SdlTokenKind::Error { .. })
    }

    /// Returns `true` if this token is `Error`.
    pub fn is_error(&self) -> bool {
        matches!(self, SdlTokenKind::Error { .. })
    }
}
