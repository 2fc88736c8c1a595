use crate::SdlSourceSpan;
use crate::token::SdlTokenKind;

/// A token with location (span) information.
#[derive(Clone, Debug, PartialEq)]
pub struct SdlToken<'src> {
    /// The kind of token (including Error for lexical errors).
    pub kind: SdlTokenKind<'src>,

    /// The source location span of this token.
    pub span: SdlSourceSpan,
}

impl<'src> SdlToken<'src> {
    pub fn new(kind: SdlTokenKind<'src>, span: SdlSourceSpan) -> Self {
        Self { kind, span }
    }

    /// The text this token captured: the identifier, keyword, punctuator, or
    /// text-block contents. Terminator tokens capture no text; an `Error`
    /// token's text is its message.
    pub fn text(&self) -> &str {
        match &self.kind {
            SdlTokenKind::Name(name) => name,
            SdlTokenKind::StringValue(value) => value,
            SdlTokenKind::Keyword(keyword) => keyword.as_str(),
            SdlTokenKind::Error { message, .. } => message,
            SdlTokenKind::UnionEnd | SdlTokenKind::Eof => "",
            punct => punct.as_punctuator_str().unwrap_or(""),
        }
    }

    /// 0-based byte offset of the token start.
    pub fn byte_offset(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// 1-based line of the token start.
    pub fn line(&self) -> usize {
        self.span.line()
    }
}
