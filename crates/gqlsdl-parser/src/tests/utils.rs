//! Various test utils.

use crate::SdlParser;
use crate::SdlSourceSpan;
use crate::SourcePosition;
use crate::ast::Declaration;
use crate::ast::SchemaDocument;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use std::cell::Cell;
use std::rc::Rc;

/// Creates a mock token with the given kind and a zero-width span on the
/// given 0-based line.
pub fn mock_token_on_line(kind: SdlTokenKind<'static>, line: usize) -> SdlToken<'static> {
    SdlToken::new(
        kind,
        SdlSourceSpan::empty_at(SourcePosition::new(line, 0, 0)),
    )
}

pub fn mock_token(kind: SdlTokenKind<'static>) -> SdlToken<'static> {
    mock_token_on_line(kind, 0)
}

pub fn mock_name_token(name: &str) -> SdlToken<'static> {
    mock_token(SdlTokenKind::Name(name.to_string().into()))
}

pub fn mock_eof_token() -> SdlToken<'static> {
    mock_token(SdlTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec and counts how many
/// were pulled.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<SdlToken<'static>>,
    pulled: Rc<Cell<usize>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<SdlToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            pulled: Rc::new(Cell::new(0)),
        }
    }

    /// A shared counter of tokens pulled from this source so far.
    pub fn pulled_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pulled)
    }
}

impl Iterator for MockTokenSource {
    type Item = SdlToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        self.pulled.set(self.pulled.get() + 1);
        Some(token)
    }
}

/// Parses `source`, panicking with the detailed diagnostic on failure.
pub fn parse_ok(source: &str) -> SchemaDocument {
    match SdlParser::new(source).parse_schema_document() {
        Ok(document) => document,
        Err(error) => panic!("{}", error.format_detailed(Some(source))),
    }
}

/// Parses `source` and returns its single declaration.
pub fn parse_single(source: &str) -> Declaration {
    let mut document = parse_ok(source);
    assert_eq!(document.declarations.len(), 1, "{:#?}", document.declarations);
    document.declarations.remove(0)
}
