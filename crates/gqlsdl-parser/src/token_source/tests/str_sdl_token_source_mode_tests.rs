//! Tests for the scanner's mode stack.

use crate::LexMode;
use crate::token::SdlTokenKind;
use crate::token_source::StrSdlTokenSource;

/// Scans one token and returns the mode active afterwards.
fn step(source: &mut StrSdlTokenSource<'_>) -> (String, LexMode, usize) {
    let token = source.next().expect("source should not be exhausted");
    (token.text().to_string(), source.current_mode(), source.mode_stack_depth())
}

#[test]
fn starts_in_top_mode() {
    let source = StrSdlTokenSource::new("type Q { a: Int }");
    assert_eq!(source.current_mode(), LexMode::Top);
    assert_eq!(source.mode_stack_depth(), 1);
}

#[test]
fn blocks_and_argument_lists_push_and_pop() {
    let mut source = StrSdlTokenSource::new("type Q { f(a: Int): String }");
    assert_eq!(step(&mut source), ("type".to_string(), LexMode::Top, 1));
    assert_eq!(step(&mut source), ("Q".to_string(), LexMode::Top, 1));
    assert_eq!(step(&mut source), ("{".to_string(), LexMode::Block, 2));
    assert_eq!(step(&mut source), ("f".to_string(), LexMode::Block, 2));
    assert_eq!(step(&mut source), ("(".to_string(), LexMode::Args, 3));
    assert_eq!(step(&mut source), ("a".to_string(), LexMode::Args, 3));
    assert_eq!(step(&mut source), (":".to_string(), LexMode::Args, 3));
    assert_eq!(step(&mut source), ("Int".to_string(), LexMode::Args, 3));
    assert_eq!(step(&mut source), (")".to_string(), LexMode::Block, 2));
    assert_eq!(step(&mut source), (":".to_string(), LexMode::Block, 2));
    assert_eq!(step(&mut source), ("String".to_string(), LexMode::Block, 2));
    assert_eq!(step(&mut source), ("}".to_string(), LexMode::Top, 1));
    assert_eq!(step(&mut source), ("".to_string(), LexMode::Top, 1));
}

#[test]
fn union_keyword_enters_union_mode_until_line_break() {
    let mut source = StrSdlTokenSource::new("union U = A | B\nscalar S");
    assert_eq!(step(&mut source), ("union".to_string(), LexMode::Union, 2));
    assert_eq!(step(&mut source), ("U".to_string(), LexMode::Union, 2));
    assert_eq!(step(&mut source), ("=".to_string(), LexMode::Union, 2));
    assert_eq!(step(&mut source), ("A".to_string(), LexMode::Union, 2));
    assert_eq!(step(&mut source), ("|".to_string(), LexMode::Union, 2));
    assert_eq!(step(&mut source), ("B".to_string(), LexMode::Union, 2));
    assert_eq!(step(&mut source), ("".to_string(), LexMode::Top, 1));
    assert_eq!(step(&mut source), ("scalar".to_string(), LexMode::Top, 1));
}

/// A `union` keyword inside a member list would push `Union` on top of
/// itself; the duplicate-push guard keeps a single frame so one line break
/// returns to `Top`.
#[test]
fn duplicate_push_is_ignored() {
    let mut source = StrSdlTokenSource::new("union U = union | B\ntype Q { a: Int }");
    let kinds: Vec<_> = source.by_ref().map(|t| t.kind).collect();
    assert_eq!(kinds.last(), Some(&SdlTokenKind::Eof));
    assert!(!kinds.iter().any(|k| k.is_error()));
    assert_eq!(source.current_mode(), LexMode::Top);
    assert_eq!(source.mode_stack_depth(), 1);
}

#[test]
fn comments_and_text_blocks_leave_no_frame_behind() {
    let mut source = StrSdlTokenSource::new("type Q {\n  # note\n  \"\"\"doc\"\"\"\n  a: Int\n}");
    let _ = source.by_ref().take(3).count();
    assert_eq!(source.current_mode(), LexMode::Block);
    assert_eq!(source.mode_stack_depth(), 2);
    let token = source.next().expect("text block token");
    assert_eq!(token.kind, SdlTokenKind::string_value_borrowed("doc"));
    assert_eq!(source.current_mode(), LexMode::Block);
    assert_eq!(source.mode_stack_depth(), 2);
}
