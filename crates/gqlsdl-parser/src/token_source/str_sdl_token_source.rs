//! A [`SdlTokenSource`](crate::token_source::SdlTokenSource) that scans a
//! `&str` input with a pushdown stack of lexical modes.
//!
//! Which characters are meaningful depends on the mode on top of the stack:
//!
//! | Mode            | Recognized                                   | Leaves on          |
//! |-----------------|----------------------------------------------|--------------------|
//! | `Top`           | names, `{`, `&`, `"""`, `#`                  | never              |
//! | `Block`         | names, `: ! = [ ]`, `(`, `"""`, `#`          | `}`                |
//! | `Args`          | names, `: , ! = [ ]`, `#`                    | `)`                |
//! | `Union`         | names, `= \|`, `#`                           | end of line or EOF |
//! | `Comment`       | anything                                     | end of line or EOF |
//! | `StringLiteral` | anything                                     | `"""`              |
//!
//! Scanning is zero-copy: names and text blocks borrow from the source.
//!
//! # Usage
//!
//! ```rust
//! use gqlsdl_parser::token_source::StrSdlTokenSource;
//!
//! let tokens: Vec<_> = StrSdlTokenSource::new("type Query { hello: String }")
//!     .map(|token| token.text().to_string())
//!     .collect();
//! assert_eq!(tokens, ["type", "Query", "{", "hello", ":", "String", "}", ""]);
//! ```

use crate::LexMode;
use crate::SdlErrorNote;
use crate::SdlErrorNotes;
use crate::SdlSourceSpan;
use crate::SourcePosition;
use crate::token::SdlKeyword;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use smallvec::SmallVec;
use smallvec::smallvec;
use std::path::Path;

const TEXT_BLOCK_DELIMITER: &str = "\"\"\"";

/// One entry of the mode stack: the mode and where it was entered.
#[derive(Clone, Debug)]
struct ModeFrame {
    mode: LexMode,
    entered_at: SourcePosition,
}

/// A token source that scans a `&str`.
///
/// See module documentation for the mode table.
pub struct StrSdlTokenSource<'src> {
    /// The full source text being scanned.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Whether the previous character was `\r`, so that `\r\n` counts as one
    /// line break.
    last_char_was_cr: bool,

    /// The lexical mode stack. Never empty: `Top` is always at the bottom.
    mode_stack: SmallVec<[ModeFrame; 4]>,

    /// Open `[` count, shared by `Block` and `Args` modes.
    bracket_depth: usize,

    /// Whether a terminal (`Eof` or `Error`) token has been emitted.
    finished: bool,

    file_path: Option<&'src Path>,
}

impl<'src> StrSdlTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            last_char_was_cr: false,
            mode_stack: smallvec![ModeFrame {
                mode: LexMode::Top,
                entered_at: SourcePosition::new(0, 0, 0),
            }],
            bracket_depth: 0,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source whose spans carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    /// The mode on top of the mode stack.
    pub fn current_mode(&self) -> LexMode {
        match self.mode_stack.last() {
            Some(frame) => frame.mode,
            None => unreachable!("scanner mode stack is never empty"),
        }
    }

    /// Number of frames on the mode stack (1 when only `Top` is active).
    pub fn mode_stack_depth(&self) -> usize {
        self.mode_stack.len()
    }

    // =========================================================================
    // Mode stack
    // =========================================================================

    /// Pushes `mode`, unless it is already on top of the stack.
    fn push_mode(&mut self, mode: LexMode, entered_at: SourcePosition) {
        if self.current_mode() == mode {
            log::trace!("ignoring duplicate push of {mode:?} mode");
            return;
        }
        self.mode_stack.push(ModeFrame { mode, entered_at });
    }

    fn pop_mode(&mut self) {
        if self.mode_stack.len() <= 1 {
            unreachable!("attempted to pop the top-level scanner mode");
        }
        self.mode_stack.pop();
    }

    fn current_frame_start(&self) -> SourcePosition {
        match self.mode_stack.last() {
            Some(frame) => frame.entered_at.clone(),
            None => unreachable!("scanner mode stack is never empty"),
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col_utf8, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates line/column bookkeeping.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn make_span(&self, start: SourcePosition) -> SdlSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => SdlSourceSpan::with_file(start, end, path.to_path_buf()),
            None => SdlSourceSpan::new(start, end),
        }
    }

    /// Consumes one character and produces a single-character token.
    fn lex_punctuator(&mut self, kind: SdlTokenKind<'src>) -> SdlToken<'src> {
        let start = self.curr_position();
        self.consume();
        SdlToken::new(kind, self.make_span(start))
    }

    fn make_error(
        &self,
        message: impl Into<String>,
        start: SourcePosition,
        error_notes: SdlErrorNotes,
    ) -> SdlToken<'src> {
        SdlToken::new(SdlTokenKind::error(message, error_notes), self.make_span(start))
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Scanner main loop
    // =========================================================================

    fn next_token(&mut self) -> SdlToken<'src> {
        loop {
            let token = match self.current_mode() {
                LexMode::Top => self.lex_top(),
                LexMode::Block => self.lex_block(),
                LexMode::Args => self.lex_args(),
                LexMode::Union => self.lex_union(),
                mode @ (LexMode::Comment | LexMode::StringLiteral) => unreachable!(
                    "{mode:?} mode is entered and left within a single step"
                ),
            };
            if let Some(token) = token {
                return token;
            }
        }
    }

    /// One step in `Top` mode. Returns `None` when only ignored input was
    /// consumed.
    fn lex_top(&mut self) -> Option<SdlToken<'src>> {
        self.skip_whitespace();
        let start = self.curr_position();
        match self.peek_char() {
            None => Some(SdlToken::new(SdlTokenKind::Eof, self.make_span(start))),
            Some('#') => {
                self.lex_comment();
                None
            }
            Some('{') => {
                let token = self.lex_punctuator(SdlTokenKind::CurlyBraceOpen);
                self.push_mode(LexMode::Block, start);
                Some(token)
            }
            Some('&') => Some(self.lex_punctuator(SdlTokenKind::Ampersand)),
            Some('"') if self.remaining().starts_with(TEXT_BLOCK_DELIMITER) => {
                Some(self.lex_text_block())
            }
            Some(ch) if is_name_char(ch) => Some(self.lex_name()),
            Some(ch) => Some(self.lex_unrecognized_character(ch)),
        }
    }

    fn lex_block(&mut self) -> Option<SdlToken<'src>> {
        self.skip_whitespace();
        let start = self.curr_position();
        match self.peek_char() {
            None => Some(self.lex_unterminated_mode()),
            Some('#') => {
                self.lex_comment();
                None
            }
            Some(':') => Some(self.lex_punctuator(SdlTokenKind::Colon)),
            Some('!') => Some(self.lex_punctuator(SdlTokenKind::Bang)),
            Some('=') => Some(self.lex_punctuator(SdlTokenKind::Equals)),
            Some('[') => Some(self.lex_open_bracket()),
            Some(']') => Some(self.lex_close_bracket()),
            Some('(') => {
                let token = self.lex_punctuator(SdlTokenKind::ParenOpen);
                self.push_mode(LexMode::Args, start);
                Some(token)
            }
            Some('}') => {
                let token = self.lex_punctuator(SdlTokenKind::CurlyBraceClose);
                self.pop_mode();
                Some(token)
            }
            Some('"') if self.remaining().starts_with(TEXT_BLOCK_DELIMITER) => {
                Some(self.lex_text_block())
            }
            Some(ch) if is_name_char(ch) => Some(self.lex_name()),
            Some(ch) => Some(self.lex_unrecognized_character(ch)),
        }
    }

    fn lex_args(&mut self) -> Option<SdlToken<'src>> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Some(self.lex_unterminated_mode()),
            Some('#') => {
                self.lex_comment();
                None
            }
            Some(':') => Some(self.lex_punctuator(SdlTokenKind::Colon)),
            Some(',') => Some(self.lex_punctuator(SdlTokenKind::Comma)),
            Some('!') => Some(self.lex_punctuator(SdlTokenKind::Bang)),
            Some('=') => Some(self.lex_punctuator(SdlTokenKind::Equals)),
            Some('[') => Some(self.lex_open_bracket()),
            Some(']') => Some(self.lex_close_bracket()),
            Some(')') => {
                let token = self.lex_punctuator(SdlTokenKind::ParenClose);
                self.pop_mode();
                Some(token)
            }
            Some(ch) if is_name_char(ch) => Some(self.lex_name()),
            Some(ch) => Some(self.lex_unrecognized_character(ch)),
        }
    }

    /// One step in `Union` mode. Line terminators are significant here: the
    /// first one (or end of input) closes the member list.
    fn lex_union(&mut self) -> Option<SdlToken<'src>> {
        let start = self.curr_position();
        match self.peek_char() {
            Some(' ' | '\t' | '\u{FEFF}') => {
                self.consume();
                None
            }
            None => {
                self.pop_mode();
                Some(SdlToken::new(SdlTokenKind::UnionEnd, self.make_span(start)))
            }
            Some(ch @ ('\r' | '\n')) => {
                self.consume();
                if ch == '\r' && self.peek_char() == Some('\n') {
                    self.consume();
                }
                self.pop_mode();
                Some(SdlToken::new(SdlTokenKind::UnionEnd, self.make_span(start)))
            }
            Some('#') => {
                self.lex_comment();
                None
            }
            Some('=') => Some(self.lex_punctuator(SdlTokenKind::Equals)),
            Some('|') => Some(self.lex_punctuator(SdlTokenKind::Pipe)),
            Some(ch) if is_name_char(ch) => Some(self.lex_name()),
            Some(ch) => Some(self.lex_unrecognized_character(ch)),
        }
    }

    // =========================================================================
    // Constructs shared between modes
    // =========================================================================

    /// Skips a `#` comment up to (not including) the line terminator, so the
    /// enclosing mode still sees the line break.
    fn lex_comment(&mut self) {
        self.push_mode(LexMode::Comment, self.curr_position());
        self.consume();
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.consume();
        }
        self.pop_mode();
    }

    /// Scans a `"""` text block verbatim, without escape processing.
    fn lex_text_block(&mut self) -> SdlToken<'src> {
        let start = self.curr_position();
        self.push_mode(LexMode::StringLiteral, start.clone());
        for _ in 0..TEXT_BLOCK_DELIMITER.len() {
            self.consume();
        }

        let content_start = self.curr_byte_offset;
        let Some(content_len) =
            memchr::memmem::find(self.remaining().as_bytes(), TEXT_BLOCK_DELIMITER.as_bytes())
        else {
            while self.consume().is_some() {}
            return self.make_error(
                format!(
                    "unterminated text block starting at byte offset {}",
                    start.byte_offset(),
                ),
                start,
                smallvec![SdlErrorNote::help("close the text block with `\"\"\"`")],
            );
        };

        let content_end = content_start + content_len;
        while self.curr_byte_offset < content_end {
            self.consume();
        }
        let content = &self.source[content_start..content_end];
        for _ in 0..TEXT_BLOCK_DELIMITER.len() {
            self.consume();
        }

        self.pop_mode();
        SdlToken::new(SdlTokenKind::string_value_borrowed(content), self.make_span(start))
    }

    /// Scans an identifier or keyword. The keyword `union` switches into
    /// `Union` mode whatever the enclosing mode is.
    fn lex_name(&mut self) -> SdlToken<'src> {
        let start = self.curr_position();
        let name_start = self.curr_byte_offset;
        while let Some(ch) = self.peek_char() {
            if !is_name_char(ch) {
                break;
            }
            self.consume();
        }
        let name = &self.source[name_start..self.curr_byte_offset];

        if let Some(ch) = self.peek_char()
            && !is_name_terminator(ch)
        {
            let bad_char_start = self.curr_position();
            self.consume();
            return self.make_error(
                format!(
                    "bad character {} after `{name}` at byte offset {}",
                    describe_char(ch),
                    bad_char_start.byte_offset(),
                ),
                bad_char_start,
                smallvec![SdlErrorNote::help(
                    "separate names from other characters with whitespace",
                )],
            );
        }

        let span = self.make_span(start.clone());
        match SdlKeyword::from_name(name) {
            Some(keyword) => {
                if keyword == SdlKeyword::Union {
                    self.push_mode(LexMode::Union, start);
                }
                SdlToken::new(SdlTokenKind::Keyword(keyword), span)
            }
            None => SdlToken::new(SdlTokenKind::name_borrowed(name), span),
        }
    }

    fn lex_open_bracket(&mut self) -> SdlToken<'src> {
        self.bracket_depth += 1;
        self.lex_punctuator(SdlTokenKind::SquareBracketOpen)
    }

    fn lex_close_bracket(&mut self) -> SdlToken<'src> {
        if self.bracket_depth == 0 {
            let start = self.curr_position();
            self.consume();
            return self.make_error(
                format!("unexpected `]` at byte offset {}", start.byte_offset()),
                start,
                SdlErrorNotes::new(),
            );
        }
        self.bracket_depth -= 1;
        self.lex_punctuator(SdlTokenKind::SquareBracketClose)
    }

    /// Reports end of input inside a mode other than `Top`, located at the
    /// place the mode was entered.
    fn lex_unterminated_mode(&self) -> SdlToken<'src> {
        let mode = self.current_mode();
        let opened_at = self.current_frame_start();
        let closer = match mode {
            LexMode::Block => Some("`}`"),
            LexMode::Args => Some("`)`"),
            _ => None,
        };
        let mut notes = SdlErrorNotes::new();
        notes.push(SdlErrorNote::general_with_span(
            format!("{} opened here", mode.construct_name()),
            SdlSourceSpan::empty_at(opened_at.clone()),
        ));
        if let Some(closer) = closer {
            notes.push(SdlErrorNote::help(format!("add a closing {closer}")));
        }
        self.make_error(
            format!(
                "unterminated {} opened on line {}",
                mode.construct_name(),
                opened_at.display_line(),
            ),
            opened_at,
            notes,
        )
    }

    fn lex_unrecognized_character(&mut self, ch: char) -> SdlToken<'src> {
        let start = self.curr_position();
        self.consume();
        self.make_error(
            format!(
                "unrecognized character {} in {} at byte offset {}",
                describe_char(ch),
                self.current_mode().construct_name(),
                start.byte_offset(),
            ),
            start,
            SdlErrorNotes::new(),
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrSdlTokenSource<'src> {
    type Item = SdlToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind.is_terminal() {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Letters, digits and `_`. Leading digits are not special-cased.
fn is_name_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Characters allowed to directly follow an identifier.
fn is_name_terminator(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t' | '\n' | '\r' | ':' | ')' | '(' | ',' | ']' | '!' | '|' | '&'
    )
}

/// Returns a human-readable description of a character for error messages.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("U+{:04X}", ch as u32)
    } else {
        format!("`{ch}` (U+{:04X})", ch as u32)
    }
}
