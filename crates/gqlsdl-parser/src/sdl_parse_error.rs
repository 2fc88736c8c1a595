use crate::SdlErrorNote;
use crate::SdlErrorNoteKind;
use crate::SdlErrorNotes;
use crate::SdlParseErrorKind;
use crate::SdlSourceSpan;

/// A lexical or structural error with location information and contextual
/// notes.
///
/// Parsing is fail-fast: the first `SdlParseError` aborts the whole parse.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct SdlParseError {
    /// Human-readable primary error message.
    message: String,

    /// The primary span where the error was detected.
    ///
    /// For unterminated constructs this is the span where the construct was
    /// opened, not where input ran out.
    span: SdlSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: SdlParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: SdlErrorNotes,
}

impl SdlParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: SdlSourceSpan,
        kind: SdlParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: SdlErrorNotes::new(),
        }
    }

    /// Creates a parse error from a scanner error token, preserving the
    /// scanner's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: SdlSourceSpan,
        lexer_notes: SdlErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: SdlParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &SdlSourceSpan {
        &self.span
    }

    /// Returns the 1-based source line at which the error was detected.
    pub fn line(&self) -> usize {
        self.span.line()
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SdlParseErrorKind {
        &self.kind
    }

    /// Returns `true` if this error came from the scanner rather than the
    /// parser.
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, SdlParseErrorKind::LexerError)
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &SdlErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(SdlErrorNote::general(message));
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: SdlSourceSpan) {
        self.notes.push(SdlErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(SdlErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:` in field definition, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: field definitions require `:` between name and type
    /// ```
    ///
    /// When `source` is `None`, snippets are omitted but line/column info is
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.location_label()));

        if let Some(src) = source
            && let Some(snippet) = Self::format_snippet(src, &self.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                SdlErrorNoteKind::General => "note",
                SdlErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// schema.graphql:5:12: error: expected `:` in field definition, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location_label(), self.message)
    }

    fn location_label(&self) -> String {
        let file_name = self
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let line = self.span.start_inclusive.display_line();
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!("{file_name}:{line}:{column}")
    }

    /// Formats the source line referenced by `span` with a marker underneath.
    fn format_snippet(
        source: &str,
        span: &SdlSourceSpan,
        marker: char,
    ) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let col_start = span.start_inclusive.col_utf8();
        let col_end =
            if span.end_exclusive.line() == line_num {
                span.end_exclusive.col_utf8()
            } else {
                col_start + 1
            };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            marker.to_string().repeat(underline_len),
            width = line_num_width,
            padding = col_start,
        ));
        Some(output)
    }
}
