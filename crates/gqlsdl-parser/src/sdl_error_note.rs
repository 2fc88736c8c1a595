use crate::SdlSourceSpan;
use smallvec::SmallVec;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdlErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,
}

/// An error note providing additional context about an error, such as where
/// an unterminated block was opened.
#[derive(Debug, Clone, PartialEq)]
pub struct SdlErrorNote {
    pub kind: SdlErrorNoteKind,
    pub message: String,
    /// Optional span pointing to a related location.
    pub span: Option<SdlSourceSpan>,
}

impl SdlErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: SdlErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: SdlSourceSpan) -> Self {
        Self {
            kind: SdlErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: SdlErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes.
pub type SdlErrorNotes = SmallVec<[SdlErrorNote; 2]>;
