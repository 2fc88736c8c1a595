use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
///
/// Optionally includes a file path for the referenced source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SdlSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file path to the source text this span refers to, if available.
    pub file_path: Option<PathBuf>,
}

impl SdlSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a zero-width span at `position`.
    pub fn empty_at(position: SourcePosition) -> Self {
        Self::new(position.clone(), position)
    }

    /// The 1-based line on which this span starts.
    pub fn line(&self) -> usize {
        self.start_inclusive.display_line()
    }
}
