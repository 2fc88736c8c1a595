/// Source position information for scanning and parsing.
///
/// This is a pure data struct with no mutation methods. Token sources are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Use [`SourcePosition::display_line()`] for the 1-based line number shown in
/// error messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based)
    col_utf8: usize,

    /// byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based UTF-8 character count within current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(line: usize, col_utf8: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col_utf8,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based line number, as reported to users.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
