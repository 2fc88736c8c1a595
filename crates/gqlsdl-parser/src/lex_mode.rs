/// A lexical mode of the scanner's pushdown automaton.
///
/// Each mode decides which characters are meaningful. Entering a nested
/// construct pushes a mode; leaving it pops back to the enclosing one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LexMode {
    /// Outside of any declaration body. The bottom of every mode stack.
    Top,
    /// Inside a `{ ... }` declaration body.
    Block,
    /// Inside a `( ... )` field argument list.
    Args,
    /// Inside a `union X = A | B` member list, up to the end of the line.
    Union,
    /// Inside a `#` line comment.
    Comment,
    /// Inside a `"""` text block.
    StringLiteral,
}

impl LexMode {
    /// What a construct opened in this mode is called in error messages.
    pub fn construct_name(&self) -> &'static str {
        match self {
            LexMode::Top => "document",
            LexMode::Block => "type block",
            LexMode::Args => "argument list",
            LexMode::Union => "union member list",
            LexMode::Comment => "comment",
            LexMode::StringLiteral => "text block",
        }
    }
}
