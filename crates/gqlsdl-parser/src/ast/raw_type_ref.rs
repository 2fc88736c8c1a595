/// A type reference as written in the source, not yet resolved.
///
/// Covers the shapes `Name`, `Name!`, `[Name]`, `[Name!]`, `[Name]!` and
/// `[Name!]!`. Nested lists are not part of the grammar.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawTypeRef {
    pub name: String,
    pub is_list: bool,
    /// `!` after the whole reference (`Name!` or `[Name]!`).
    pub is_non_null: bool,
    /// `!` on the item of a list (`[Name!]`).
    pub is_list_item_non_null: bool,
    /// 1-based source line.
    pub line: usize,
}

impl RawTypeRef {
    /// A bare named reference with no list or non-null wrapping.
    pub fn named(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            is_list: false,
            is_non_null: false,
            is_list_item_non_null: false,
            line,
        }
    }
}

impl std::fmt::Display for RawTypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let item_bang = if self.is_list_item_non_null { "!" } else { "" };
        let bang = if self.is_non_null { "!" } else { "" };
        if self.is_list {
            write!(f, "[{}{item_bang}]{bang}", self.name)
        } else {
            write!(f, "{}{bang}", self.name)
        }
    }
}
