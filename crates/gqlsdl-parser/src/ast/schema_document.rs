use crate::ast::Declaration;

/// All declarations of one source text, in source order.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDocument {
    pub declarations: Vec<Declaration>,
    /// 1-based line of the end of input.
    pub eof_line: usize,
}
