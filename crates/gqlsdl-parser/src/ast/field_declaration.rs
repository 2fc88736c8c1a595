use crate::ast::RawTypeRef;

/// A field of an object, interface, or input object declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDeclaration {
    pub name: String,
    pub description: Option<String>,
    /// Always empty for input object fields.
    pub arguments: Vec<ArgumentDeclaration>,
    pub type_ref: RawTypeRef,
    pub line: usize,
}

/// One `name: Type` entry of a field's argument list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentDeclaration {
    pub name: String,
    pub type_ref: RawTypeRef,
    /// Raw text of a `= value` default, uninterpreted.
    pub default_value: Option<String>,
    pub line: usize,
}
