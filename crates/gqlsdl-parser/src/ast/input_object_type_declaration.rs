use crate::ast::FieldDeclaration;

/// `input Name { fields }`. Input fields never carry arguments.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDeclaration>,
    pub line: usize,
}
