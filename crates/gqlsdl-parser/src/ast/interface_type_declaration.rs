use crate::ast::FieldDeclaration;

/// `interface Name { fields }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDeclaration>,
    pub line: usize,
}
