use crate::ast::FieldDeclaration;
use crate::ast::RawTypeRef;
use crate::ast::RootOperationKind;

/// `type Name implements A & B { fields }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub implements: Vec<RawTypeRef>,
    pub fields: Vec<FieldDeclaration>,
    pub line: usize,
}

impl ObjectTypeDeclaration {
    /// `Some` if this declaration's name marks it as an implicit root
    /// operation type (`Query` or `Mutation`).
    pub fn root_operation(&self) -> Option<RootOperationKind> {
        RootOperationKind::from_type_name(&self.name)
    }
}
