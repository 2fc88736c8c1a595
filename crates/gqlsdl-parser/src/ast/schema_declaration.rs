use crate::ast::RawTypeRef;
use crate::ast::RootOperationKind;

/// `schema { query: Q mutation: M }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDeclaration {
    pub query: Option<RawTypeRef>,
    pub mutation: Option<RawTypeRef>,
    pub line: usize,
}

impl SchemaDeclaration {
    pub fn root_operation_type(&self, kind: RootOperationKind) -> Option<&RawTypeRef> {
        match kind {
            RootOperationKind::Query => self.query.as_ref(),
            RootOperationKind::Mutation => self.mutation.as_ref(),
        }
    }
}
