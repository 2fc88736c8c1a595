use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A `String`-named, non-owning reference to a [`GraphQLType`].
///
/// Fields, union members and interface lists hold these rather than the
/// types they point at, so object types may reference each other (or
/// themselves) freely: every named type is owned by exactly one types map
/// and is reached through [`NamedGraphQLTypeRef::deref()`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedGraphQLTypeRef {
    kind: GraphQLTypeKind,
    name: String,
}
impl NamedGraphQLTypeRef {
    pub fn new(name: impl Into<String>, kind: GraphQLTypeKind) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Looks up the referenced type in `types`.
    pub fn deref<'a>(
        &self,
        types: &'a IndexMap<String, GraphQLType>,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        types.get(self.name.as_str())
            .ok_or_else(|| DerefByNameError::DanglingReference(self.name.clone()))
    }

    /// The kind of type this reference points at, known as soon as the
    /// referenced name has been declared.
    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no type named `{0}` exists in this schema")]
    DanglingReference(String),
}

/// Anything that can answer "which type, if any, is declared as `name`?".
///
/// Implemented by the sequential [`SymbolTable`](crate::resolver::SymbolTable)
/// and by the per-declaration lookup maps the concurrent resolver collects
/// before building each type.
pub trait NamedTypeLookup {
    fn lookup_named_type(&self, name: &str) -> Option<NamedGraphQLTypeRef>;
}

impl NamedTypeLookup for HashMap<String, NamedGraphQLTypeRef> {
    fn lookup_named_type(&self, name: &str) -> Option<NamedGraphQLTypeRef> {
        self.get(name).cloned()
    }
}
