use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use gqlsdl_parser::ast::RawTypeRef;
use indexmap::IndexMap;

/// A [`RawTypeRef`] after its name has been resolved: a named type,
/// optionally wrapped in `List` and/or `NonNull`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResolvedType {
    List(Box<ResolvedType>),
    Named(NamedGraphQLTypeRef),
    NonNull(Box<ResolvedType>),
}
impl ResolvedType {
    /// Wraps `named` according to the list and non-null markers on `raw`.
    /// `[T!]!` becomes `NonNull(List(NonNull(Named(T))))`.
    pub fn from_raw(raw: &RawTypeRef, named: NamedGraphQLTypeRef) -> Self {
        let mut resolved = Self::Named(named);
        if raw.is_list {
            if raw.is_list_item_non_null {
                resolved = Self::NonNull(Box::new(resolved));
            }
            resolved = Self::List(Box::new(resolved));
        }
        if raw.is_non_null {
            resolved = Self::NonNull(Box::new(resolved));
        }
        resolved
    }

    /// Recursively unwrap this [`ResolvedType`] and return the inner-most
    /// [`NamedGraphQLTypeRef`].
    pub fn innermost_named_type_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_named_type_ref(),
            Self::Named(type_ref) => type_ref,
        }
    }

    pub fn innermost_type<'a>(
        &self,
        types: &'a IndexMap<String, GraphQLType>,
    ) -> Option<&'a GraphQLType> {
        self.innermost_named_type_ref().deref(types).ok()
    }

    /// True if this type is a list, looking through a `NonNull` wrapper.
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named(_) => false,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::List(inner) => format!("[{}]", inner.to_graphql_string()),
            Self::Named(type_ref) => type_ref.name().to_string(),
            Self::NonNull(inner) => format!("{}!", inner.to_graphql_string()),
        }
    }
}
impl std::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
