use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a union type declared with `union Name = A | B`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl UnionType {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each member type of this union.
    ///
    /// The order matches the order members are listed in the schema.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of the [`GraphQLType`]s that are members of this
    /// union.
    pub fn member_types<'a>(
        &self,
        types: &'a IndexMap<String, GraphQLType>,
    ) -> Vec<&'a GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(types).ok())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
