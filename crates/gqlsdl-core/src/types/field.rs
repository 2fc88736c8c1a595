use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::ResolvedType;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) field_type: ResolvedType,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) parent_type: NamedGraphQLTypeRef,
}
impl Field {
    /// The 1-based line this [`Field`] was defined on.
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    /// The description of this [`Field`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The resolved type this field produces.
    pub fn field_type(&self) -> &ResolvedType {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A map from ParameterName -> [`Parameter`], in the order the
    /// parameters are declared.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The object or interface type this field is defined on.
    pub fn parent_type(&self) -> &NamedGraphQLTypeRef {
        &self.parent_type
    }
}
