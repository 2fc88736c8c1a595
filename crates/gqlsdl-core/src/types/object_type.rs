use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents an object type declared with `type Name { ... }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl ObjectType {
    /// The 1-based line this [`ObjectType`] was declared on.
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of fields defined on the type in the
    /// schema.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    /// The [`InterfaceType`]s this type declares with `implements`, in
    /// declaration order. References that do not resolve in `types` are
    /// skipped.
    pub fn interfaces<'a>(
        &self,
        types: &'a IndexMap<String, GraphQLType>,
    ) -> Vec<&'a InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.deref(types).ok())
            .filter_map(|type_| type_.as_interface())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
