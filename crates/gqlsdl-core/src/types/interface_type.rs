use crate::types::Field;
use indexmap::IndexMap;

/// Represents an interface type declared with `interface Name { ... }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) name: String,
}
impl InterfaceType {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
