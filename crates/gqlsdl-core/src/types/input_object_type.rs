use crate::types::ResolvedType;
use indexmap::IndexMap;

/// Represents an input object type declared with `input Name { ... }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A field of an [`InputObjectType`]. Input fields take no arguments.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) field_type: ResolvedType,
    pub(super) name: String,
}
impl InputField {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field_type(&self) -> &ResolvedType {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
