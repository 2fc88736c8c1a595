use indexmap::IndexMap;

/// Represents an enum type declared with `enum Name { A B }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn value_names(&self) -> Vec<&str> {
        self.values.keys().map(|name| name.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumValue {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
