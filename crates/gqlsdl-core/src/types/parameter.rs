use crate::types::ResolvedType;

/// Represents an argument declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) def_line: usize,
    pub(super) default_value: Option<String>,
    pub(super) name: String,
    pub(super) param_type: ResolvedType,
}
impl Parameter {
    pub fn def_line(&self) -> usize {
        self.def_line
    }

    /// The raw source text of this parameter's default value, if any. The
    /// text is not interpreted.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn param_type(&self) -> &ResolvedType {
        &self.param_type
    }
}
