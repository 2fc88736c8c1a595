/// A custom scalar declared with `scalar Name`. Its values are opaque.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) def_line: usize,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
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
