/// `scalar Name`: a custom scalar, opaque to the schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub line: usize,
}
