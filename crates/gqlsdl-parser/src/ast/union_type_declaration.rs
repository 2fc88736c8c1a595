/// `union Name = A | B | C`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    /// Member type names in source order.
    pub members: Vec<String>,
    pub line: usize,
}
