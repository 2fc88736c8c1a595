/// `enum Name { VALUE_A VALUE_B }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValueDeclaration>,
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub line: usize,
}
