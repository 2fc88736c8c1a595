/// The root operations a schema can designate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RootOperationKind {
    Query,
    Mutation,
}

impl RootOperationKind {
    /// Object declarations with these exact names are treated as root
    /// operation types when no `schema { ... }` declaration is present.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Query" => Some(Self::Query),
            "Mutation" => Some(Self::Mutation),
            _ => None,
        }
    }

    /// Maps a field name of a `schema { ... }` block to its operation.
    pub fn from_schema_field(name: &str) -> Option<Self> {
        match name {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            _ => None,
        }
    }

    /// The lowercase operation name used in `schema { ... }` blocks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl std::fmt::Display for RootOperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
