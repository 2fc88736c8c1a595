/// Reserved words of the schema language.
///
/// A keyword is only reserved at the token level: the parser still accepts a
/// keyword wherever a name is expected (e.g. a field called `type`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SdlKeyword {
    Enum,
    Implements,
    Input,
    Interface,
    Scalar,
    Schema,
    Type,
    Union,
}

impl SdlKeyword {
    /// Maps identifier text to a keyword, if it is one.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "enum" => Self::Enum,
            "implements" => Self::Implements,
            "input" => Self::Input,
            "interface" => Self::Interface,
            "scalar" => Self::Scalar,
            "schema" => Self::Schema,
            "type" => Self::Type,
            "union" => Self::Union,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Implements => "implements",
            Self::Input => "input",
            Self::Interface => "interface",
            Self::Scalar => "scalar",
            Self::Schema => "schema",
            Self::Type => "type",
            Self::Union => "union",
        }
    }
}

impl std::fmt::Display for SdlKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
