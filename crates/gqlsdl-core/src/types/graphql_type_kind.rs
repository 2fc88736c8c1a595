use crate::types::GraphQLType;
use gqlsdl_parser::ast::DeclarationKind;

/// Similar to [`GraphQLType`] except without the corresponding type metadata.
/// Carried by every [`NamedGraphQLTypeRef`](crate::types::NamedGraphQLTypeRef)
/// so a reference can be checked for the right kind of type before the
/// referenced type itself has been built.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }

    /// The kind of type a declaration produces. `None` for `schema { ... }`.
    pub fn from_declaration_kind(kind: DeclarationKind) -> Option<Self> {
        match kind {
            DeclarationKind::Object => Some(Self::Object),
            DeclarationKind::Interface => Some(Self::Interface),
            DeclarationKind::InputObject => Some(Self::InputObject),
            DeclarationKind::Union => Some(Self::Union),
            DeclarationKind::Enum => Some(Self::Enum),
            DeclarationKind::Scalar => Some(Self::Scalar),
            DeclarationKind::Schema => None,
        }
    }

    /// True for the five scalars every schema starts with.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    /// Whether a field argument or input field may have this type.
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => GraphQLTypeKind::Bool,
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::Float => GraphQLTypeKind::Float,
            GraphQLType::ID => GraphQLTypeKind::ID,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Int => GraphQLTypeKind::Int,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::String => GraphQLTypeKind::String,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
