use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a named type in a [`Schema`](crate::schema::Schema): one of
/// the five built-in scalars or a type declared in the schema source.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    /// Every built-in scalar, paired with its type name.
    pub fn builtins() -> [(&'static str, GraphQLType); 5] {
        [
            ("Boolean", GraphQLType::Bool),
            ("Float", GraphQLType::Float),
            ("ID", GraphQLType::ID),
            ("Int", GraphQLType::Int),
            ("String", GraphQLType::String),
        ]
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The 1-based line this type was declared on. `None` for built-ins.
    pub fn def_line(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String => None,
            Self::Enum(type_) => Some(type_.def_line()),
            Self::InputObject(type_) => Some(type_.def_line()),
            Self::Interface(type_) => Some(type_.def_line()),
            Self::Object(type_) => Some(type_.def_line()),
            Self::Scalar(type_) => Some(type_.def_line()),
            Self::Union(type_) => Some(type_.def_line()),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.kind().is_builtin()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
            Self::Union(type_) => type_.name(),
        }
    }
}
