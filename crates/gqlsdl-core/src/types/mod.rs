mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod named_graphql_type_ref;
mod object_type;
mod parameter;
mod resolved_type;
mod scalar_type;
mod type_factory;
mod union_type;

pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use named_graphql_type_ref::DerefByNameError;
pub use named_graphql_type_ref::NamedGraphQLTypeRef;
pub use named_graphql_type_ref::NamedTypeLookup;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use resolved_type::ResolvedType;
pub use scalar_type::ScalarType;
pub use type_factory::TypeFactory;
pub use union_type::UnionType;
