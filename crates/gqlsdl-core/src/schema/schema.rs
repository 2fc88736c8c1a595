use crate::schema::ExecutableSchemaFactory;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use gqlsdl_parser::ast::RootOperationKind;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A fully resolved type graph with its root operation types identified and
/// field-resolver handles bound.
///
/// `R` is the caller's resolver handle type. The schema only records which
/// fields have a handle; it never invokes or inspects one.
#[derive(Clone, Debug)]
pub struct Schema<R = ()> {
    pub(crate) field_resolvers: HashMap<String, R>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl<R> Schema<R> {
    /// Every field with a bound resolver handle, as `(type name, field
    /// name)` pairs, in declaration order.
    pub fn bound_fields(&self) -> Vec<(&str, &str)> {
        let field_resolvers = &self.field_resolvers;
        self.types
            .values()
            .filter_map(|type_| type_.as_object())
            .flat_map(move |obj_type| {
                obj_type.fields()
                    .keys()
                    .filter(move |field_name| field_resolvers.contains_key(field_name.as_str()))
                    .map(move |field_name| (obj_type.name(), field_name.as_str()))
            })
            .collect()
    }

    /// Every type declared in the schema source, in declaration order.
    /// Excludes the built-in scalars.
    pub fn defined_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values().filter(|type_| !type_.is_builtin())
    }

    /// The resolver handle bound to `field_name` on the object type
    /// `type_name`, if the type has such a field and a handle was supplied
    /// for that field name.
    pub fn field_resolver(&self, type_name: &str, field_name: &str) -> Option<&R> {
        let obj_type = self.types.get(type_name)?.as_object()?;
        if !obj_type.fields().contains_key(field_name) {
            return None;
        }
        self.field_resolvers.get(field_name)
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Hands this schema to an execution engine.
    pub fn into_executable<TFactory: ExecutableSchemaFactory<R>>(
        self,
        factory: &TFactory,
    ) -> Result<TFactory::Executable, TFactory::Error> {
        factory.build_executable(self)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().map(|type_ref| self.deref_root(type_ref))
    }

    pub fn query_type(&self) -> &ObjectType {
        self.deref_root(&self.query_type)
    }

    pub fn root_operation_type(&self, operation: RootOperationKind) -> Option<&ObjectType> {
        match operation {
            RootOperationKind::Query => Some(self.query_type()),
            RootOperationKind::Mutation => self.mutation_type(),
        }
    }

    /// All types in the schema, built-in scalars first, then declared types
    /// in declaration order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Names of supplied resolver handles that no object field uses.
    pub fn unbound_resolver_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.field_resolvers
            .keys()
            .filter(|field_name| {
                !self.types
                    .values()
                    .filter_map(|type_| type_.as_object())
                    .any(|obj_type| obj_type.fields().contains_key(field_name.as_str()))
            })
            .map(|field_name| field_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    fn deref_root(&self, type_ref: &NamedGraphQLTypeRef) -> &ObjectType {
        match type_ref.deref(&self.types).map(|type_| type_.as_object()) {
            Ok(Some(obj_type)) => obj_type,
            _ => unreachable!(
                "root operation type `{}` is checked to be an object type when the schema is built",
                type_ref.name(),
            ),
        }
    }
}
