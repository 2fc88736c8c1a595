use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeLookup;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The table of resolved named types for one build.
///
/// Starts with the built-in scalars and only ever grows: once a name is
/// bound it is never rebound or removed. Entries keep the order they were
/// bound in.
///
/// Names bound with [`bind_root_operation`](Self::bind_root_operation) are
/// part of the table but invisible to [`lookup`](Self::lookup).
#[derive(Clone, Debug)]
pub struct SymbolTable {
    root_operation_names: HashSet<String>,
    types: IndexMap<String, GraphQLType>,
}
impl SymbolTable {
    pub fn new() -> Self {
        Self {
            root_operation_names: HashSet::new(),
            types: GraphQLType::builtins()
                .into_iter()
                .map(|(name, type_)| (name.to_string(), type_))
                .collect(),
        }
    }

    /// Binds `type_name` to `type_`.
    ///
    /// Fails with [`SchemaBuildError::DuplicateTypeDefinition`] if the name
    /// is already bound, including to a built-in scalar.
    pub fn bind(
        &mut self,
        type_name: &str,
        line: usize,
        type_: GraphQLType,
    ) -> Result<()> {
        self.check_unbound(type_name, line)?;
        log::trace!("bound `{type_name}` ({}) from line {line}", type_.kind());
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Binds a root operation type. It is kept for schema assembly but is
    /// not a reusable type: other declarations cannot reference it.
    pub fn bind_root_operation(
        &mut self,
        type_name: &str,
        line: usize,
        type_: GraphQLType,
    ) -> Result<()> {
        self.bind(type_name, line, type_)?;
        self.root_operation_names.insert(type_name.to_string());
        Ok(())
    }

    /// Fails the same way [`bind`](Self::bind) would if `type_name` is
    /// already bound.
    pub fn check_unbound(&self, type_name: &str, line: usize) -> Result<()> {
        match self.types.get(type_name) {
            Some(conflicting_type) => Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                first_line: conflicting_type.def_line(),
                line,
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn into_types_map(self) -> IndexMap<String, GraphQLType> {
        self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The number of bound names, built-in scalars included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// A reference to the type bound as `type_name`, if any. Root operation
    /// types are never returned.
    pub fn lookup(&self, type_name: &str) -> Option<NamedGraphQLTypeRef> {
        if self.root_operation_names.contains(type_name) {
            return None;
        }
        self.types
            .get(type_name)
            .map(|type_| NamedGraphQLTypeRef::new(type_name, type_.kind()))
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
impl NamedTypeLookup for SymbolTable {
    fn lookup_named_type(&self, name: &str) -> Option<NamedGraphQLTypeRef> {
        self.lookup(name)
    }
}
