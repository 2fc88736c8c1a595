use crate::resolver::ConcurrentTypeResolver;
use crate::resolver::SequentialTypeResolver;
use crate::resolver::SymbolTable;
use crate::schema::ResolutionPolicy;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use gqlsdl_parser::SdlParser;
use gqlsdl_parser::ast::Declaration;
use gqlsdl_parser::ast::RawTypeRef;
use gqlsdl_parser::ast::RootOperationKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates declarations from one or more schema sources and builds a
/// [`Schema`] from them.
///
/// ```
/// use gqlsdl_core::ResolutionPolicy;
/// use gqlsdl_core::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .policy(ResolutionPolicy::Concurrent)
///     .load_str(None, "type Query { me: User } type User { name: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(schema.query_type().name(), "Query");
/// ```
#[derive(Debug)]
pub struct SchemaBuilder<R = ()> {
    declarations: Vec<Declaration>,
    field_resolvers: HashMap<String, R>,
    policy: ResolutionPolicy,
}
impl SchemaBuilder<()> {
    pub fn new() -> Self {
        Self {
            declarations: vec![],
            field_resolvers: HashMap::new(),
            policy: ResolutionPolicy::default(),
        }
    }
}
impl Default for SchemaBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}
impl<R> SchemaBuilder<R> {
    /// Attaches `handle` to every object-type field named `field_name`.
    pub fn bind_field_resolver(mut self, field_name: impl Into<String>, handle: R) -> Self {
        self.field_resolvers.insert(field_name.into(), handle);
        self
    }

    /// Replaces the resolver handles (and their type) this builder binds.
    pub fn with_field_resolvers<TResolver>(
        self,
        field_resolvers: HashMap<String, TResolver>,
    ) -> SchemaBuilder<TResolver> {
        SchemaBuilder {
            declarations: self.declarations,
            field_resolvers,
            policy: self.policy,
        }
    }

    pub fn policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reads and loads the schema file at `file_path`.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            SchemaBuildError::SchemaFileReadError {
                path: file_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        self.load_str(Some(file_path), content.as_str())
    }

    pub fn load_files<P: AsRef<Path>>(
        mut self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for file_path in file_paths {
            self = self.load_file(file_path)?;
        }
        Ok(self)
    }

    /// Parses `content` and adds its declarations. The scanner runs on its
    /// own thread, feeding the parser.
    pub fn load_str(mut self, file_path: Option<&Path>, content: &str) -> Result<Self> {
        let document = SdlParser::parse_pipelined(content, file_path).map_err(|error| {
            SchemaBuildError::ParseError {
                file: file_path.map(Path::to_path_buf),
                error,
            }
        })?;
        log::debug!(
            "loaded {} declaration(s) from {}",
            document.declarations.len(),
            file_path.map_or_else(|| "<input>".to_string(), |p| p.display().to_string()),
        );
        self.declarations.extend(document.declarations);
        Ok(self)
    }

    /// Resolves every loaded declaration and assembles the [`Schema`].
    ///
    /// With [`ResolutionPolicy::Concurrent`] this drives resolution on a
    /// private single-threaded runtime. Called from within a tokio runtime
    /// it fails with [`SchemaBuildError::AsyncRuntimeError`]; use
    /// [`build_async`](Self::build_async) there instead.
    pub fn build(self) -> Result<Schema<R>> {
        match self.policy {
            ResolutionPolicy::Sequential => {
                let table = SequentialTypeResolver::resolve(&self.declarations)?;
                Self::assemble(&self.declarations, table, self.field_resolvers)
            }
            ResolutionPolicy::Concurrent => {
                if tokio::runtime::Handle::try_current().is_ok() {
                    return Err(SchemaBuildError::AsyncRuntimeError {
                        message: "concurrent resolution cannot block inside a tokio \
                            runtime; call `build_async()` instead"
                            .to_string(),
                    });
                }
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .build()
                    .map_err(|err| SchemaBuildError::AsyncRuntimeError {
                        message: err.to_string(),
                    })?;
                runtime.block_on(self.build_async())
            }
        }
    }

    /// Like [`build`](Self::build), for callers already running inside a
    /// tokio runtime.
    pub async fn build_async(self) -> Result<Schema<R>> {
        let table = match self.policy {
            ResolutionPolicy::Sequential => SequentialTypeResolver::resolve(&self.declarations)?,
            ResolutionPolicy::Concurrent => {
                ConcurrentTypeResolver::resolve(self.declarations.clone()).await?
            }
        };
        Self::assemble(&self.declarations, table, self.field_resolvers)
    }

    fn assemble(
        declarations: &[Declaration],
        table: SymbolTable,
        field_resolvers: HashMap<String, R>,
    ) -> Result<Schema<R>> {
        let mut schema_query: Option<&RawTypeRef> = None;
        let mut schema_mutation: Option<&RawTypeRef> = None;
        for declaration in declarations {
            let Declaration::Schema(schema_decl) = declaration else {
                continue;
            };
            for (operation, slot) in [
                (RootOperationKind::Query, &mut schema_query),
                (RootOperationKind::Mutation, &mut schema_mutation),
            ] {
                let Some(type_ref) = schema_decl.root_operation_type(operation) else {
                    continue;
                };
                if slot.is_some() {
                    return Err(SchemaBuildError::DuplicateRootOperationDefinition {
                        operation,
                        line: type_ref.line,
                    });
                }
                *slot = Some(type_ref);
            }
        }

        let types = table.into_types_map();
        let query_type = Self::root_operation_type(&types, RootOperationKind::Query, schema_query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            Self::root_operation_type(&types, RootOperationKind::Mutation, schema_mutation)?;

        let schema = Schema {
            field_resolvers,
            mutation_type,
            query_type,
            types,
        };
        for unbound in schema.unbound_resolver_names() {
            log::debug!("resolver `{unbound}` matches no object field");
        }
        log::debug!(
            "built schema with {} declared type(s) and {} bound field(s)",
            schema.defined_types().count(),
            schema.bound_fields().len(),
        );
        Ok(schema)
    }

    /// Picks the root type for `operation`: the type named in a
    /// `schema { ... }` block if there is one, otherwise the type with the
    /// conventional name (`Query`, `Mutation`) if one was declared.
    fn root_operation_type(
        types: &IndexMap<String, GraphQLType>,
        operation: RootOperationKind,
        schema_type_ref: Option<&RawTypeRef>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        let (type_name, type_) = match schema_type_ref {
            Some(type_ref) => match types.get(type_ref.name.as_str()) {
                Some(type_) => (type_ref.name.as_str(), type_),
                None => return Err(SchemaBuildError::UndeclaredType {
                    name: type_ref.name.clone(),
                    line: type_ref.line,
                }),
            },
            None => {
                let conventional_name = match operation {
                    RootOperationKind::Query => "Query",
                    RootOperationKind::Mutation => "Mutation",
                };
                match types.get(conventional_name) {
                    Some(type_) => (conventional_name, type_),
                    None => return Ok(None),
                }
            }
        };

        if type_.as_object().is_none() {
            return Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name: type_name.to_string(),
                found: type_.kind(),
                line: schema_type_ref
                    .map(|type_ref| type_ref.line)
                    .or(type_.def_line())
                    .unwrap_or(1),
            });
        }
        Ok(Some(NamedGraphQLTypeRef::new(type_name, GraphQLTypeKind::Object)))
    }
}
