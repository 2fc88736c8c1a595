use crate::resolver::SharedSymbolTable;
use crate::resolver::SymbolTable;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeFactory;
use gqlsdl_parser::ast::Declaration;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Resolves every declaration as its own task, so declarations may
/// reference each other in any order, including mutually.
///
/// Each task first publishes its own name, then waits for each name it
/// references, then builds its type. Because no task waits before
/// publishing, every name that will ever exist is published eventually,
/// and a name nobody declares is detected as soon as the last task
/// publishes rather than by a timeout.
pub struct ConcurrentTypeResolver;
impl ConcurrentTypeResolver {
    /// Must be called from within a tokio runtime. `schema { ... }`
    /// declarations declare no type and are skipped.
    ///
    /// The first task to fail fails the whole resolution; the remaining
    /// tasks are aborted.
    pub async fn resolve(declarations: Vec<Declaration>) -> Result<SymbolTable> {
        let declarations: Vec<Arc<Declaration>> = declarations
            .into_iter()
            .filter(|declaration| declaration.name().is_some())
            .map(Arc::new)
            .collect();
        let table = Arc::new(SharedSymbolTable::new(declarations.len()));

        let mut tasks = JoinSet::new();
        for declaration in &declarations {
            let table = Arc::clone(&table);
            let declaration = Arc::clone(declaration);
            tasks.spawn(async move {
                Self::resolve_declaration(&table, &declaration).await
            });
        }
        log::debug!("spawned {} resolution task(s)", declarations.len());

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => (),
                Ok(Err(error)) => {
                    log::debug!("concurrent resolution failed: {error}");
                    return Err(error);
                }
                Err(join_error) => match join_error.try_into_panic() {
                    Ok(payload) => std::panic::resume_unwind(payload),
                    Err(join_error) => unreachable!("resolution task was cancelled: {join_error}"),
                },
            }
        }

        table.finish(declarations.iter().map(|declaration| declaration.as_ref()))
    }

    async fn resolve_declaration(
        table: &SharedSymbolTable,
        declaration: &Declaration,
    ) -> Result<()> {
        let (Some(type_name), Some(kind)) = (
            declaration.name(),
            GraphQLTypeKind::from_declaration_kind(declaration.kind()),
        ) else {
            unreachable!("only type declarations are resolved");
        };
        table.publish(NamedGraphQLTypeRef::new(type_name, kind), declaration.line())?;

        let mut resolved: HashMap<String, NamedGraphQLTypeRef> = HashMap::new();
        for (referenced_name, line) in declaration.referenced_type_names() {
            if resolved.contains_key(referenced_name) {
                continue;
            }
            let type_ref = table.lookup(referenced_name, line).await?;
            resolved.insert(referenced_name.to_string(), type_ref);
        }

        let type_ = TypeFactory::new(&resolved).build(declaration)?;
        log::trace!("resolved `{type_name}` from line {}", declaration.line());
        table.store(type_name, type_);
        Ok(())
    }
}
