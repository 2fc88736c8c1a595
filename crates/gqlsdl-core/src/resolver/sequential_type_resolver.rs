use crate::resolver::SymbolTable;
use crate::schema::SchemaBuildError;
use crate::types::TypeFactory;
use gqlsdl_parser::ast::Declaration;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Resolves declarations strictly in the order they are given.
///
/// Each declaration is built against the table as it stands when the
/// declaration is reached, so it may only reference built-in scalars and
/// earlier declarations. A forward reference, or a type referencing itself,
/// fails with [`SchemaBuildError::UndeclaredType`].
///
/// Object types named `Query` or `Mutation` are the schema's implicit
/// roots, not reusable types, so no declaration may reference them.
#[derive(Debug, Default)]
pub struct SequentialTypeResolver {
    table: SymbolTable,
}
impl SequentialTypeResolver {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    /// Resolves every declaration in `declarations`, in order.
    /// `schema { ... }` declarations declare no type and are skipped.
    pub fn resolve<'a>(
        declarations: impl IntoIterator<Item = &'a Declaration>,
    ) -> Result<SymbolTable> {
        let mut resolver = Self::new();
        for declaration in declarations {
            resolver.resolve_declaration(declaration)?;
        }
        Ok(resolver.finish())
    }

    /// Builds `declaration` against the types resolved so far and binds it.
    pub fn resolve_declaration(&mut self, declaration: &Declaration) -> Result<()> {
        let Some(type_name) = declaration.name() else {
            return Ok(());
        };
        self.table.check_unbound(type_name, declaration.line())?;
        let type_ = TypeFactory::new(&self.table).build(declaration)?;
        match declaration {
            Declaration::Object(decl) if decl.root_operation().is_some() => {
                log::trace!("binding `{type_name}` as a root operation type");
                self.table.bind_root_operation(type_name, declaration.line(), type_)
            }
            _ => self.table.bind(type_name, declaration.line(), type_),
        }
    }

    pub fn finish(self) -> SymbolTable {
        log::debug!(
            "sequential resolution bound {} type(s)",
            self.table.len(),
        );
        self.table
    }
}
