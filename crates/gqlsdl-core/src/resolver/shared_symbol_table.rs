use crate::resolver::SymbolTable;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use gqlsdl_parser::ast::Declaration;
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::watch;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The value carried by a per-name latch. A latch starts `Pending` and is
/// fired exactly once, to one of the other two states.
#[derive(Clone, Debug)]
enum LatchState {
    Pending,
    Published(NamedGraphQLTypeRef),
    /// Every declaration has published and none declared this name.
    Abandoned,
}

#[derive(Debug)]
struct PendingLatch {
    sender: watch::Sender<LatchState>,
    /// Line of the first reference that had to wait, reported if the name
    /// never gets published.
    first_wait_line: usize,
}

#[derive(Debug)]
struct PublishedName {
    type_ref: NamedGraphQLTypeRef,
    /// `None` for built-in scalars.
    def_line: Option<usize>,
}

#[derive(Debug)]
struct SharedState {
    built: HashMap<String, GraphQLType>,
    latches: HashMap<String, PendingLatch>,
    published: HashMap<String, PublishedName>,
    unpublished_owners: usize,
}

/// The symbol table shared by the tasks of one concurrent build.
///
/// All state sits behind a single lock, held only while looking a name up
/// (and registering a latch on a miss) or while publishing a name (and
/// firing its latch). It is never held across an `.await`.
///
/// A latch is a `watch` channel created by the first task to miss on a name.
/// Every later task that misses on the same name subscribes to the same
/// channel. When the owner publishes, the latch is removed and fired once,
/// waking every waiter.
#[derive(Debug)]
pub struct SharedSymbolTable {
    state: Mutex<SharedState>,
}
impl SharedSymbolTable {
    /// Creates a table for a build in which `owner_count` declarations will
    /// each publish one name.
    pub fn new(owner_count: usize) -> Self {
        let published = GraphQLType::builtins()
            .into_iter()
            .map(|(name, type_)| {
                (name.to_string(), PublishedName {
                    type_ref: NamedGraphQLTypeRef::new(name, type_.kind()),
                    def_line: None,
                })
            })
            .collect();
        Self {
            state: Mutex::new(SharedState {
                built: HashMap::new(),
                latches: HashMap::new(),
                published,
                unpublished_owners: owner_count,
            }),
        }
    }

    /// Makes `type_ref` visible to every current and future
    /// [`lookup`](Self::lookup), waking any task waiting on its name.
    ///
    /// Each owner must call this exactly once, duplicates included, so the
    /// table can tell when no more names will appear. Once the last owner
    /// has published, every still-pending latch is fired as abandoned.
    pub fn publish(&self, type_ref: NamedGraphQLTypeRef, line: usize) -> Result<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.unpublished_owners = state.unpublished_owners.saturating_sub(1);

        let existing_line = state.published
            .get(type_ref.name())
            .map(|published| published.def_line);
        let result = match existing_line {
            Some(Some(first_line)) => Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_ref.name().to_string(),
                first_line: Some(first_line.min(line)),
                line: first_line.max(line),
            }),
            Some(None) => Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_ref.name().to_string(),
                first_line: None,
                line,
            }),
            None => {
                if let Some(latch) = state.latches.remove(type_ref.name()) {
                    log::trace!(
                        "publishing `{}` wakes {} waiter(s)",
                        type_ref.name(),
                        latch.sender.receiver_count(),
                    );
                    latch.sender.send_replace(LatchState::Published(type_ref.clone()));
                }
                state.published.insert(type_ref.name().to_string(), PublishedName {
                    type_ref,
                    def_line: Some(line),
                });
                Ok(())
            }
        };

        if state.unpublished_owners == 0 && !state.latches.is_empty() {
            log::debug!(
                "all declarations published; abandoning {} unresolved name(s)",
                state.latches.len(),
            );
            for (_, latch) in state.latches.drain() {
                latch.sender.send_replace(LatchState::Abandoned);
            }
        }
        result
    }

    /// Returns a reference to the type named `name`, waiting until some
    /// task publishes it.
    ///
    /// Fails with [`SchemaBuildError::UndeclaredType`] (reporting `line`)
    /// once every owner has published and none of them declared `name`.
    pub async fn lookup(&self, name: &str, line: usize) -> Result<NamedGraphQLTypeRef> {
        let mut receiver = {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            if let Some(published) = state.published.get(name) {
                return Ok(published.type_ref.clone());
            }
            if state.unpublished_owners == 0 {
                return Err(SchemaBuildError::UndeclaredType {
                    name: name.to_string(),
                    line,
                });
            }
            log::trace!("waiting for `{name}` (referenced on line {line})");
            state.latches
                .entry(name.to_string())
                .or_insert_with(|| {
                    let (sender, _receiver) = watch::channel(LatchState::Pending);
                    PendingLatch {
                        sender,
                        first_wait_line: line,
                    }
                })
                .sender
                .subscribe()
        };

        let fired = match receiver.wait_for(|latch| !matches!(latch, LatchState::Pending)).await {
            Ok(latch) => (*latch).clone(),
            // The sender only goes away without firing if the table itself
            // is dropped mid-build.
            Err(_) => LatchState::Abandoned,
        };
        match fired {
            LatchState::Published(type_ref) => Ok(type_ref),
            LatchState::Pending | LatchState::Abandoned => Err(SchemaBuildError::UndeclaredType {
                name: name.to_string(),
                line,
            }),
        }
    }

    /// Stores the finished type for a published name.
    pub fn store(&self, type_name: &str, type_: GraphQLType) {
        self.state.lock().built.insert(type_name.to_string(), type_);
    }

    /// Number of latches created but not yet fired.
    pub fn pending_latch_count(&self) -> usize {
        self.state.lock().latches.len()
    }

    /// Moves every stored type into a [`SymbolTable`], in the order of
    /// `declarations`. Call once all tasks have completed successfully.
    ///
    /// A latch that is still pending at this point names a type no
    /// declaration defined; it is reported as
    /// [`SchemaBuildError::UndeclaredType`] at the line of its first waiter.
    pub fn finish<'a>(
        &self,
        declarations: impl IntoIterator<Item = &'a Declaration>,
    ) -> Result<SymbolTable> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if let Some((name, latch)) = state.latches
            .iter()
            .min_by_key(|(_, latch)| latch.first_wait_line)
        {
            return Err(SchemaBuildError::UndeclaredType {
                name: name.to_string(),
                line: latch.first_wait_line,
            });
        }

        let mut table = SymbolTable::new();
        for declaration in declarations {
            let Some(type_name) = declaration.name() else {
                continue;
            };
            let Some(type_) = state.built.remove(type_name) else {
                unreachable!("every resolved declaration stores its type before completing");
            };
            table.bind(type_name, declaration.line(), type_)?;
        }
        Ok(table)
    }
}
