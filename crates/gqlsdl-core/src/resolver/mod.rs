//! Symbol resolution: turning raw declarations into a table of named types.
//!
//! Two policies share one [`TypeFactory`](crate::types::TypeFactory):
//!
//! * [`SequentialTypeResolver`] walks declarations in source order. A
//!   declaration may only name built-in scalars and types declared before
//!   it.
//! * [`ConcurrentTypeResolver`] runs one task per declaration. A task that
//!   names a type no one has published yet waits on a per-name latch in the
//!   [`SharedSymbolTable`] until its owner publishes it, so declaration
//!   order no longer matters.

mod concurrent_type_resolver;
mod sequential_type_resolver;
mod shared_symbol_table;
mod symbol_table;

pub use concurrent_type_resolver::ConcurrentTypeResolver;
pub use sequential_type_resolver::SequentialTypeResolver;
pub use shared_symbol_table::SharedSymbolTable;
pub use symbol_table::SymbolTable;

#[cfg(test)]
mod tests;
