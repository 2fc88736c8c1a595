//! Symbol resolution and schema assembly for declarations parsed by
//! [`gqlsdl_parser`].
//!
//! A [`SchemaBuilder`] parses one or more sources, resolves every type
//! reference into a graph of named [`types`] (sequentially, or
//! concurrently with one task per declaration; see [`resolver`]), picks
//! the root query and mutation types, and binds caller-supplied resolver
//! handles to fields by name. The resulting [`Schema`] is handed to an
//! execution engine through [`ExecutableSchemaFactory`].

pub mod resolver;
pub mod schema;
pub mod types;

pub use schema::ExecutableSchemaFactory;
pub use schema::ResolutionPolicy;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::build_schema;
pub use schema::build_schema_concurrent;
