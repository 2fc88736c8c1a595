mod build_schema;
mod executable_schema_factory;
mod resolution_policy;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;

pub use build_schema::build_schema;
pub use build_schema::build_schema_concurrent;
pub use executable_schema_factory::ExecutableSchemaFactory;
pub use resolution_policy::ResolutionPolicy;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
