use crate::schema::ResolutionPolicy;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use std::collections::HashMap;

/// Builds a [`Schema`] from a single source string with sequential
/// resolution, binding `field_resolvers` by field name.
///
/// ```
/// use std::collections::HashMap;
///
/// let resolvers = HashMap::from([("hello".to_string(), "say_hello")]);
/// let schema = gqlsdl_core::build_schema(
///     "type Query { hello: String }",
///     resolvers,
/// ).unwrap();
/// assert_eq!(schema.field_resolver("Query", "hello"), Some(&"say_hello"));
/// ```
pub fn build_schema<R>(
    source: &str,
    field_resolvers: HashMap<String, R>,
) -> Result<Schema<R>, SchemaBuildError> {
    SchemaBuilder::new()
        .with_field_resolvers(field_resolvers)
        .load_str(None, source)?
        .build()
}

/// Like [`build_schema`], but resolves declarations concurrently so they may
/// reference each other in any order.
pub async fn build_schema_concurrent<R>(
    source: &str,
    field_resolvers: HashMap<String, R>,
) -> Result<Schema<R>, SchemaBuildError> {
    SchemaBuilder::new()
        .with_field_resolvers(field_resolvers)
        .policy(ResolutionPolicy::Concurrent)
        .load_str(None, source)?
        .build_async()
        .await
}
