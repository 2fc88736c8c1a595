use crate::schema::ResolutionPolicy;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLTypeKind;
use gqlsdl_parser::SdlParseErrorKind;
use gqlsdl_parser::ast::RootOperationKind;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() -> Result<()> {
        let schema = SchemaBuilder::new()
            .build();

        assert!(schema.is_err());
        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));

        Ok(())
    }

    #[test]
    fn load_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { hello: String }")?
            .build()?;

        assert!(schema.mutation_type().is_none());
        assert_eq!(schema.types().len(), 6);
        assert_eq!(schema.defined_types().count(), 1);

        let query_type = schema.query_type();
        assert_eq!(query_type.name(), "Query");
        assert_eq!(query_type.def_line(), 1);
        assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["hello"]);

        Ok(())
    }

    #[test]
    fn load_query_and_mutation_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { rename(name: String!): User }\n",
                "type User { name: String }\n",
                "type Query { me: User }\n",
            ))?
            .policy(ResolutionPolicy::Concurrent)
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(
            schema.root_operation_type(RootOperationKind::Mutation).map(|t| t.name()),
            Some("Mutation"),
        );

        Ok(())
    }

    #[test]
    fn load_invalid_schema_syntax() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "this is not valid syntax");

        let Err(SchemaBuildError::ParseError { file, error }) = schema else {
            panic!("expected a parse error");
        };
        assert_eq!(file, None);
        assert_eq!(error.line(), 1);
        assert!(matches!(error.kind(), SdlParseErrorKind::UnexpectedToken { found, .. } if found == "this"));

        Ok(())
    }

    #[test]
    fn parse_error_carries_file_path() {
        let path = PathBuf::from("schemas/api.graphql");
        let err = SchemaBuilder::new()
            .load_str(Some(path.as_path()), "type Query {\n  a: Int\n")
            .unwrap_err();

        assert_eq!(err.line(), Some(1));
        let SchemaBuildError::ParseError { file, error } = &err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(file.as_deref(), Some(path.as_path()));
        assert!(error.is_lexical());
        assert!(err.to_string().starts_with("schema parse error: schemas/api.graphql:1:12: error: "));
    }

    #[test]
    fn load_missing_file() {
        let err = SchemaBuilder::new()
            .load_file(Path::new("/definitely/not/a/real/schema.graphql"))
            .unwrap_err();
        assert!(matches!(err, SchemaBuildError::SchemaFileReadError { .. }));
        assert_eq!(err.line(), None);
    }
}

mod async_context {
    use super::*;

    #[tokio::test]
    async fn blocking_concurrent_build_inside_runtime_fails() -> Result<()> {
        let builder = || SchemaBuilder::new()
            .policy(ResolutionPolicy::Concurrent)
            .load_str(None, "type Query { me: User } type User { name: String }");

        let err = builder()?.build().unwrap_err();
        assert!(matches!(err, SchemaBuildError::AsyncRuntimeError { .. }), "{err}");
        assert_eq!(err.line(), None);

        let schema = builder()?.build_async().await?;
        assert_eq!(schema.query_type().name(), "Query");
        Ok(())
    }

    #[tokio::test]
    async fn blocking_sequential_build_inside_runtime_succeeds() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type User { name: String } type Query { me: User }")?
            .build()?;
        assert_eq!(schema.query_type().name(), "Query");
        Ok(())
    }
}

mod multiple_sources {
    use super::*;

    #[test]
    fn later_source_may_reference_earlier_source() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type User { name: String }")?
            .load_str(None, "type Query { me: User }")?
            .build()?;

        assert_eq!(
            schema.defined_types().map(|t| t.name()).collect::<Vec<_>>(),
            vec!["User", "Query"],
        );
        Ok(())
    }

    #[test]
    fn duplicate_type_across_sources() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .load_str(None, "\n\ntype Query { b: Int }")?
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Query".to_string(),
            first_line: Some(1),
            line: 3,
        });
        Ok(())
    }

    #[test]
    fn duplicate_schema_query_across_sources() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "schema { query: A }\ntype A { a: Int }")?
            .load_str(None, "type B { b: Int }\nschema { query: B }")?
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::DuplicateRootOperationDefinition {
            operation: RootOperationKind::Query,
            line: 2,
        });
        Ok(())
    }
}

mod root_operations {
    use super::*;

    #[test]
    fn schema_block_overrides_conventional_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root mutation: Change }\n",
                "type Root { a: Int }\n",
                "type Change { b: Int }\n",
                "type Query { ignored: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Change"));
        // Still part of the type graph, though no longer the root.
        assert!(schema.get_type("Query").is_some());
        Ok(())
    }

    #[test]
    fn schema_block_naming_undeclared_type() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nschema { query: Root }")?
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::UndeclaredType {
            name: "Root".to_string(),
            line: 2,
        });
        Ok(())
    }

    #[test]
    fn root_must_be_object_type() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "\nenum Query { A B }")?
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::InvalidRootOperationType {
            operation: RootOperationKind::Query,
            type_name: "Query".to_string(),
            found: GraphQLTypeKind::Enum,
            line: 2,
        });
        Ok(())
    }

    #[test]
    fn mutation_without_query() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(None, "type Mutation { a: Int }")?
            .build()
            .unwrap_err();

        assert_eq!(err, SchemaBuildError::NoQueryOperationTypeDefined);
        Ok(())
    }
}

mod resolver_binding {
    use super::*;

    #[test]
    fn binds_by_field_name_across_object_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .with_field_resolvers(HashMap::from([("name".to_string(), 7)]))
            .bind_field_resolver("unused", 9)
            .load_str(None, concat!(
                "interface Named { name: String }\n",
                "type User implements Named { name: String age: Int }\n",
                "type Query { me: User name: String }\n",
            ))?
            .build()?;

        assert_eq!(schema.field_resolver("User", "name"), Some(&7));
        assert_eq!(schema.field_resolver("Query", "name"), Some(&7));
        assert_eq!(schema.field_resolver("User", "age"), None);
        // Interfaces have no resolvers of their own.
        assert_eq!(schema.field_resolver("Named", "name"), None);
        assert_eq!(schema.field_resolver("Nope", "name"), None);

        assert_eq!(schema.bound_fields(), vec![("User", "name"), ("Query", "name")]);
        assert_eq!(schema.unbound_resolver_names(), vec!["unused"]);
        Ok(())
    }
}
