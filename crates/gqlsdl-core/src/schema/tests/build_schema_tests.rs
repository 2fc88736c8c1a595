use crate::schema::ExecutableSchemaFactory;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::build_schema;
use crate::schema::build_schema_concurrent;
use crate::types::GraphQLTypeKind;
use crate::types::ResolvedType;
use gqlsdl_parser::SdlParseErrorKind;
use rayon::prelude::*;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;
type Handle = fn() -> &'static str;

fn say_hello() -> &'static str {
    "hello"
}

fn no_resolvers() -> HashMap<String, Handle> {
    HashMap::new()
}

#[test]
fn hello_query_with_bound_resolver() -> Result<()> {
    let resolvers: HashMap<String, Handle> = HashMap::from([
        ("hello".to_string(), say_hello as Handle),
    ]);
    let schema = build_schema("type Query { hello: String }", resolvers)?;

    let query_type = schema.query_type();
    assert_eq!(query_type.fields().len(), 1);
    let hello = &query_type.fields()["hello"];
    assert_eq!(hello.field_type().innermost_named_type_ref().kind(), GraphQLTypeKind::String);
    assert!(hello.parameters().is_empty());

    let handle = schema.field_resolver("Query", "hello").expect("resolver is bound");
    assert_eq!(handle(), "hello");
    Ok(())
}

#[test]
fn field_with_three_int_arguments() -> Result<()> {
    let schema = build_schema(
        "type Query { hex(r: Int, g: Int, b: Int): String }",
        no_resolvers(),
    )?;

    let hex = &schema.query_type().fields()["hex"];
    assert_eq!(hex.field_type().to_graphql_string(), "String");
    let params: Vec<(&str, GraphQLTypeKind)> = hex.parameters()
        .values()
        .map(|param| (param.name(), param.param_type().innermost_named_type_ref().kind()))
        .collect();
    assert_eq!(params, vec![
        ("r", GraphQLTypeKind::Int),
        ("g", GraphQLTypeKind::Int),
        ("b", GraphQLTypeKind::Int),
    ]);
    Ok(())
}

#[test]
fn starships_resolve_in_order() -> Result<()> {
    let schema = build_schema(
        concat!(
            "type Starship { name: String } ",
            "type Human { name: String appearsIn: [String] starships: [Starship] } ",
            "type Query { human(id: ID): Human }",
        ),
        no_resolvers(),
    )?;

    assert_eq!(
        schema.defined_types().map(|t| t.name()).collect::<Vec<_>>(),
        vec!["Starship", "Human", "Query"],
    );
    let human = schema.get_type("Human").unwrap().as_object().unwrap();
    let starships = human.fields()["starships"].field_type();
    let ResolvedType::List(inner) = starships else {
        panic!("expected a list, got {starships:?}");
    };
    let ResolvedType::Named(type_ref) = inner.as_ref() else {
        panic!("expected a named type, got {inner:?}");
    };
    assert_eq!(type_ref.name(), "Starship");
    assert!(type_ref.deref(schema.types()).unwrap().as_object().is_some());

    let appears_in = human.fields()["appearsIn"].field_type();
    assert_eq!(appears_in.to_graphql_string(), "[String]");
    Ok(())
}

#[test]
fn union_after_members() -> Result<()> {
    let schema = build_schema(
        concat!(
            "type Photo { url: String }\n",
            "type Person { name: String }\n",
            "union SearchResult = Photo | Person\n",
            "type Query { search: [SearchResult] }\n",
        ),
        no_resolvers(),
    )?;
    let union_type = schema.get_type("SearchResult").unwrap().as_union().unwrap();
    assert_eq!(union_type.member_type_names(), vec!["Photo", "Person"]);
    assert_eq!(union_type.def_line(), 3);
    Ok(())
}

#[test]
fn union_before_members_fails_sequentially() {
    let err = build_schema(
        concat!(
            "union SearchResult = Photo | Person\n",
            "type Photo { url: String }\n",
            "type Person { name: String }\n",
            "type Query { search: [SearchResult] }\n",
        ),
        no_resolvers(),
    ).unwrap_err();
    assert_eq!(err, SchemaBuildError::UndeclaredType {
        name: "Photo".to_string(),
        line: 1,
    });
    assert_eq!(err.line(), Some(1));
}

#[tokio::test]
async fn union_before_members_resolves_concurrently() -> Result<()> {
    let schema = build_schema_concurrent(
        concat!(
            "union SearchResult = Photo | Person\n",
            "type Photo { url: String }\n",
            "type Person { name: String }\n",
            "type Query { search: [SearchResult] }\n",
        ),
        no_resolvers(),
    ).await?;
    let union_type = schema.get_type("SearchResult").unwrap().as_union().unwrap();
    assert_eq!(union_type.member_type_names(), vec!["Photo", "Person"]);
    Ok(())
}

#[test]
fn unterminated_block_cites_opening_line() {
    let err = build_schema(
        "scalar Date\ntype Query { hello: String",
        no_resolvers(),
    ).unwrap_err();
    assert_eq!(err.line(), Some(2));
    let SchemaBuildError::ParseError { error, .. } = err else {
        panic!("expected a parse error");
    };
    assert!(error.is_lexical());
}

#[test]
fn double_pipe_union_is_rejected() {
    let err = build_schema(
        "type A { a: Int }\ntype B { b: Int }\nunion X = A || B\ntype Query { x: X }",
        no_resolvers(),
    ).unwrap_err();
    let SchemaBuildError::ParseError { error, .. } = err else {
        panic!("expected a parse error");
    };
    assert_eq!(error.kind(), &SdlParseErrorKind::MalformedUnionMembers);
    assert_eq!(error.line(), 3);
}

#[test]
fn query_is_not_a_reusable_type() {
    let err = build_schema(
        "type Query { hello: String }\ntype Wrapper { q: Query }",
        no_resolvers(),
    ).unwrap_err();
    assert_eq!(err, SchemaBuildError::UndeclaredType {
        name: "Query".to_string(),
        line: 2,
    });
}

#[tokio::test]
async fn undeclared_name_fails_under_both_policies() {
    let source = "type Query {\n  me: Nobody\n}";

    let err = build_schema(source, no_resolvers()).unwrap_err();
    assert_eq!(err, SchemaBuildError::UndeclaredType {
        name: "Nobody".to_string(),
        line: 2,
    });

    let err = build_schema_concurrent(source, no_resolvers()).await.unwrap_err();
    assert_eq!(err, SchemaBuildError::UndeclaredType {
        name: "Nobody".to_string(),
        line: 2,
    });
}

#[tokio::test]
async fn non_null_markers_wrap_resolved_types() -> Result<()> {
    let schema = build_schema_concurrent(
        "type Query { ids(first: Int!): [ID!]! }",
        no_resolvers(),
    ).await?;
    let ids = &schema.query_type().fields()["ids"];
    assert!(ids.field_type().is_non_null());
    assert_eq!(ids.field_type().to_graphql_string(), "[ID!]!");
    assert_eq!(ids.parameters()["first"].param_type().to_graphql_string(), "Int!");
    Ok(())
}

/// Separate builds share no state and may run fully in parallel.
#[test]
fn independent_builds_in_parallel() {
    let results: Vec<Result<(String, usize)>> = (0..64)
        .into_par_iter()
        .map(|i| {
            let source = format!(
                "type Query {{ item: Item{i} }}\ntype Item{i} {{ n: Int }}",
            );
            let schema = crate::SchemaBuilder::new()
                .policy(crate::ResolutionPolicy::Concurrent)
                .load_str(None, &source)?
                .build()?;
            let item = schema.query_type().fields()["item"]
                .field_type()
                .innermost_named_type_ref()
                .name()
                .to_string();
            Ok((item, schema.types().len()))
        })
        .collect();

    for (i, result) in results.into_iter().enumerate() {
        let (item, type_count) = result.unwrap();
        assert_eq!(item, format!("Item{i}"));
        assert_eq!(type_count, 7);
    }
}

/// An execution engine that records, for each root query field, whether a
/// resolver handle is bound.
struct FieldListingEngine;

#[derive(Debug, PartialEq)]
struct ListedFields(Vec<(String, bool)>);

impl ExecutableSchemaFactory<Handle> for FieldListingEngine {
    type Executable = ListedFields;
    type Error = String;

    fn build_executable(
        &self,
        schema: Schema<Handle>,
    ) -> std::result::Result<ListedFields, String> {
        let query_type = schema.query_type();
        if query_type.fields().is_empty() {
            return Err("query type has no fields".to_string());
        }
        Ok(ListedFields(
            query_type.fields()
                .keys()
                .map(|name| {
                    let bound = schema.field_resolver(query_type.name(), name).is_some();
                    (name.to_string(), bound)
                })
                .collect(),
        ))
    }
}

#[test]
fn schema_is_handed_to_execution_engine() -> Result<()> {
    let resolvers: HashMap<String, Handle> = HashMap::from([
        ("hello".to_string(), say_hello as Handle),
    ]);
    let schema = build_schema("type Query { hello: String goodbye: String }", resolvers)?;
    let executable = schema.into_executable(&FieldListingEngine).unwrap();
    assert_eq!(executable, ListedFields(vec![
        ("hello".to_string(), true),
        ("goodbye".to_string(), false),
    ]));
    Ok(())
}
