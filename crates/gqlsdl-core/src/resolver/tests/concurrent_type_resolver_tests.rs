use crate::SchemaBuildError;
use crate::resolver::ConcurrentTypeResolver;
use crate::resolver::SequentialTypeResolver;
use crate::resolver::tests::utils::declared_names;
use crate::resolver::tests::utils::parse_declarations;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[tokio::test]
async fn mutual_reference_resolves() -> Result<()> {
    let source = concat!(
        "type A { b: B }\n",
        "type B { a: A }\n",
    );
    assert!(SequentialTypeResolver::resolve(&parse_declarations(source)).is_err());

    let table = ConcurrentTypeResolver::resolve(parse_declarations(source)).await?;
    assert_eq!(declared_names(&table), vec!["A", "B"]);
    let a = table.get("A").unwrap().as_object().unwrap();
    assert_eq!(a.fields()["b"].field_type().innermost_named_type_ref().name(), "B");
    let b = table.get("B").unwrap().as_object().unwrap();
    assert_eq!(b.fields()["a"].field_type().innermost_named_type_ref().name(), "A");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn forward_references_resolve_on_many_threads() -> Result<()> {
    let source = concat!(
        "type Query { search(term: String): [SearchResult] me: User }\n",
        "union SearchResult = Photo | User\n",
        "type User implements Node { id: ID! friends: [User] photos: [Photo] }\n",
        "type Photo implements Node { id: ID! owner: User }\n",
        "interface Node { id: ID! }\n",
    );
    let table = ConcurrentTypeResolver::resolve(parse_declarations(source)).await?;

    // Declaration order is kept regardless of completion order.
    assert_eq!(
        declared_names(&table),
        vec!["Query", "SearchResult", "User", "Photo", "Node"],
    );
    let search_result = table.get("SearchResult").unwrap().as_union().unwrap();
    assert_eq!(search_result.member_type_names(), vec!["Photo", "User"]);
    let user = table.get("User").unwrap().as_object().unwrap();
    assert_eq!(user.interface_names(), vec!["Node"]);
    assert_eq!(user.interfaces(table.types()).len(), 1);
    assert_eq!(
        user.fields()["friends"].field_type().innermost_named_type_ref().kind(),
        GraphQLTypeKind::Object,
    );
    Ok(())
}

#[tokio::test]
async fn self_reference_resolves() -> Result<()> {
    let table = ConcurrentTypeResolver::resolve(
        parse_declarations("type User { friends: [User] }"),
    ).await?;
    let user = table.get("User").unwrap().as_object().unwrap();
    assert_eq!(user.fields()["friends"].field_type().to_graphql_string(), "[User]");
    Ok(())
}

#[tokio::test]
async fn undeclared_name_fails_without_hanging() {
    let declarations = parse_declarations(concat!(
        "type Query { a: A }\n",
        "type A { ghost: Ghost }\n",
    ));
    let err = ConcurrentTypeResolver::resolve(declarations).await.unwrap_err();
    assert_eq!(err, SchemaBuildError::UndeclaredType {
        name: "Ghost".to_string(),
        line: 2,
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn undeclared_name_with_many_waiters() {
    let declarations = parse_declarations(concat!(
        "type A { x: Missing }\n",
        "type B { x: Missing }\n",
        "type C { x: Missing }\n",
        "type D { a: A b: B c: C }\n",
    ));
    let err = ConcurrentTypeResolver::resolve(declarations).await.unwrap_err();
    assert!(matches!(err, SchemaBuildError::UndeclaredType { name, .. } if name == "Missing"));
}

#[tokio::test]
async fn duplicate_declaration_fails() {
    let declarations = parse_declarations(concat!(
        "type Query { a: Int }\n",
        "scalar Date\n",
        "enum Date { A }\n",
    ));
    let err = ConcurrentTypeResolver::resolve(declarations).await.unwrap_err();
    assert_eq!(err, SchemaBuildError::DuplicateTypeDefinition {
        type_name: "Date".to_string(),
        first_line: Some(2),
        line: 3,
    });
}

#[tokio::test]
async fn empty_input() -> Result<()> {
    let table = ConcurrentTypeResolver::resolve(vec![]).await?;
    assert_eq!(table.len(), 5);
    Ok(())
}

/// Concurrent resolution publishes every declared name, roots included.
#[tokio::test]
async fn root_operation_type_can_be_referenced() -> Result<()> {
    let table = ConcurrentTypeResolver::resolve(parse_declarations(concat!(
        "type Wrapper { q: Query }\n",
        "type Query { hello: String }\n",
    ))).await?;
    let wrapper = table.get("Wrapper").unwrap().as_object().unwrap();
    assert_eq!(
        wrapper.fields()["q"].field_type().innermost_named_type_ref().kind(),
        GraphQLTypeKind::Object,
    );
    Ok(())
}
