mod common;

use api::gql::{build_schema, extensions};
use common::*;
use infra::MemoryStore;

/// Type names declared by `type X {` lines of an SDL fragment.
fn declared_types(type_defs: &str) -> Vec<&str> {
    type_defs
        .lines()
        .filter_map(|line| line.trim().strip_prefix("type "))
        .filter_map(|rest| rest.split_whitespace().next())
        .filter(|name| *name != "Query")
        .collect()
}

#[test]
fn test_registered_type_defs_match_built_schema() {
    let schema = build_schema(test_state(MemoryStore::new()));
    let sdl = schema.sdl();

    let mut service = extensions::ExtensionService::default();
    extensions::register(&mut service);

    for type_defs in service.type_defs() {
        for name in declared_types(type_defs) {
            assert!(
                sdl.contains(&format!("type {name} {{")),
                "schema is missing type {name}:\n{sdl}"
            );
        }
    }

}

/// Field lines (`name: Type`) declared inside the type blocks of an SDL fragment.
fn declared_fields(type_defs: &str) -> Vec<&str> {
    type_defs
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("type ") && *line != "}")
        .collect()
}

#[test]
fn test_schema_serves_registered_field_types_verbatim() {
    let schema = build_schema(test_state(MemoryStore::new()));
    let sdl = schema.sdl();
    let served: Vec<&str> = sdl.lines().map(str::trim).collect();

    let mut service = extensions::ExtensionService::default();
    extensions::register(&mut service);

    for type_defs in service.type_defs() {
        for field in declared_fields(type_defs) {
            assert!(
                served.contains(&field),
                "schema does not serve `{field}` as registered:\n{sdl}"
            );
        }
    }

    assert!(served.contains(&"authorsContacts: [AuthorContact]"));
    assert!(served.contains(&"articles: [AuthorsArticles]"));
}

#[test]
fn test_internal_ids_are_not_exposed() {
    let schema = build_schema(test_state(MemoryStore::new()));
    let sdl = schema.sdl();

    assert!(!sdl.contains("writerId"));
    assert!(!sdl.contains("authorId"));
}

#[tokio::test]
async fn test_introspection_disabled_by_default() {
    let schema = build_schema(test_state(MemoryStore::new()));

    let response = execute_graphql(&schema, "{ __schema { queryType { name } } }", None, None).await;

    assert!(
        !response.errors.is_empty(),
        "introspection should be disabled unless GQL_INTROSPECTION=true"
    );
}
