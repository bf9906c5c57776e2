use api::{auth::Claims, config::AppConfig, gql::AppSchema, AppState};
use async_graphql::{Request, Variables};
use chrono::Utc;
use infra::{
    models::{ArticleRow, WriterRow},
    MemoryStore, Services,
};

pub const TEST_JWT_SECRET: &str = "test-secret";

#[allow(dead_code)]
pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        ..AppConfig::default()
    }
}

#[allow(dead_code)]
pub fn test_state(store: MemoryStore) -> AppState {
    AppState::new(test_config(), Services::from_store(store))
}

#[allow(dead_code)]
pub fn writer(id: i64, name: &str, email: &str) -> WriterRow {
    WriterRow {
        id,
        name: name.to_string(),
        email: Some(email.to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[allow(dead_code)]
pub fn article(
    id: i64,
    title: &str,
    slug: &str,
    description: &str,
    author: Option<i64>,
) -> ArticleRow {
    ArticleRow {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        content: Some(format!("Body of {title}")),
        author_id: author,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        published_at: Some(Utc::now()),
    }
}

/// Same as [`article`] but never published.
#[allow(dead_code)]
pub fn draft(
    id: i64,
    title: &str,
    slug: &str,
    description: &str,
    author: Option<i64>,
) -> ArticleRow {
    ArticleRow {
        published_at: None,
        ..article(id, title, slug, description, author)
    }
}

/// Authors Ana (1) and Bo (2); Ana wrote "t1" and "t2", Bo wrote nothing.
#[allow(dead_code)]
pub fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.upsert_writer(writer(1, "Ana", "a@x.com"));
    store.upsert_writer(writer(2, "Bo", "bo@x.com"));
    store.upsert_article(article(10, "T1", "t1", "D1", Some(1)));
    store.upsert_article(article(11, "T2", "t2", "D2", Some(1)));
    store
}

#[allow(dead_code)]
pub fn test_claims() -> Claims {
    Claims::new("editor-1", 60)
}

/// Helper function to execute GraphQL queries
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
    auth_claims: Option<Claims>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    if let Some(claims) = auth_claims {
        request = request.data(claims);
    }

    schema.execute(request).await
}
