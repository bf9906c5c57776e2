mod common;

use api::{app::build_router, gql::build_schema, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    build_router(state, schema)
}

fn graphql_post(query: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = router(test_state(seeded_store()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_public_query_over_http() {
    let app = router(test_state(seeded_store()));

    let response = app
        .oneshot(graphql_post("{ authorsContacts { name } }", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["data"]["authorsContacts"],
        json!([{ "name": "Ana" }, { "name": "Bo" }])
    );
}

#[tokio::test]
async fn test_bearer_token_unlocks_article() {
    let state = test_state(seeded_store());
    let token = state.jwt_service().create_token("editor-1").unwrap();
    let app = router(state);

    let response = app
        .oneshot(graphql_post(
            r#"{ article(slug: "t2") { data { attributes { title } } } }"#,
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["data"]["article"]["data"]["attributes"]["title"],
        json!("T2")
    );
}

#[tokio::test]
async fn test_article_without_token_is_forbidden() {
    let app = router(test_state(seeded_store()));

    let response = app
        .oneshot(graphql_post(r#"{ article(slug: "t1") { data { id } } }"#, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["message"], json!("Forbidden access"));
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = router(test_state(seeded_store()));

    let response = app
        .oneshot(graphql_post("{ authorsContacts { name } }", Some("not-a-jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = router(test_state(seeded_store()));

    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_graphiql_hidden_without_introspection() {
    let app = router(test_state(seeded_store()));

    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
