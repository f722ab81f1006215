use ads_backend_rs::{
    app,
    types::{AppContext, Context},
    utils::database,
};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn create_test_context(database_url: &str, max_connections: u32) -> Arc<Context> {
    let db_conn = database::connect(database_url, max_connections)
        .await
        .unwrap();
    database::migrate(&db_conn).await.unwrap();

    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        db_conn,
    })
}

pub async fn create_test_router() -> Router {
    // One connection: every in-memory connection is its own database.
    app::router(create_test_context("sqlite::memory:", 1).await)
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    send_request(router, request).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
