//! Authorize Endpoint HTTP Tests
//!
//! Drives the axum router directly and checks the status/header mapping of
//! the redirect flow.

use std::sync::Arc;

use ar_core::{
    authorize_router, AccountStore, Application, AuthorizeApiState, InMemoryAccountStoreResolver,
    Provider, ProviderType, RedirectAuthorizer, StandardEndpointResolver,
    StaticApplicationResolver,
};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

const STORE_HREF: &str = "https://relay.example.com/v1/stores/google-dir";

fn app() -> Router {
    let application = Application::new("portal")
        .with_callback_uri("https://portal.example.com/cb/a")
        .with_callback_uri("https://portal.example.com/cb/b");

    let stores = InMemoryAccountStoreResolver::from_stores([AccountStore::new(
        STORE_HREF,
        "Corporate Google",
    )
    .with_provider(Provider::new(ProviderType::Google, "client-123"))]);

    let authorizer = Arc::new(RedirectAuthorizer::new(
        Arc::new(StaticApplicationResolver::new(application)),
        Arc::new(stores),
        Arc::new(StandardEndpointResolver::new()),
    ));

    authorize_router(AuthorizeApiState { authorizer })
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn error_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_request_redirects_to_provider() {
    let uri = format!(
        "/authorize?response_type=relay_token&account_store_href={}",
        urlencoding::encode(STORE_HREF)
    );
    let response = get(&uri).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    assert!(location.contains("redirect_uri=https%3A%2F%2Fportal.example.com%2Fcb%2Fa"));
}

#[tokio::test]
async fn whitelisted_redirect_uri_is_used() {
    let uri = format!(
        "/authorize?response_type=relay_token&account_store_href={}&redirect_uri={}",
        urlencoding::encode(STORE_HREF),
        urlencoding::encode("https://portal.example.com/cb/b")
    );
    let response = get(&uri).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.contains("redirect_uri=https%3A%2F%2Fportal.example.com%2Fcb%2Fb"));
}

#[tokio::test]
async fn missing_response_type_is_bad_request() {
    let uri = format!(
        "/authorize?account_store_href={}",
        urlencoding::encode(STORE_HREF)
    );
    let response = get(&uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["error"], "INVALID_REQUEST");
}

#[tokio::test]
async fn unlisted_redirect_uri_is_bad_request() {
    let uri = format!(
        "/authorize?response_type=relay_token&account_store_href={}&redirect_uri={}",
        urlencoding::encode(STORE_HREF),
        urlencoding::encode("https://evil.example.com/cb")
    );
    let response = get(&uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["error"], "INVALID_REQUEST");
}

#[tokio::test]
async fn unknown_account_store_is_not_found() {
    let response = get(
        "/authorize?response_type=relay_token&account_store_href=https%3A%2F%2Frelay.example.com%2Fv1%2Fstores%2Fmissing",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn misconfigured_application_is_reported() {
    let stores = InMemoryAccountStoreResolver::from_stores([AccountStore::new(
        STORE_HREF,
        "Corporate Google",
    )
    .with_provider(Provider::new(ProviderType::Google, "client-123"))]);

    let authorizer = Arc::new(RedirectAuthorizer::new(
        Arc::new(StaticApplicationResolver::new(Application::new("portal"))),
        Arc::new(stores),
        Arc::new(StandardEndpointResolver::new()),
    ));
    let router = authorize_router(AuthorizeApiState { authorizer });

    let uri = format!(
        "/authorize?response_type=relay_token&account_store_href={}",
        urlencoding::encode(STORE_HREF)
    );
    let response = router
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = error_body(response).await;
    assert_eq!(body["error"], "MISCONFIGURED_APPLICATION");
}
