//! Authorize HTTP Endpoint
//!
//! GET /authorize - validates the request and redirects the caller to the
//! external provider's authorization endpoint, or answers 404 when the
//! target account store does not resolve.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::authorizer::{AuthorizationRequest, RedirectAuthorizer, RedirectResult};

/// Authorize API state
#[derive(Clone)]
pub struct AuthorizeApiState {
    pub authorizer: Arc<RedirectAuthorizer>,
}

/// Authorization request query parameters.
///
/// Everything is optional at the extractor so that missing parameters are
/// rejected by the authorizer with a descriptive error instead of a generic
/// framework 400.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthorizeParams {
    pub response_type: Option<String>,
    pub redirect_uri: Option<String>,
    pub account_store_href: Option<String>,
}

impl From<AuthorizeParams> for AuthorizationRequest {
    fn from(params: AuthorizeParams) -> Self {
        Self {
            response_type: params.response_type,
            redirect_uri: params.redirect_uri,
            account_store_href: params.account_store_href,
        }
    }
}

/// Authorization endpoint - redirects to the external provider
#[utoipa::path(
    get,
    path = "/authorize",
    tag = "authorize",
    params(AuthorizeParams),
    responses(
        (status = 302, description = "Redirect to the provider authorization endpoint"),
        (status = 400, description = "Invalid request or misconfigured application", body = crate::error::ErrorResponse),
        (status = 404, description = "Account store not found"),
        (status = 500, description = "Resolver or provider failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn authorize(
    State(state): State<AuthorizeApiState>,
    Query(params): Query<AuthorizeParams>,
) -> Response {
    let request = AuthorizationRequest::from(params);

    match state.authorizer.handle(&request).await {
        Ok(RedirectResult::Found { location }) => {
            info!(location = %location, "redirecting to provider authorization endpoint");
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Ok(RedirectResult::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Create the authorize router
pub fn authorize_router(state: AuthorizeApiState) -> Router {
    Router::new()
        .route("/authorize", get(authorize))
        .with_state(state)
}
