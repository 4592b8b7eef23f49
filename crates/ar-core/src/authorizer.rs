//! Redirect Authorizer
//!
//! The core validation-and-construction pipeline: validate `response_type`,
//! resolve the application, pick the callback URI against the application's
//! whitelist, resolve the account store, and ask the endpoint builder for
//! the provider authorization URL.
//!
//! The pipeline is linear with no retries: every failure is either a
//! propagated validation error or the definitive not-found outcome.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::application::Application;
use crate::endpoint::ProviderEndpointResolver;
use crate::error::{AuthorizeError, Result};
use crate::resolver::{AccountStoreResolver, ApplicationResolver};

/// The single supported `response_type` value.
pub const RELAY_TOKEN_RESPONSE_TYPE: &str = "relay_token";

/// Immutable snapshot of an inbound authorization request.
///
/// All parameters are optional at this layer; requiredness is enforced by
/// the authorizer so that missing parameters surface as [`AuthorizeError`]
/// values rather than transport-level rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizationRequest {
    pub response_type: Option<String>,
    pub redirect_uri: Option<String>,
    pub account_store_href: Option<String>,
}

impl AuthorizationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = Some(response_type.into());
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn with_account_store_href(mut self, href: impl Into<String>) -> Self {
        self.account_store_href = Some(href.into());
        self
    }
}

/// Terminal outcome of the redirect flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectResult {
    /// Redirect the caller to `location`.
    Found { location: String },
    /// The account store href did not resolve; maps to HTTP 404.
    NotFound,
}

/// Validates an authorization request and produces either a redirect target
/// or a not-found signal.
///
/// Holds only shared read-only collaborators; safe to invoke concurrently
/// for independent requests.
pub struct RedirectAuthorizer {
    applications: Arc<dyn ApplicationResolver>,
    account_stores: Arc<dyn AccountStoreResolver>,
    endpoints: Arc<dyn ProviderEndpointResolver>,
}

impl RedirectAuthorizer {
    pub fn new(
        applications: Arc<dyn ApplicationResolver>,
        account_stores: Arc<dyn AccountStoreResolver>,
        endpoints: Arc<dyn ProviderEndpointResolver>,
    ) -> Self {
        Self {
            applications,
            account_stores,
            endpoints,
        }
    }

    /// Run the redirect pipeline for one request.
    pub async fn handle(&self, request: &AuthorizationRequest) -> Result<RedirectResult> {
        Self::validate_response_type(request)?;

        let application = self
            .applications
            .resolve(request)
            .await?
            .ok_or(AuthorizeError::MisconfiguredApplication)?;

        let callback_uri = Self::resolve_callback_uri(&application, request)?;

        let href = request.account_store_href.as_deref().unwrap_or_default();
        let Some(store) = self.account_stores.resolve(href).await? else {
            info!(href, "account store not found");
            return Ok(RedirectResult::NotFound);
        };

        let Some(provider) = store.provider.as_ref() else {
            info!(href = %store.href, "account store has no provider configured");
            return Ok(RedirectResult::NotFound);
        };

        let location = self.endpoints.endpoint(request, &callback_uri, provider)?;
        debug!(
            application = %application.name,
            store = %store.name,
            location = %location,
            "authorization redirect resolved"
        );

        Ok(RedirectResult::Found { location })
    }

    /// The `response_type` parameter must be present and exactly equal the
    /// supported literal.
    fn validate_response_type(request: &AuthorizationRequest) -> Result<()> {
        let response_type = request.response_type.as_deref().unwrap_or_default();
        if response_type.trim().is_empty() {
            return Err(AuthorizeError::invalid_request("Must specify response_type"));
        }
        if response_type != RELAY_TOKEN_RESPONSE_TYPE {
            return Err(AuthorizeError::invalid_request(format!(
                "Invalid response_type. Only {} supported.",
                RELAY_TOKEN_RESPONSE_TYPE
            )));
        }
        Ok(())
    }

    /// Pick the callback URI: a supplied `redirect_uri` must appear verbatim
    /// in the application's authorized list, otherwise default to the first
    /// authorized entry.
    fn resolve_callback_uri(
        application: &Application,
        request: &AuthorizationRequest,
    ) -> Result<String> {
        if application.authorized_callback_uris.is_empty() {
            return Err(AuthorizeError::MisconfiguredApplication);
        }

        match request.redirect_uri.as_deref() {
            Some(redirect_uri) => {
                if application.is_authorized_callback(redirect_uri) {
                    Ok(redirect_uri.to_string())
                } else {
                    Err(AuthorizeError::invalid_request(
                        "Specified redirect_uri is not in the application's \
                         configured authorized callback uris",
                    ))
                }
            }
            // List order is significant and caller-defined.
            None => Ok(application.authorized_callback_uris[0].clone()),
        }
    }
}
