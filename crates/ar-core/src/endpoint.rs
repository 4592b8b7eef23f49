//! Provider Authorization Endpoint Construction
//!
//! Builds the URL of the external provider's authorization endpoint for a
//! validated request. The trait is a pure function of its inputs; hosts with
//! provider-specific needs (extra parameters, signed state) can substitute
//! their own implementation.

use tracing::debug;

use crate::account_store::{Provider, ProviderType};
use crate::authorizer::AuthorizationRequest;
use crate::error::{AuthorizeError, Result};

/// Builds the provider authorization endpoint URL for a validated request.
pub trait ProviderEndpointResolver: Send + Sync {
    fn endpoint(
        &self,
        request: &AuthorizationRequest,
        callback_uri: &str,
        provider: &Provider,
    ) -> Result<String>;
}

/// Default endpoint builder covering the well-known provider types.
///
/// Produces `{endpoint}?response_type=code&client_id=…&redirect_uri=…&scope=…`
/// with percent-encoded values. Known provider types fall back to their
/// public authorization endpoints and default scopes; generic OIDC providers
/// must configure an endpoint explicitly.
#[derive(Debug, Default)]
pub struct StandardEndpointResolver;

impl StandardEndpointResolver {
    pub fn new() -> Self {
        Self
    }

    fn authorization_endpoint(provider: &Provider) -> Result<&str> {
        if let Some(endpoint) = provider.authorization_endpoint.as_deref() {
            return Ok(endpoint);
        }
        match provider.provider_type {
            ProviderType::Google => Ok("https://accounts.google.com/o/oauth2/v2/auth"),
            ProviderType::Github => Ok("https://github.com/login/oauth/authorize"),
            ProviderType::Facebook => Ok("https://www.facebook.com/dialog/oauth"),
            ProviderType::Linkedin => Ok("https://www.linkedin.com/oauth/v2/authorization"),
            ProviderType::Oidc => Err(AuthorizeError::provider(
                "oidc provider has no authorization endpoint configured",
            )),
        }
    }

    fn scope(provider: &Provider) -> String {
        if !provider.scopes.is_empty() {
            return provider.scopes.join(" ");
        }
        match provider.provider_type {
            ProviderType::Google | ProviderType::Oidc => "openid profile email".to_string(),
            ProviderType::Github => "user:email".to_string(),
            ProviderType::Facebook => "email".to_string(),
            ProviderType::Linkedin => "r_liteprofile r_emailaddress".to_string(),
        }
    }
}

impl ProviderEndpointResolver for StandardEndpointResolver {
    fn endpoint(
        &self,
        _request: &AuthorizationRequest,
        callback_uri: &str,
        provider: &Provider,
    ) -> Result<String> {
        let endpoint = Self::authorization_endpoint(provider)?;
        let url = format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}",
            endpoint,
            urlencoding::encode(&provider.client_id),
            urlencoding::encode(callback_uri),
            urlencoding::encode(&Self::scope(provider)),
        );

        debug!(provider = %provider.provider_type, url = %url, "built authorization endpoint");
        Ok(url)
    }
}
