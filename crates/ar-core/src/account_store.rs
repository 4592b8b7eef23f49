//! Account Store and Provider Domain Models
//!
//! An account store is a directory-like entity identified by href. Stores
//! that are backed by an external identity provider carry a [`Provider`]
//! configuration describing that third-party service.

use serde::{Deserialize, Serialize};

/// A directory-like entity that may be backed by an external identity
/// provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStore {
    /// Opaque identifier used to resolve this store.
    pub href: String,

    pub name: String,

    /// External identity-provider configuration, when this store federates
    /// authentication. A store without one cannot serve the redirect flow.
    #[serde(default)]
    pub provider: Option<Provider>,
}

impl AccountStore {
    pub fn new(href: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            name: name.into(),
            provider: None,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }
}

/// Supported external identity-provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Google,
    Github,
    Facebook,
    Linkedin,
    /// Generic OIDC provider; requires an explicit authorization endpoint.
    Oidc,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProviderType::Google => "google",
            ProviderType::Github => "github",
            ProviderType::Facebook => "facebook",
            ProviderType::Linkedin => "linkedin",
            ProviderType::Oidc => "oidc",
        };
        write!(f, "{}", s)
    }
}

/// Configuration for a third-party identity/authorization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    /// OAuth client id registered with the provider.
    pub client_id: String,

    /// Scopes to request. Empty means the provider type's defaults apply.
    #[serde(default)]
    pub scopes: Vec<String>,

    /// Explicit authorization endpoint. Optional for well-known provider
    /// types, required for generic OIDC providers.
    #[serde(default)]
    pub authorization_endpoint: Option<String>,
}

impl Provider {
    pub fn new(provider_type: ProviderType, client_id: impl Into<String>) -> Self {
        Self {
            provider_type,
            client_id: client_id.into(),
            scopes: Vec::new(),
            authorization_endpoint: None,
        }
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn with_authorization_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.authorization_endpoint = Some(endpoint.into());
        self
    }
}
