//! Application Domain Model
//!
//! An application registered with AuthRelay. The only configuration the
//! redirect flow cares about is the ordered list of authorized callback
//! URIs: pre-registered post-authorization redirect targets.

use serde::{Deserialize, Serialize};

/// An application registered with AuthRelay.
///
/// The callback list is ordered and caller-defined; the first entry is the
/// default callback when a request supplies no `redirect_uri`. An empty list
/// means the application is misconfigured and no redirect can be produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Application {
    pub name: String,

    /// Authorized post-authorization redirect targets, in priority order.
    #[serde(default)]
    pub authorized_callback_uris: Vec<String>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            authorized_callback_uris: Vec::new(),
        }
    }

    /// Append an authorized callback URI.
    pub fn with_callback_uri(mut self, uri: impl Into<String>) -> Self {
        self.authorized_callback_uris.push(uri.into());
        self
    }

    /// Exact-match check against the authorized callback list.
    pub fn is_authorized_callback(&self, uri: &str) -> bool {
        self.authorized_callback_uris.iter().any(|u| u == uri)
    }

    /// The default callback: the first authorized entry, if any.
    pub fn default_callback_uri(&self) -> Option<&str> {
        self.authorized_callback_uris.first().map(String::as_str)
    }
}
