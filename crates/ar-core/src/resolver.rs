//! Collaborator Contracts
//!
//! The redirect flow delegates application and account-store lookup to
//! injected resolvers so hosts can wire real directory backends, and tests
//! can substitute doubles. Resolvers return `Ok(None)` for a clean miss and
//! `Err` only for infrastructure failures.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::account_store::AccountStore;
use crate::application::Application;
use crate::authorizer::AuthorizationRequest;
use crate::error::Result;

/// Resolves the application bound to an inbound request.
///
/// The request is assumed already authenticated/bound by the host; this
/// resolver only looks the application up. `Ok(None)` means no application
/// could be bound, which the authorizer treats as a misconfiguration.
#[async_trait]
pub trait ApplicationResolver: Send + Sync {
    async fn resolve(&self, request: &AuthorizationRequest) -> Result<Option<Application>>;
}

/// Resolves an account store by href.
#[async_trait]
pub trait AccountStoreResolver: Send + Sync {
    async fn resolve(&self, href: &str) -> Result<Option<AccountStore>>;
}

/// Single-tenant resolver serving one configured application for every
/// request.
pub struct StaticApplicationResolver {
    application: Application,
}

impl StaticApplicationResolver {
    pub fn new(application: Application) -> Self {
        Self { application }
    }
}

#[async_trait]
impl ApplicationResolver for StaticApplicationResolver {
    async fn resolve(&self, _request: &AuthorizationRequest) -> Result<Option<Application>> {
        Ok(Some(self.application.clone()))
    }
}

/// In-memory account-store registry keyed by href.
#[derive(Default)]
pub struct InMemoryAccountStoreResolver {
    stores: HashMap<String, AccountStore>,
}

impl InMemoryAccountStoreResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stores(stores: impl IntoIterator<Item = AccountStore>) -> Self {
        Self {
            stores: stores
                .into_iter()
                .map(|store| (store.href.clone(), store))
                .collect(),
        }
    }

    pub fn insert(&mut self, store: AccountStore) {
        self.stores.insert(store.href.clone(), store);
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[async_trait]
impl AccountStoreResolver for InMemoryAccountStoreResolver {
    async fn resolve(&self, href: &str) -> Result<Option<AccountStore>> {
        Ok(self.stores.get(href).cloned())
    }
}
