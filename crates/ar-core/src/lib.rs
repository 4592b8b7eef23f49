//! AuthRelay Core
//!
//! Redirect construction for external identity-provider authorization flows.
//! Given an inbound request naming a target account store, the
//! [`RedirectAuthorizer`] validates the requested response type and callback
//! URI, resolves the store's configured provider, and produces the provider
//! authorization endpoint URL to redirect to.
//!
//! Lookups (application, account store) and endpoint construction are
//! injected collaborator traits so hosts can wire real directory backends or
//! test doubles. The component itself holds no mutable state and performs no
//! I/O of its own.

pub mod account_store;
pub mod api;
pub mod application;
pub mod authorizer;
pub mod endpoint;
pub mod error;
pub mod resolver;

pub use account_store::{AccountStore, Provider, ProviderType};
pub use api::{authorize_router, AuthorizeApiState, AuthorizeParams};
pub use application::Application;
pub use authorizer::{
    AuthorizationRequest, RedirectAuthorizer, RedirectResult, RELAY_TOKEN_RESPONSE_TYPE,
};
pub use endpoint::{ProviderEndpointResolver, StandardEndpointResolver};
pub use error::{AuthorizeError, ErrorResponse, Result};
pub use resolver::{
    AccountStoreResolver, ApplicationResolver, InMemoryAccountStoreResolver,
    StaticApplicationResolver,
};
