//! AuthRelay Server
//!
//! HTTP front for the external-provider redirect flow: exposes
//! `GET /authorize` and answers with a redirect to the configured identity
//! provider's authorization endpoint, or 404 when the requested account
//! store is unknown.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AUTHRELAY_CONFIG` | - | Path to the TOML config file |
//! | `AUTHRELAY_HTTP_HOST` | `0.0.0.0` | Listen address |
//! | `AUTHRELAY_HTTP_PORT` | `8080` | Listen port |
//! | `AUTHRELAY_CORS_ORIGINS` | `*` | Comma-separated allowed origins |
//! | `RUST_LOG` | `info` | Log level |
//! | `LOG_FORMAT` | text | Set to `json` for JSON logs |

mod config;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use axum::http::HeaderValue;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use ar_core::{
    authorize_router, AuthorizeApiState, InMemoryAccountStoreResolver, RedirectAuthorizer,
    StandardEndpointResolver, StaticApplicationResolver,
};
use config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    ar_common::logging::init_logging("ar-server");

    info!("Starting AuthRelay server");

    let config = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    info!(
        application = %config.application.name,
        account_stores = config.account_stores.len(),
        "configuration loaded"
    );

    let authorizer = Arc::new(RedirectAuthorizer::new(
        Arc::new(StaticApplicationResolver::new(config.application.clone())),
        Arc::new(InMemoryAccountStoreResolver::from_stores(
            config.account_stores.clone(),
        )),
        Arc::new(StandardEndpointResolver::new()),
    ));

    let app = authorize_router(AuthorizeApiState { authorizer })
        .layer(cors_layer(&config.http.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.http.host, config.http.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("AuthRelay server stopped");
    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::new().allow_origin(Any));
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| anyhow!("invalid CORS origin: {}", o))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new().allow_origin(parsed))
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("shutdown signal received");
}
