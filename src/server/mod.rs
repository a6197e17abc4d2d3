//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::domain_provider::{DomainProvider, DomainProviderRegistry};
use crate::error::Result as AppResult;
use crate::service::SiteimproveService;
use crate::token::{SiteimproveTokenClient, TokenClient};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub siteimprove_service: Arc<SiteimproveService>,
    pub domain_registry: Arc<DomainProviderRegistry>,
    /// Provider selected by `domain_plugin_id`, resolved once at startup
    pub domain_provider: Arc<dyn DomainProvider>,
}

impl AppState {
    /// Build state with the built-in domain providers
    pub fn new(config: Config, token_client: Arc<dyn TokenClient>) -> AppResult<Self> {
        let registry = DomainProviderRegistry::with_builtin(&config.site);
        Self::with_registry(config, token_client, registry)
    }

    pub fn with_registry(
        config: Config,
        token_client: Arc<dyn TokenClient>,
        registry: DomainProviderRegistry,
    ) -> AppResult<Self> {
        let config = Arc::new(config);
        let domain_provider = registry.active(config.as_ref())?;
        let siteimprove_service = Arc::new(SiteimproveService::new(token_client, config.clone()));

        Ok(Self {
            config,
            siteimprove_service,
            domain_registry: Arc::new(registry),
            domain_provider,
        })
    }
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let addr = config.http_addr();
    let token_client = Arc::new(SiteimproveTokenClient::new(&config.siteimprove));
    let state = AppState::new(config, token_client)?;

    info!(
        "Using domain plugin '{}'",
        state.domain_provider.id()
    );

    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health::health))
        .route("/api/v1/siteimprove/token", get(api::siteimprove::request_token))
        .route(
            "/api/v1/siteimprove/domain-plugins",
            get(api::siteimprove::domain_plugins),
        )
        .route("/api/v1/siteimprove/urls", post(api::siteimprove::entity_urls))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
