//! Siteimprove API handlers

use crate::domain::{ContentEntity, FrontendSettings, RequestContext};
use crate::error::{AppError, Result};
use crate::server::AppState;
use crate::service::EntityUrlResolver;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DomainPluginResponse {
    pub id: String,
    pub label: String,
    pub active: bool,
}

fn default_auto() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntityUrlsRequest {
    pub entity: ContentEntity,
    #[serde(default)]
    pub context: RequestContext,
    #[serde(default = "default_auto")]
    pub auto: bool,
}

/// Request a new Siteimprove token
pub async fn request_token(State(state): State<AppState>) -> Result<Json<TokenResponse>> {
    state
        .siteimprove_service
        .request_token()
        .await
        .map(|token| Json(TokenResponse { token }))
        .ok_or_else(|| AppError::TokenRequest("Token endpoint gave no token".to_string()))
}

/// List registered domain plugins
pub async fn domain_plugins(State(state): State<AppState>) -> Json<Vec<DomainPluginResponse>> {
    let active = state.domain_provider.id();
    let plugins = state
        .domain_registry
        .definitions()
        .into_iter()
        .map(|d| DomainPluginResponse {
            active: d.id == active,
            id: d.id,
            label: d.label,
        })
        .collect();

    Json(plugins)
}

/// Resolve frontend settings for an entity
pub async fn entity_urls(
    State(state): State<AppState>,
    Json(input): Json<EntityUrlsRequest>,
) -> Result<Json<FrontendSettings>> {
    let resolver = EntityUrlResolver::new(
        state.domain_provider.clone(),
        state.config.clone(),
        Arc::new(input.context),
    );

    let urls = resolver.get_entity_urls(&input.entity).await?;
    Ok(Json(state.siteimprove_service.settings(urls, input.auto)))
}
