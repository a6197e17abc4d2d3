//! Siteimprove token API client

use crate::config::SiteimproveConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;

/// Issues authentication tokens for the Siteimprove overlay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenClient: Send + Sync {
    /// Request a new token. Returns `None` (and logs) on any failure.
    async fn request_token(&self) -> Option<String>;
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

/// HTTP client for the Siteimprove token endpoint
#[derive(Clone)]
pub struct SiteimproveTokenClient {
    token_url: String,
    cms: String,
    http_client: Client,
}

impl SiteimproveTokenClient {
    /// Create a new token client
    pub fn new(config: &SiteimproveConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client on a preconfigured reqwest `Client` (timeouts, user agent)
    pub fn with_http_client(config: &SiteimproveConfig, http_client: Client) -> Self {
        Self {
            token_url: config.token_url.clone(),
            cms: config.cms_identifier(),
            http_client,
        }
    }

    /// Request a token, surfacing the failure cause
    pub async fn try_request_token(&self) -> Result<String> {
        let response = self
            .http_client
            .get(&self.token_url)
            .query(&[("cms", self.cms.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::TokenRequest(format!("Failed to reach token endpoint: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::TokenRequest(format!(
                "Token endpoint returned {} - {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::TokenRequest(format!("Failed to read token response: {}", e)))?;

        parse_token(&body)
    }
}

/// Extract the token from a response body
fn parse_token(body: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Err(AppError::TokenRequest("Empty token response".to_string()));
    }

    let parsed: TokenResponse = serde_json::from_str(body)
        .map_err(|e| AppError::TokenRequest(format!("Failed to parse token response: {}", e)))?;

    match parsed.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::TokenRequest(
            "Token missing from response".to_string(),
        )),
    }
}

#[async_trait]
impl TokenClient for SiteimproveTokenClient {
    async fn request_token(&self) -> Option<String> {
        match self.try_request_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::error!(error = %e, "There was an error requesting a new token.");
                None
            }
        }
    }
}
