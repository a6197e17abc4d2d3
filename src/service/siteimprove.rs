//! Siteimprove integration service

use crate::config::SettingsReader;
use crate::domain::{FrontendSettings, LIBRARY, OVERLAY_LIBRARY};
use crate::token::TokenClient;
use std::sync::Arc;

/// Token access and frontend helpers for the Siteimprove overlay
pub struct SiteimproveService {
    token_client: Arc<dyn TokenClient>,
    settings: Arc<dyn SettingsReader>,
}

impl SiteimproveService {
    pub fn new(token_client: Arc<dyn TokenClient>, settings: Arc<dyn SettingsReader>) -> Self {
        Self {
            token_client,
            settings,
        }
    }

    /// Request a fresh token from Siteimprove
    pub async fn request_token(&self) -> Option<String> {
        self.token_client.request_token().await
    }

    /// Token stored in configuration, if any
    pub fn siteimprove_token(&self) -> Option<String> {
        self.settings.token()
    }

    pub fn overlay_library(&self) -> &'static str {
        OVERLAY_LIBRARY
    }

    pub fn library(&self) -> &'static str {
        LIBRARY
    }

    /// Frontend settings for the given URLs
    pub fn settings(&self, urls: Vec<String>, auto: bool) -> FrontendSettings {
        FrontendSettings { url: urls, auto }
    }
}
