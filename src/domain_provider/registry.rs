//! Registry mapping plugin identifiers to domain providers

use super::provider::DomainProvider;
use super::simple::SimpleDomainProvider;
use super::single::SingleDomainProvider;
use crate::config::{SettingsReader, SiteConfig};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Listing entry for a registered provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainProviderDefinition {
    pub id: String,
    pub label: String,
}

#[derive(Default, Clone)]
pub struct DomainProviderRegistry {
    providers: HashMap<String, Arc<dyn DomainProvider>>,
}

impl DomainProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `single` and `simple` providers
    pub fn with_builtin(site: &SiteConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SingleDomainProvider::new(site.base_url.clone())));
        registry.register(Arc::new(SimpleDomainProvider::new(
            site.domains.clone(),
            site.base_url.clone(),
        )));
        registry
    }

    /// Register a provider under its own id, replacing any previous one
    pub fn register(&mut self, provider: Arc<dyn DomainProvider>) {
        let id = provider.id().to_string();
        if self.providers.insert(id.clone(), provider).is_some() {
            tracing::warn!("Domain provider '{}' registered twice, keeping the last one", id);
        }
    }

    /// Look up the provider for a configured plugin id
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn DomainProvider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::UnknownDomainPlugin(id.to_string()))
    }

    /// Provider selected by the stored `domain_plugin_id` setting
    pub fn active(&self, settings: &dyn SettingsReader) -> Result<Arc<dyn DomainProvider>> {
        self.resolve(&settings.domain_plugin_id())
    }

    /// All registered providers, sorted by id
    pub fn definitions(&self) -> Vec<DomainProviderDefinition> {
        let mut definitions: Vec<_> = self
            .providers
            .values()
            .map(|p| DomainProviderDefinition {
                id: p.id().to_string(),
                label: p.label().to_string(),
            })
            .collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }
}
