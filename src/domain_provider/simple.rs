//! Simple domain list provider

use super::provider::DomainProvider;
use crate::domain::EntityRef;
use crate::error::Result;
use async_trait::async_trait;

/// A fixed list of frontend domains shared by all entities.
///
/// Falls back to the site base URL when the list is empty.
pub struct SimpleDomainProvider {
    domains: Vec<String>,
    base_url: String,
}

impl SimpleDomainProvider {
    pub const ID: &'static str = "simple";

    pub fn new(domains: Vec<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.trim_end_matches('/').to_string())
                .filter(|d| !d.is_empty())
                .collect(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DomainProvider for SimpleDomainProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Simple domain list"
    }

    async fn get_urls(&self, entity: &EntityRef) -> Result<Vec<String>> {
        if self.domains.is_empty() {
            tracing::debug!(
                kind = %entity.kind,
                "No domains configured, using base URL {}",
                self.base_url
            );
            return Ok(vec![self.base_url.clone()]);
        }

        Ok(self.domains.clone())
    }
}
