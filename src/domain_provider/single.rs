//! Single frontend domain provider

use super::provider::DomainProvider;
use crate::domain::EntityRef;
use crate::error::Result;
use async_trait::async_trait;

/// Every entity lives on the site's own base URL.
pub struct SingleDomainProvider {
    base_url: String,
}

impl SingleDomainProvider {
    pub const ID: &'static str = "single";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DomainProvider for SingleDomainProvider {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Single frontend domain"
    }

    async fn get_urls(&self, _entity: &EntityRef) -> Result<Vec<String>> {
        Ok(vec![self.base_url.clone()])
    }
}
