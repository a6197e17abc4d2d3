//! Domain provider trait

use crate::domain::EntityRef;
use crate::error::Result;
use async_trait::async_trait;

/// Strategy returning the active frontend domains for an entity.
///
/// Domains are origins such as `https://example.com`, without a trailing
/// slash. A provider may return zero, one or many of them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainProvider: Send + Sync {
    /// Registry identifier, e.g. "simple"
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn label(&self) -> &'static str;

    /// Active domains for the entity, in priority order
    async fn get_urls(&self, entity: &EntityRef) -> Result<Vec<String>>;
}
