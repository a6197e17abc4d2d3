//! Frontend URL resolution for content entities

use crate::config::{FrontPageMatching, SettingsReader};
use crate::domain::{
    Account, Entity, EntityRef, RouteContext, Session, NODE_FRONT_PAGE_ROUTES, SESSION_URL_KEY,
    TAXONOMY_FRONT_PAGE_ROUTES, USE_SITEIMPROVE_PERMISSION,
};
use crate::domain_provider::DomainProvider;
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Resolves the absolute frontend URLs of an entity for one request.
#[derive(Clone)]
pub struct EntityUrlResolver {
    provider: Arc<dyn DomainProvider>,
    settings: Arc<dyn SettingsReader>,
    route: Arc<dyn RouteContext>,
}

impl EntityUrlResolver {
    pub fn new(
        provider: Arc<dyn DomainProvider>,
        settings: Arc<dyn SettingsReader>,
        route: Arc<dyn RouteContext>,
    ) -> Self {
        Self {
            provider,
            settings,
            route,
        }
    }

    /// Queue the entity's URLs in the session.
    ///
    /// Does nothing when the account lacks `use siteimprove`.
    pub async fn set_session_url(
        &self,
        account: &dyn Account,
        session: &mut Session,
        entity: &dyn Entity,
    ) -> Result<()> {
        if !account.has_permission(USE_SITEIMPROVE_PERMISSION) {
            debug!("Account lacks '{}', not queueing URLs", USE_SITEIMPROVE_PERMISSION);
            return Ok(());
        }

        for url in self.get_entity_urls(entity).await? {
            session.append(SESSION_URL_KEY, url);
        }

        Ok(())
    }

    /// Absolute frontend URLs for the entity.
    ///
    /// Canonical URLs come first, one per domain, followed by the front page
    /// URL per domain when the entity is the front page. Duplicates are kept.
    pub async fn get_entity_urls(&self, entity: &dyn Entity) -> Result<Vec<String>> {
        if !entity.has_canonical_route() {
            return Ok(vec![]);
        }

        let domains = self.get_entity_domains(entity).await?;
        let relative = entity.canonical_path()?;

        let mut urls: Vec<String> = domains
            .iter()
            .map(|domain| format!("{}{}", domain, relative))
            .collect();

        if self.is_front_page(entity, &relative)? {
            let front = self.route.front_url();
            urls.extend(domains.iter().map(|domain| format!("{}{}", domain, front)));
        }

        debug!(
            kind = %entity.kind(),
            count = urls.len(),
            "Resolved frontend URLs"
        );

        Ok(urls)
    }

    /// Active domains for the entity, as reported by the domain provider
    pub async fn get_entity_domains(&self, entity: &dyn Entity) -> Result<Vec<String>> {
        self.provider.get_urls(&EntityRef::of(entity)).await
    }

    fn is_front_page(&self, entity: &dyn Entity, canonical_path: &str) -> Result<bool> {
        if self.route.is_front_page() {
            return Ok(true);
        }

        let front_page = self.settings.front_page();

        match self.settings.front_page_matching() {
            FrontPageMatching::Legacy => {
                let route_name = self.route.route_name();
                let route_name = route_name.as_deref();
                let id = entity.id().unwrap_or_default();

                Ok((on_any_route(route_name, &NODE_FRONT_PAGE_ROUTES)
                    && format!("/node/{}", id) == front_page)
                    || (on_any_route(route_name, &TAXONOMY_FRONT_PAGE_ROUTES)
                        && format!("/taxonomy/term/{}", id) == front_page))
            }
            FrontPageMatching::CanonicalPath => {
                Ok(canonical_path == front_page || entity.system_path()? == front_page)
            }
        }
    }
}

fn on_any_route(route_name: Option<&str>, routes: &[&str]) -> bool {
    route_name.is_some_and(|name| routes.iter().any(|r| *r == name))
}
