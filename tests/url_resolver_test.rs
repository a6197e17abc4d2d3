//! Entity URL resolution and session queueing tests

use pretty_assertions::assert_eq;
use siteimprove_core::config::FrontPageMatching;
use siteimprove_core::domain::{
    ContentEntity, CurrentUser, EntityKind, RequestContext, Session, USE_SITEIMPROVE_PERMISSION,
};
use siteimprove_core::domain_provider::DomainProviderRegistry;
use siteimprove_core::service::EntityUrlResolver;
use std::sync::Arc;

mod common;

fn create_resolver(
    domains: &[&str],
    front_page: &str,
    matching: FrontPageMatching,
    context: RequestContext,
) -> EntityUrlResolver {
    let mut config = common::create_test_config("http://127.0.0.1:1/auth/token");
    config.site.domains = domains.iter().map(|d| d.to_string()).collect();
    config.site.front_page = front_page.to_string();
    config.siteimprove.front_page_matching = matching;

    let provider = DomainProviderRegistry::with_builtin(&config.site)
        .resolve(&config.siteimprove.domain_plugin_id)
        .unwrap();

    EntityUrlResolver::new(provider, Arc::new(config), Arc::new(context))
}

#[tokio::test]
async fn test_no_canonical_route_returns_empty_for_any_domains() {
    let entity = ContentEntity::new(EntityKind::Other("paragraph".to_string()), "3");

    for domains in [vec![], vec!["https://a.example"], vec!["https://a.example", "https://b.example"]] {
        let resolver = create_resolver(
            &domains,
            "/node/3",
            FrontPageMatching::Legacy,
            RequestContext::front_page(),
        );
        assert!(resolver.get_entity_urls(&entity).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_urls_follow_domain_order() {
    let resolver = create_resolver(
        &["https://a.example", "https://b.example"],
        "/node/1",
        FrontPageMatching::Legacy,
        RequestContext::default(),
    );
    let entity = ContentEntity::new(EntityKind::Node, "7").with_alias("/foo");

    assert_eq!(
        resolver.get_entity_urls(&entity).await.unwrap(),
        vec!["https://a.example/foo", "https://b.example/foo"]
    );
}

#[tokio::test]
async fn test_empty_domain_list_uses_base_url() {
    let resolver = create_resolver(
        &[],
        "/node/1",
        FrontPageMatching::Legacy,
        RequestContext::default(),
    );
    let entity = ContentEntity::new(EntityKind::TaxonomyTerm, "4");

    assert_eq!(
        resolver.get_entity_urls(&entity).await.unwrap(),
        vec!["https://cms.example/taxonomy/term/4"]
    );
}

#[tokio::test]
async fn test_front_page_edit_route_appends_front_urls_after_canonical() {
    let resolver = create_resolver(
        &["https://a.example", "https://b.example"],
        "/node/1",
        FrontPageMatching::Legacy,
        RequestContext::on_route("entity.node.edit_form"),
    );
    let entity = ContentEntity::new(EntityKind::Node, "1").with_alias("/welcome");

    assert_eq!(
        resolver.get_entity_urls(&entity).await.unwrap(),
        vec![
            "https://a.example/welcome",
            "https://b.example/welcome",
            "https://a.example/",
            "https://b.example/",
        ]
    );
}

#[tokio::test]
async fn test_taxonomy_front_page_uses_base_path() {
    let resolver = create_resolver(
        &["https://a.example"],
        "/taxonomy/term/9",
        FrontPageMatching::Legacy,
        RequestContext {
            route_name: Some("entity.taxonomy_term.latest_version".to_string()),
            is_front_page: false,
            base_path: "/site/".to_string(),
        },
    );
    let entity = ContentEntity::new(EntityKind::TaxonomyTerm, "9");

    assert_eq!(
        resolver.get_entity_urls(&entity).await.unwrap(),
        vec!["https://a.example/taxonomy/term/9", "https://a.example/site/"]
    );
}

#[tokio::test]
async fn test_legacy_mode_ignores_front_page_outside_edit_routes() {
    let resolver = create_resolver(
        &["https://a.example"],
        "/node/1",
        FrontPageMatching::Legacy,
        RequestContext::on_route("entity.node.canonical"),
    );
    let entity = ContentEntity::new(EntityKind::Node, "1");

    assert_eq!(
        resolver.get_entity_urls(&entity).await.unwrap(),
        vec!["https://a.example/node/1"]
    );
}

#[tokio::test]
async fn test_canonical_path_mode_matches_on_any_route() {
    let resolver = create_resolver(
        &["https://a.example"],
        "/node/1",
        FrontPageMatching::CanonicalPath,
        RequestContext::on_route("entity.node.canonical"),
    );
    let entity = ContentEntity::new(EntityKind::Node, "1").with_alias("/welcome");

    assert_eq!(
        resolver.get_entity_urls(&entity).await.unwrap(),
        vec!["https://a.example/welcome", "https://a.example/"]
    );
}

#[tokio::test]
async fn test_session_untouched_without_permission() {
    let resolver = create_resolver(
        &["https://a.example"],
        "/node/1",
        FrontPageMatching::Legacy,
        RequestContext::default(),
    );
    let entity = ContentEntity::new(EntityKind::Node, "2");
    let mut session = Session::new();
    session.append("siteimprove_url", "https://a.example/existing".to_string());
    let before = session.clone();

    resolver
        .set_session_url(&CurrentUser::new("9", &[]), &mut session, &entity)
        .await
        .unwrap();

    assert_eq!(session, before);
}

#[tokio::test]
async fn test_session_doubles_on_repeated_calls() {
    let resolver = create_resolver(
        &["https://a.example"],
        "/node/1",
        FrontPageMatching::Legacy,
        RequestContext::default(),
    );
    let entity = ContentEntity::new(EntityKind::Node, "2").with_alias("/news");
    let user = CurrentUser::new("9", &[USE_SITEIMPROVE_PERMISSION]);
    let mut session = Session::new();

    resolver.set_session_url(&user, &mut session, &entity).await.unwrap();
    assert_eq!(session.siteimprove_urls().len(), 1);

    resolver.set_session_url(&user, &mut session, &entity).await.unwrap();
    assert_eq!(
        session.siteimprove_urls().to_vec(),
        vec!["https://a.example/news", "https://a.example/news"]
    );
}

#[test]
fn test_unknown_plugin_fails_at_startup() {
    let mut config = common::create_test_config("http://127.0.0.1:1/auth/token");
    config.siteimprove.domain_plugin_id = "domain_access".to_string();

    let registry = DomainProviderRegistry::with_builtin(&config.site);
    assert!(registry
        .resolve(&config.siteimprove.domain_plugin_id)
        .is_err());
}
