//! Current request/route context

use serde::{Deserialize, Serialize};

/// Routes on which a node is compared against the front page
pub const NODE_FRONT_PAGE_ROUTES: [&str; 2] =
    ["entity.node.edit_form", "entity.node.latest_version"];

/// Routes on which a taxonomy term is compared against the front page
pub const TAXONOMY_FRONT_PAGE_ROUTES: [&str; 2] = [
    "entity.taxonomy_term.edit_form",
    "entity.taxonomy_term.latest_version",
];

/// What the resolver needs to know about the request being served.
#[cfg_attr(test, mockall::automock)]
pub trait RouteContext: Send + Sync {
    /// Name of the matched route, if any
    fn route_name(&self) -> Option<String>;

    /// Whether the request is being served as the front page
    fn is_front_page(&self) -> bool;

    /// Relative URL of the front route
    fn front_url(&self) -> String;
}

fn default_base_path() -> String {
    "/".to_string()
}

/// Request context supplied by the host for one inbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub is_front_page: bool,
    /// Base path of the installation, which is also the front URL
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            route_name: None,
            is_front_page: false,
            base_path: default_base_path(),
        }
    }
}

impl RequestContext {
    pub fn on_route(route_name: impl Into<String>) -> Self {
        Self {
            route_name: Some(route_name.into()),
            ..Default::default()
        }
    }

    pub fn front_page() -> Self {
        Self {
            is_front_page: true,
            ..Default::default()
        }
    }
}

impl RouteContext for RequestContext {
    fn route_name(&self) -> Option<String> {
        self.route_name.clone()
    }

    fn is_front_page(&self) -> bool {
        self.is_front_page
    }

    fn front_url(&self) -> String {
        self.base_path.clone()
    }
}
