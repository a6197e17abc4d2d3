//! Frontend integration payloads

use serde::{Deserialize, Serialize};

/// Library with the Siteimprove overlay
pub const OVERLAY_LIBRARY: &str = "siteimprove/siteimprove.overlay";

/// Base Siteimprove library
pub const LIBRARY: &str = "siteimprove/siteimprove";

/// Settings handed to the frontend script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendSettings {
    pub url: Vec<String>,
    pub auto: bool,
}
