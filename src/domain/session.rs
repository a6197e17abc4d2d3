//! Per-user session state and account permissions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Session key holding the URLs queued for Siteimprove
pub const SESSION_URL_KEY: &str = "siteimprove_url";

/// Permission required to queue URLs
pub const USE_SITEIMPROVE_PERMISSION: &str = "use siteimprove";

/// Account of the user making the request
pub trait Account: Send + Sync {
    fn has_permission(&self, permission: &str) -> bool;
}

/// Current user with a flat permission list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CurrentUser {
    pub fn new(id: impl Into<String>, permissions: &[&str]) -> Self {
        Self {
            id: id.into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Account for CurrentUser {
    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Session values scoped to one user. Lists are append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    values: HashMap<String, Vec<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the list stored under `key`
    pub fn append(&mut self, key: &str, value: String) {
        self.values.entry(key.to_string()).or_default().push(value);
    }

    /// Values stored under `key`, in insertion order
    pub fn get(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// URLs queued for Siteimprove
    pub fn siteimprove_urls(&self) -> &[String] {
        self.get(SESSION_URL_KEY)
    }
}
