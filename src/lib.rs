//! Siteimprove Core - CMS integration glue for Siteimprove
//!
//! This crate requests Siteimprove authentication tokens, resolves the
//! public frontend URLs of content entities across pluggable domain
//! providers, and queues those URLs in the user's session for the
//! Siteimprove overlay.

pub mod api;
pub mod config;
pub mod domain;
pub mod domain_provider;
pub mod error;
pub mod server;
pub mod service;
pub mod telemetry;
pub mod token;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
