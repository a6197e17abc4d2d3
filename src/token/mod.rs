//! Siteimprove authentication token requests

pub mod client;

pub use client::{SiteimproveTokenClient, TokenClient};
