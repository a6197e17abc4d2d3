//! Business logic layer

pub mod siteimprove;
pub mod url_resolver;

pub use siteimprove::SiteimproveService;
pub use url_resolver::EntityUrlResolver;
