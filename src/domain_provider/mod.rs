//! Pluggable frontend domain providers
//!
//! A provider decides which frontend origins an entity is published on.
//! Built-in providers:
//! - `single`: the site base URL
//! - `simple`: a configured list of domains

pub mod provider;
pub mod registry;
pub mod simple;
pub mod single;

pub use provider::DomainProvider;
#[cfg(test)]
pub use provider::MockDomainProvider;
pub use registry::{DomainProviderDefinition, DomainProviderRegistry};
pub use simple::SimpleDomainProvider;
pub use single::SingleDomainProvider;
