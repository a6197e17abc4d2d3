//! Domain models for Siteimprove Core

pub mod entity;
pub mod frontend;
pub mod route;
pub mod session;

pub use entity::*;
pub use frontend::*;
pub use route::*;
pub use session::*;
