//! Database module: per-tenant MongoDB stores and the article query service.
//!
//! The collections are owned by the CMS import tooling; nothing here writes.

#[cfg(test)]
pub mod memory;
mod registry;
mod repository;
mod store;

pub use registry::*;
pub use repository::*;
pub use store::*;
