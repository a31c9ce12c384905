//! Data models for the article collections.
//!
//! Every model is read-only here: documents are written by the CMS import tooling.

mod article;
mod author;
pub mod lenient;
mod metadata;
mod tag;

pub use article::*;
pub use author::*;
pub use metadata::*;
pub use tag::*;
