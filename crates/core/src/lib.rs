//! Domain types shared by the persistence and HTTP layers.
//!
//! This crate has no internal dependencies so the article rules can be used
//! by the repository layer, the API, and their tests alike.

pub mod article;
pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;
pub mod validation;
