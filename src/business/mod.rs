//! Catalog store business layer
//!
//! This module provides the high-level Catalog API for persisting
//! generated products and running the update and query workflows.

pub mod catalog;
pub mod products;
pub mod workflows;

pub use catalog::Catalog;
pub use workflows::ProductWorkflows;
