//! Database layer for the catalog store
//!
//! Handles SQLite database operations including:
//! - Schema creation
//! - Inserts of generated products, variants, prices, images and options
//! - Product reads, listings and updates

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
