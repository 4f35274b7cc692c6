//! # sheetgen
//!
//! Demo catalog tooling for an e-commerce platform.
//!
//! ## Features
//!
//! - Bed sheet product synthesis with size × color × height variants
//! - Random and unique identifier helpers for SKUs and handles
//! - SQLite catalog store for generated products
//! - Admin trigger routes (update workflow, diagnostic query) and widget
//!
//! ## Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use sheetgen::{Catalog, GenerateOptions, SalesChannel, ShippingProfile, generate_products};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
//! let options = GenerateOptions { num_products: 12, variants_per_product: 40, ..Default::default() };
//! let profile = ShippingProfile { id: "sp_default".into(), name: "Default".into() };
//! let channels = vec![SalesChannel { id: "sc_default".into(), name: "Web".into() }];
//!
//! let products = generate_products(&mut rng, &options, &[], &profile, &channels).unwrap();
//!
//! let mut catalog = Catalog::create(std::path::Path::new("sheetgen.db")).unwrap();
//! let ids = catalog.create_products(&products).unwrap();
//! println!("stored {} products", ids.len());
//! ```

pub mod admin;
pub mod business;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod utils;

// Re-export main types
pub use error::{SheetgenError, Result};
pub use catalog::{
    Category, CombinationReport, GenerateOptions, GeneratedProduct, GeneratedVariant, PriceRange,
    SalesChannel, ShippingProfile, enumerate_combinations, generate_products, plan_scale,
};
pub use business::{Catalog, ProductWorkflows};
pub use database::{ProductDetail, ProductProjection, ProductUpdate};
pub use config::GeneratorConfig;
pub use utils::{UniqueStringRegistry, CharClasses};

/// Default number of products shown by `sheetgen list`
pub const DEFAULT_LIST_LIMIT: usize = 50;
