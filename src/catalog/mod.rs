//! Bed sheet catalog generation
//!
//! This module holds the fixed option catalogs, the combination enumerator
//! and the product synthesizer that turns them into generated products.

pub mod options;
pub mod combinations;
pub mod models;
pub mod synthesizer;

pub use combinations::{
    CombinationReport, Height, ScalePlan, Size, VariantCombination, enumerate_combinations,
    plan_scale,
};
pub use models::*;
pub use synthesizer::generate_products;
