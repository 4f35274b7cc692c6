//! Data models for stored catalog entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Price, ProductOption, VariantCombination};

/// Stored product image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub url: String,
    /// Position in the product's image list
    pub rank: u32,
}

/// Stored variant with its prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub id: String,
    pub title: String,
    pub sku: String,
    pub options: VariantCombination,
    pub prices: Vec<Price>,
}

/// Full stored product, as returned by the update workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub handle: String,
    pub weight: u32,
    pub category_ids: Vec<String>,
    pub shipping_profile_id: String,
    pub sales_channel_ids: Vec<String>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<VariantRecord>,
    pub images: Vec<ImageRecord>,
    /// Number of times the update workflow ran on this product
    pub update_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Variant reference by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: String,
}

/// Diagnostic product projection: `id, title, variants.id, images.*`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductProjection {
    pub id: String,
    pub title: String,
    pub variants: Vec<VariantRef>,
    pub images: Vec<ImageRecord>,
}

/// One line of a product listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub variant_count: usize,
}

/// Changes applied by the update workflow
///
/// Every field is optional; an empty update only records that the workflow
/// ran (bumps `update_count` and the change timestamp).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weight: Option<u32>,
}

impl ProductUpdate {
    /// True when the update carries no field changes
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.weight.is_none()
    }
}
