//! Generated catalog records and the platform references they point at

use serde::{Deserialize, Serialize};

use super::combinations::VariantCombination;

/// Product category known to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Shipping profile known to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Sales channel known to the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Reference to a sales channel by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesChannelRef {
    pub id: String,
}

/// Price of a variant in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: i64,
    /// Lowercase ISO 4217 code, e.g. `"eur"`
    pub currency_code: String,
}

/// Product image by URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// Option declaration with the values used by the product's variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub title: String,
    pub values: Vec<String>,
}

/// Purchasable variant of a generated product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedVariant {
    /// `"<Size> / <Color> / <Height>"`
    pub title: String,
    pub sku: String,
    pub options: VariantCombination,
    pub prices: Vec<Price>,
}

/// Product ready to be handed to the create-products workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProduct {
    pub title: String,
    pub description: String,
    pub handle: String,
    /// Shipping weight in grams
    pub weight: u32,
    pub images: Vec<ProductImage>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<GeneratedVariant>,
    pub category_ids: Vec<String>,
    pub shipping_profile_id: String,
    pub sales_channels: Vec<SalesChannelRef>,
}

impl GeneratedProduct {
    /// Values declared for the option titled `title`
    pub fn option_values(&self, title: &str) -> Option<&[String]> {
        self.options
            .iter()
            .find(|o| o.title == title)
            .map(|o| o.values.as_slice())
    }
}

/// Inclusive lower, exclusive upper bound for variant prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 20, max: 80 }
    }
}

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub num_products: usize,
    /// Mixed into every handle to keep runs from colliding
    pub handle_salt: u64,
    pub variants_per_product: usize,
    pub price_range: PriceRange,
    pub currencies: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            num_products: 12,
            handle_salt: 0,
            variants_per_product: 10,
            price_range: PriceRange::default(),
            currencies: vec!["eur".to_string(), "usd".to_string()],
        }
    }
}
