//! Main Catalog API
//!
//! This module provides the primary interface for storing generated
//! products in a catalog database.

use std::path::Path;
use crate::catalog::GeneratedProduct;
use crate::database::queries::{self, RawProduct, RawVariant};
use crate::database::{Database, ProductSummary};
use crate::error::{SheetgenError, Result};
use crate::utils::prefixed_id;

/// Prefix of stored product ids
pub const PRODUCT_ID_PREFIX: &str = "prod";
/// Prefix of stored variant ids
pub const VARIANT_ID_PREFIX: &str = "variant";
/// Prefix of stored image ids
pub const IMAGE_ID_PREFIX: &str = "img";

/// Catalog store backed by SQLite
pub struct Catalog {
    /// Database connection
    pub(crate) db: Database,
}

impl Catalog {
    /// Open an existing catalog database
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SheetgenError::DatabaseError(format!(
                "Database not found: {}",
                path.to_string_lossy()
            )));
        }
        let db = Database::open(path)?;
        Ok(Self { db })
    }

    /// Create a catalog database, or open it if the file already exists
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Ok(Self { db })
    }

    /// Create a transient in-memory catalog
    pub fn in_memory() -> Result<Self> {
        Ok(Self { db: Database::in_memory()? })
    }

    /// Persist generated products, returning their new ids in input order
    ///
    /// All products are written in one transaction. A handle or SKU that is
    /// already stored (or repeated within `products`) aborts the whole batch
    /// with `InvalidArgument`.
    pub fn create_products(&mut self, products: &[GeneratedProduct]) -> Result<Vec<String>> {
        let conn = self.db.connection_mut()?;
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(products.len());
        let mut variant_count = 0;

        for product in products {
            if queries::handle_exists(&tx, &product.handle)? {
                return Err(SheetgenError::invalid(format!(
                    "handle already exists: {}",
                    product.handle
                )));
            }

            let product_id = prefixed_id(PRODUCT_ID_PREFIX);
            let now = queries::now_timestamp();
            queries::insert_product(&tx, &RawProduct {
                product_id: product_id.clone(),
                handle: product.handle.clone(),
                title: product.title.clone(),
                description: product.description.clone(),
                weight: product.weight,
                category_ids: serde_json::to_string(&product.category_ids)?,
                shipping_profile_id: product.shipping_profile_id.clone(),
                sales_channel_ids: serde_json::to_string(
                    &product.sales_channels.iter().map(|s| &s.id).collect::<Vec<_>>(),
                )?,
                update_count: 0,
                create_timestamp: Some(now.clone()),
                change_timestamp: Some(now),
            })?;

            for (rank, option) in product.options.iter().enumerate() {
                queries::insert_option(
                    &tx,
                    &product_id,
                    &option.title,
                    &serde_json::to_string(&option.values)?,
                    rank as u32,
                )?;
            }

            for (rank, image) in product.images.iter().enumerate() {
                queries::insert_image(&tx, &prefixed_id(IMAGE_ID_PREFIX), &product_id, &image.url, rank as u32)?;
            }

            for (rank, variant) in product.variants.iter().enumerate() {
                if queries::sku_exists(&tx, &variant.sku)? {
                    return Err(SheetgenError::invalid(format!("sku already exists: {}", variant.sku)));
                }
                let variant_id = prefixed_id(VARIANT_ID_PREFIX);
                queries::insert_variant(&tx, &RawVariant {
                    variant_id: variant_id.clone(),
                    product_id: product_id.clone(),
                    title: variant.title.clone(),
                    sku: variant.sku.clone(),
                    size: variant.options.size.to_string(),
                    color: variant.options.color.clone(),
                    height: variant.options.height.to_string(),
                    rank: rank as u32,
                })?;
                for price in &variant.prices {
                    queries::insert_price(&tx, &variant_id, &price.currency_code, price.amount)?;
                }
            }
            variant_count += product.variants.len();

            tracing::debug!(product_id = %product_id, handle = %product.handle, "Stored product");
            ids.push(product_id);
        }

        tx.commit()?;
        tracing::info!(products = ids.len(), variants = variant_count, "Persisted generated products");
        Ok(ids)
    }

    /// Number of stored products
    pub fn product_count(&self) -> Result<usize> {
        queries::count_products(self.db.connection()?)
    }

    /// List up to `limit` products, newest first
    pub fn list_products(&self, limit: usize) -> Result<Vec<ProductSummary>> {
        let rows = queries::list_products_raw(self.db.connection()?, limit)?;
        Ok(rows
            .into_iter()
            .map(|r| ProductSummary {
                id: r.product_id,
                handle: r.handle,
                title: r.title,
                variant_count: r.variant_count,
            })
            .collect())
    }

    /// Path of the backing database file, if any
    pub fn path(&self) -> Option<&Path> {
        self.db.path()
    }

    /// Close the catalog
    pub fn close(&mut self) {
        self.db.close();
    }
}
