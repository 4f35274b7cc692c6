//! Product read and update operations
//!
//! These back the admin trigger routes: the update workflow and the
//! diagnostic product query.

use std::collections::HashMap;
use chrono::Utc;
use crate::catalog::{Price, ProductOption, VariantCombination};
use crate::database::queries::{self, RawVariant};
use crate::database::{ImageRecord, ProductDetail, ProductProjection, ProductUpdate, VariantRecord, VariantRef};
use crate::error::{SheetgenError, Result};
use crate::utils::parse_datetime;
use super::catalog::Catalog;

impl Catalog {
    /// Get a stored product with variants, prices, options and images
    pub fn get_product(&self, product_id: &str) -> Result<Option<ProductDetail>> {
        let conn = self.db.connection()?;
        let Some(raw) = queries::get_product_raw(conn, product_id)? else {
            return Ok(None);
        };

        let mut prices: HashMap<String, Vec<Price>> = HashMap::new();
        for p in queries::get_prices_raw(conn, product_id)? {
            prices.entry(p.variant_id).or_default().push(Price {
                amount: p.amount,
                currency_code: p.currency_code,
            });
        }

        let variants = queries::get_variants_raw(conn, product_id)?
            .into_iter()
            .map(|v| {
                let variant_prices = prices.remove(&v.variant_id).unwrap_or_default();
                to_variant_record(v, variant_prices)
            })
            .collect::<Result<Vec<_>>>()?;

        let options = queries::get_options_raw(conn, product_id)?
            .into_iter()
            .map(|o| {
                Ok(ProductOption {
                    title: o.title,
                    values: serde_json::from_str(&o.values_json)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(ProductDetail {
            id: raw.product_id,
            title: raw.title,
            description: raw.description,
            handle: raw.handle,
            weight: raw.weight,
            category_ids: serde_json::from_str(&raw.category_ids)?,
            shipping_profile_id: raw.shipping_profile_id,
            sales_channel_ids: serde_json::from_str(&raw.sales_channel_ids)?,
            options,
            variants,
            images: load_images(conn, product_id)?,
            update_count: raw.update_count,
            created_at: raw.create_timestamp
                .as_deref()
                .and_then(parse_datetime)
                .unwrap_or_else(Utc::now),
            updated_at: raw.change_timestamp
                .as_deref()
                .and_then(parse_datetime)
                .unwrap_or_else(Utc::now),
        }))
    }

    /// Run the update workflow on a product
    ///
    /// Applies whichever fields `update` carries and records the run. An empty
    /// update re-triggers the workflow without changing product data.
    pub fn update_product(&mut self, product_id: &str, update: &ProductUpdate) -> Result<ProductDetail> {
        let rows = queries::update_product(
            self.db.connection()?,
            product_id,
            update.title.as_deref(),
            update.description.as_deref(),
            update.weight,
        )?;
        if rows == 0 {
            return Err(SheetgenError::ProductNotFound(product_id.to_string()));
        }

        let product = self.get_product(product_id)?
            .ok_or_else(|| SheetgenError::ProductNotFound(product_id.to_string()))?;
        tracing::info!(
            product_id,
            update_count = product.update_count,
            changed = !update.is_empty(),
            "Product update workflow completed"
        );
        Ok(product)
    }

    /// Diagnostic query: `id, title, variants.id, images.*`
    pub fn query_product(&self, product_id: &str) -> Result<ProductProjection> {
        let conn = self.db.connection()?;
        let raw = queries::get_product_raw(conn, product_id)?
            .ok_or_else(|| SheetgenError::ProductNotFound(product_id.to_string()))?;

        let variants = queries::get_variants_raw(conn, product_id)?
            .into_iter()
            .map(|v| VariantRef { id: v.variant_id })
            .collect();

        Ok(ProductProjection {
            id: raw.product_id,
            title: raw.title,
            variants,
            images: load_images(conn, product_id)?,
        })
    }
}

fn load_images(conn: &rusqlite::Connection, product_id: &str) -> Result<Vec<ImageRecord>> {
    Ok(queries::get_images_raw(conn, product_id)?
        .into_iter()
        .map(|i| ImageRecord { id: i.image_id, url: i.url, rank: i.rank })
        .collect())
}

fn to_variant_record(raw: RawVariant, prices: Vec<Price>) -> Result<VariantRecord> {
    let corrupt = |e: SheetgenError| {
        SheetgenError::DatabaseError(format!("variant {}: {}", raw.variant_id, e))
    };
    let options = VariantCombination {
        size: raw.size.parse().map_err(corrupt)?,
        color: raw.color.clone(),
        height: raw.height.parse().map_err(corrupt)?,
    };
    Ok(VariantRecord {
        id: raw.variant_id,
        title: raw.title,
        sku: raw.sku,
        options,
        prices,
    })
}
