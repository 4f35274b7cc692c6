//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For catalog-level operations, use the Catalog API.

use rusqlite::{Connection, OptionalExtension, params};
use chrono::Utc;
use crate::error::Result;
use crate::utils::format_datetime;

/// Get current timestamp formatted for database
pub fn now_timestamp() -> String {
    format_datetime(&Utc::now())
}

// ============================================================================
// Product queries
// ============================================================================

/// Insert a product row
pub fn insert_product(conn: &Connection, product: &RawProduct) -> Result<()> {
    conn.execute(
        "INSERT INTO catalog_products (product_id, handle, title, description, weight, category_ids,
            shipping_profile_id, sales_channel_ids, update_count, create_timestamp, change_timestamp)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            product.product_id,
            product.handle,
            product.title,
            product.description,
            product.weight,
            product.category_ids,
            product.shipping_profile_id,
            product.sales_channel_ids,
            product.update_count,
            product.create_timestamp,
            product.change_timestamp,
        ],
    )?;
    Ok(())
}

/// Check whether a product with this handle is stored
pub fn handle_exists(conn: &Connection, handle: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM catalog_products WHERE handle = ?",
        params![handle],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Check whether a variant SKU is already stored
pub fn sku_exists(conn: &Connection, sku: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM catalog_variants WHERE sku = ?",
        params![sku],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Count stored products
pub fn count_products(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM catalog_products", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Get a product row by ID
pub fn get_product_raw(conn: &Connection, product_id: &str) -> Result<Option<RawProduct>> {
    let product = conn
        .query_row(
            "SELECT product_id, handle, title, COALESCE(description, ''), COALESCE(weight, 0),
                    COALESCE(category_ids, '[]'), COALESCE(shipping_profile_id, ''),
                    COALESCE(sales_channel_ids, '[]'), COALESCE(update_count, 0),
                    create_timestamp, change_timestamp
             FROM catalog_products WHERE product_id = ?",
            params![product_id],
            |row| {
                Ok(RawProduct {
                    product_id: row.get(0)?,
                    handle: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                    weight: row.get(4)?,
                    category_ids: row.get(5)?,
                    shipping_profile_id: row.get(6)?,
                    sales_channel_ids: row.get(7)?,
                    update_count: row.get(8)?,
                    create_timestamp: row.get(9)?,
                    change_timestamp: row.get(10)?,
                })
            },
        )
        .optional()?;
    Ok(product)
}

/// List products with their variant counts, newest first
pub fn list_products_raw(conn: &Connection, limit: usize) -> Result<Vec<RawProductSummary>> {
    let mut stmt = conn.prepare(
        "SELECT p.product_id, p.handle, p.title, COUNT(v.variant_id)
         FROM catalog_products p
         LEFT JOIN catalog_variants v ON v.product_id = p.product_id
         GROUP BY p.product_id
         ORDER BY p.create_timestamp DESC, p.title
         LIMIT ?",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(RawProductSummary {
            product_id: row.get(0)?,
            handle: row.get(1)?,
            title: row.get(2)?,
            variant_count: row.get::<_, i64>(3)? as usize,
        })
    })?;

    rows.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Apply optional field changes and record the update
///
/// Returns the number of rows touched (0 when the product does not exist).
pub fn update_product(
    conn: &Connection,
    product_id: &str,
    title: Option<&str>,
    description: Option<&str>,
    weight: Option<u32>,
) -> Result<usize> {
    let rows = conn.execute(
        "UPDATE catalog_products
         SET title = COALESCE(?1, title),
             description = COALESCE(?2, description),
             weight = COALESCE(?3, weight),
             update_count = COALESCE(update_count, 0) + 1,
             change_timestamp = ?4
         WHERE product_id = ?5",
        params![title, description, weight, now_timestamp(), product_id],
    )?;
    Ok(rows)
}

// ============================================================================
// Variant and price queries
// ============================================================================

/// Insert a variant row
pub fn insert_variant(conn: &Connection, variant: &RawVariant) -> Result<()> {
    conn.execute(
        "INSERT INTO catalog_variants (variant_id, product_id, title, sku, size, color, height, variant_rank)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            variant.variant_id,
            variant.product_id,
            variant.title,
            variant.sku,
            variant.size,
            variant.color,
            variant.height,
            variant.rank,
        ],
    )?;
    Ok(())
}

/// Get all variants of a product in rank order
pub fn get_variants_raw(conn: &Connection, product_id: &str) -> Result<Vec<RawVariant>> {
    let mut stmt = conn.prepare(
        "SELECT variant_id, product_id, COALESCE(title, ''), sku, COALESCE(size, ''),
                COALESCE(color, ''), COALESCE(height, ''), COALESCE(variant_rank, 0)
         FROM catalog_variants WHERE product_id = ? ORDER BY variant_rank",
    )?;

    let variants = stmt.query_map(params![product_id], |row| {
        Ok(RawVariant {
            variant_id: row.get(0)?,
            product_id: row.get(1)?,
            title: row.get(2)?,
            sku: row.get(3)?,
            size: row.get(4)?,
            color: row.get(5)?,
            height: row.get(6)?,
            rank: row.get(7)?,
        })
    })?;

    variants.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Insert a variant price
pub fn insert_price(conn: &Connection, variant_id: &str, currency_code: &str, amount: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO catalog_prices (variant_id, currency_code, amount) VALUES (?, ?, ?)",
        params![variant_id, currency_code, amount],
    )?;
    Ok(())
}

/// Get all prices of a product's variants
pub fn get_prices_raw(conn: &Connection, product_id: &str) -> Result<Vec<RawPrice>> {
    let mut stmt = conn.prepare(
        "SELECT pr.variant_id, pr.currency_code, pr.amount
         FROM catalog_prices pr
         JOIN catalog_variants v ON v.variant_id = pr.variant_id
         WHERE v.product_id = ?
         ORDER BY pr.variant_id, pr.rowid",
    )?;

    let prices = stmt.query_map(params![product_id], |row| {
        Ok(RawPrice {
            variant_id: row.get(0)?,
            currency_code: row.get(1)?,
            amount: row.get(2)?,
        })
    })?;

    prices.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Image and option queries
// ============================================================================

/// Insert a product image
pub fn insert_image(conn: &Connection, image_id: &str, product_id: &str, url: &str, rank: u32) -> Result<()> {
    conn.execute(
        "INSERT INTO catalog_images (image_id, product_id, url, image_rank) VALUES (?, ?, ?, ?)",
        params![image_id, product_id, url, rank],
    )?;
    Ok(())
}

/// Get a product's images in rank order
pub fn get_images_raw(conn: &Connection, product_id: &str) -> Result<Vec<RawImage>> {
    let mut stmt = conn.prepare(
        "SELECT image_id, COALESCE(url, ''), COALESCE(image_rank, 0)
         FROM catalog_images WHERE product_id = ? ORDER BY image_rank",
    )?;

    let images = stmt.query_map(params![product_id], |row| {
        Ok(RawImage {
            image_id: row.get(0)?,
            url: row.get(1)?,
            rank: row.get(2)?,
        })
    })?;

    images.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Insert an option declaration (values stored as a JSON array)
pub fn insert_option(conn: &Connection, product_id: &str, title: &str, values_json: &str, rank: u32) -> Result<()> {
    conn.execute(
        "INSERT INTO catalog_options (product_id, title, option_values, option_rank) VALUES (?, ?, ?, ?)",
        params![product_id, title, values_json, rank],
    )?;
    Ok(())
}

/// Get a product's option declarations in rank order
pub fn get_options_raw(conn: &Connection, product_id: &str) -> Result<Vec<RawOption>> {
    let mut stmt = conn.prepare(
        "SELECT title, COALESCE(option_values, '[]')
         FROM catalog_options WHERE product_id = ? ORDER BY option_rank",
    )?;

    let options = stmt.query_map(params![product_id], |row| {
        Ok(RawOption {
            title: row.get(0)?,
            values_json: row.get(1)?,
        })
    })?;

    options.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Raw data structures
// ============================================================================

/// Product row as stored
#[derive(Debug, Clone)]
pub struct RawProduct {
    pub product_id: String,
    pub handle: String,
    pub title: String,
    pub description: String,
    pub weight: u32,
    /// JSON array of category ids
    pub category_ids: String,
    pub shipping_profile_id: String,
    /// JSON array of sales channel ids
    pub sales_channel_ids: String,
    pub update_count: u32,
    pub create_timestamp: Option<String>,
    pub change_timestamp: Option<String>,
}

/// Product listing row
#[derive(Debug, Clone)]
pub struct RawProductSummary {
    pub product_id: String,
    pub handle: String,
    pub title: String,
    pub variant_count: usize,
}

/// Variant row as stored; option values are kept as display strings
#[derive(Debug, Clone)]
pub struct RawVariant {
    pub variant_id: String,
    pub product_id: String,
    pub title: String,
    pub sku: String,
    pub size: String,
    pub color: String,
    pub height: String,
    pub rank: u32,
}

/// Price row as stored
#[derive(Debug, Clone)]
pub struct RawPrice {
    pub variant_id: String,
    pub currency_code: String,
    pub amount: i64,
}

/// Image row as stored
#[derive(Debug, Clone)]
pub struct RawImage {
    pub image_id: String,
    pub url: String,
    pub rank: u32,
}

/// Option row as stored
#[derive(Debug, Clone)]
pub struct RawOption {
    pub title: String,
    pub values_json: String,
}
