//! Admin trigger handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::Serialize;

use super::AdminState;
use super::error::{ApiError, ApiResult};
use crate::database::{ProductDetail, ProductProjection, ProductUpdate};

/// `{"product": ...}` response wrapper
#[derive(Debug, Serialize)]
pub struct ProductEnvelope<T> {
    pub product: T,
}

/// POST /admin/products/{id}/trigger - re-run the update workflow
///
/// The body is optional; when present it must be a JSON `ProductUpdate`.
pub async fn trigger_update(
    State(state): State<AdminState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<ProductEnvelope<ProductDetail>>> {
    let update = parse_update(&body)?;
    tracing::info!(product_id = %id, "Triggering product update workflow");

    let workflows = state.workflows.clone();
    let product = tokio::task::spawn_blocking(move || workflows.update_product(&id, &update))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ProductEnvelope { product }))
}

/// GET /admin/products/{id}/trigger - diagnostic product query
pub async fn query_product(
    State(state): State<AdminState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductEnvelope<ProductProjection>>> {
    tracing::debug!(product_id = %id, "Querying product");

    let workflows = state.workflows.clone();
    let product = tokio::task::spawn_blocking(move || workflows.query_product(&id))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ProductEnvelope { product }))
}

fn parse_update(body: &[u8]) -> ApiResult<ProductUpdate> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProductUpdate::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::Validation(format!("invalid update body: {}", e)))
}
