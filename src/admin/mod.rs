//! Admin trigger routes
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /admin/products/{id}/trigger | POST | Re-run the update-product workflow |
//! | /admin/products/{id}/trigger | GET | Diagnostic query: id, title, variants.id, images.* |
//! | /admin/products/{id}/widget | GET | HTML panel calling the two routes above |
//!
//! Successful responses wrap the workflow result:
//!
//! ```json
//! { "product": { "id": "prod_...", "title": "Linen Bed Sheet Set 4", ... } }
//! ```

pub mod error;
pub mod handler;
pub mod widget;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::business::ProductWorkflows;
use crate::error::Result;

pub use error::{ApiError, ApiResult};

/// Shared state of the admin routes
#[derive(Clone)]
pub struct AdminState {
    pub workflows: Arc<dyn ProductWorkflows>,
}

impl AdminState {
    pub fn new(workflows: Arc<dyn ProductWorkflows>) -> Self {
        Self { workflows }
    }
}

/// Build the admin router with its state attached
pub fn router(state: AdminState) -> Router {
    Router::new()
        .route(
            "/admin/products/{id}/trigger",
            get(handler::query_product).post(handler::trigger_update),
        )
        .route("/admin/products/{id}/widget", get(widget::page))
        .with_state(state)
}

/// Serve the admin routes on `addr` until the process stops
pub async fn serve(addr: &str, workflows: Arc<dyn ProductWorkflows>) -> Result<()> {
    let app = router(AdminState::new(workflows)).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Admin routes listening");
    axum::serve(listener, app).await?;
    Ok(())
}
