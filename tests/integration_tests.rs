//! Integration tests for sheetgen
//!
//! These tests generate products, store them in a temporary catalog and
//! drive the admin routes in-process.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use sheetgen::admin::{self, AdminState};
use sheetgen::catalog::options::{COLORS, HEIGHTS, SHEET_TYPES};
use sheetgen::catalog::{Category, GenerateOptions, SalesChannel, ShippingProfile};
use sheetgen::utils::{UniqueStringRegistry, generate_multiple_unique_strings, hex_string, unique_id};
use sheetgen::{Catalog, ProductWorkflows, SheetgenError, enumerate_combinations, generate_products};

fn platform() -> (Vec<Category>, ShippingProfile, Vec<SalesChannel>) {
    (
        vec![
            Category { id: "pcat_towels".to_string(), name: "Towels".to_string() },
            Category { id: "pcat_sheets".to_string(), name: "Sheets".to_string() },
        ],
        ShippingProfile { id: "sp_default".to_string(), name: "Default".to_string() },
        vec![SalesChannel { id: "sc_default".to_string(), name: "Web".to_string() }],
    )
}

fn generate(seed: u64, num_products: usize, variants_per_product: usize) -> Vec<sheetgen::GeneratedProduct> {
    generate_salted(seed, seed, num_products, variants_per_product)
}

fn generate_salted(
    seed: u64,
    salt: u64,
    num_products: usize,
    variants_per_product: usize,
) -> Vec<sheetgen::GeneratedProduct> {
    let (categories, profile, channels) = platform();
    let mut rng = StdRng::seed_from_u64(seed);
    let options = GenerateOptions {
        num_products,
        variants_per_product,
        handle_salt: salt,
        ..Default::default()
    };
    generate_products(&mut rng, &options, &categories, &profile, &channels).unwrap()
}

async fn send(app: axum::Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn app_with_products(count: usize) -> (axum::Router, Vec<String>) {
    let workflows: Arc<dyn ProductWorkflows> = Arc::new(Mutex::new(Catalog::in_memory().unwrap()));
    let ids = workflows.create_products(&generate(77, count, 3)).unwrap();
    (admin::router(AdminState::new(workflows)), ids)
}

#[test]
fn test_combination_report() {
    let report = enumerate_combinations();
    assert_eq!(report.size_count, 112);
    assert_eq!(report.color_count, 50);
    assert_eq!(report.height_count, 12);
    assert_eq!(report.total_combinations, 67_200);
}

#[test]
fn test_full_round_robin_catalog() {
    let products = generate(1, 24, 20);
    assert_eq!(products.len(), 24);

    for (i, product) in products.iter().enumerate() {
        let sheet_type = SHEET_TYPES[i % SHEET_TYPES.len()];
        assert!(product.title.starts_with(sheet_type));
        assert!(product.handle.ends_with(&format!("-sheet-set-{}-1", i + 1)));
        assert_eq!(product.category_ids, vec!["pcat_sheets"]);
        for variant in &product.variants {
            assert!(COLORS.contains(&variant.options.color.as_str()));
            assert!(HEIGHTS.contains(&variant.options.height.to_string().as_str()));
        }
    }

    let handles: HashSet<&str> = products.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles.len(), 24);
}

#[test]
fn test_generate_store_and_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.db");
    let products = generate(5, 3, 200);

    let ids = {
        let mut catalog = Catalog::create(&path).unwrap();
        catalog.create_products(&products).unwrap()
    };

    let catalog = Catalog::open(&path).unwrap();
    assert_eq!(catalog.product_count().unwrap(), 3);
    for (id, generated) in ids.iter().zip(&products) {
        let stored = catalog.get_product(id).unwrap().unwrap();
        assert_eq!(stored.handle, generated.handle);
        assert_eq!(stored.variants.len(), 200);
        let skus: HashSet<&str> = stored.variants.iter().map(|v| v.sku.as_str()).collect();
        assert_eq!(skus.len(), 200);
    }
}

#[test]
fn test_seeded_rerun_with_new_salt_is_rejected() {
    let mut catalog = Catalog::in_memory().unwrap();
    catalog.create_products(&generate_salted(7, 1, 2, 5)).unwrap();

    let err = catalog.create_products(&generate_salted(7, 2, 2, 5)).unwrap_err();
    match err {
        SheetgenError::InvalidArgument(msg) => assert!(msg.contains("sku already exists")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(catalog.product_count().unwrap(), 2);

    // A different seed draws different SKU suffixes
    catalog.create_products(&generate_salted(8, 3, 2, 5)).unwrap();
    assert_eq!(catalog.product_count().unwrap(), 4);
}

#[test]
fn test_identifier_helpers_together() {
    let mut registry = UniqueStringRegistry::new();
    let values = generate_multiple_unique_strings(&mut registry, 100, 16).unwrap();
    assert_eq!(registry.count(), 100);
    assert_eq!(values.iter().collect::<HashSet<_>>().len(), 100);

    assert!(matches!(hex_string(3), Err(SheetgenError::InvalidArgument(_))));
    assert_eq!(unique_id().len(), 36);
}

#[tokio::test]
async fn test_query_route() {
    let (app, ids) = app_with_products(2);
    let (status, body) = send(app, "GET", &format!("/admin/products/{}/trigger", ids[0]), Body::empty()).await;

    assert_eq!(status, StatusCode::OK);
    let product = &body["product"];
    assert_eq!(product["id"], ids[0].as_str());
    assert_eq!(product["title"], "Egyptian Cotton Bed Sheet Set 1");
    assert_eq!(product["variants"].as_array().unwrap().len(), 3);
    assert!(product["variants"][0]["id"].as_str().unwrap().starts_with("variant_"));
    assert_eq!(product["images"].as_array().unwrap().len(), 4);
    assert!(product["images"][0]["url"].is_string());
}

#[tokio::test]
async fn test_trigger_update_route() {
    let (app, ids) = app_with_products(1);
    let uri = format!("/admin/products/{}/trigger", ids[0]);

    let (status, body) = send(app.clone(), "POST", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["update_count"], 1);

    let (status, body) = send(app, "POST", &uri, Body::from(r#"{"title": "Renamed Set"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["update_count"], 2);
    assert_eq!(body["product"]["title"], "Renamed Set");
}

#[tokio::test]
async fn test_routes_report_errors() {
    let (app, ids) = app_with_products(1);

    let (status, body) = send(app.clone(), "GET", "/admin/products/prod_missing/trigger", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (status, _) = send(app.clone(), "POST", "/admin/products/prod_missing/trigger", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/admin/products/{}/trigger", ids[0]);
    let (status, body) = send(app, "POST", &uri, Body::from("{broken")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn test_widget_route() {
    let (app, ids) = app_with_products(1);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/admin/products/{}/widget", ids[0]))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(&ids[0]));
    assert!(html.contains("/trigger"));
}
