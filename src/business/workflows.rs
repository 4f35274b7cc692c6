//! Platform workflow seam
//!
//! The admin routes and the CLI talk to product storage through
//! [`ProductWorkflows`]. The SQLite [`Catalog`] implements it behind a mutex;
//! an adapter for a hosted commerce platform would implement the same trait.

use std::sync::Mutex;
use crate::catalog::GeneratedProduct;
use crate::database::{ProductDetail, ProductProjection, ProductUpdate};
use crate::error::{SheetgenError, Result};
use super::catalog::Catalog;

/// Operations the generator and admin routes need from the platform
pub trait ProductWorkflows: Send + Sync {
    /// Persist generated products and return their ids
    fn create_products(&self, products: &[GeneratedProduct]) -> Result<Vec<String>>;

    /// Run the update-product workflow and return the updated product
    fn update_product(&self, product_id: &str, update: &ProductUpdate) -> Result<ProductDetail>;

    /// Query `id, title, variants.id, images.*` of a product
    fn query_product(&self, product_id: &str) -> Result<ProductProjection>;
}

fn lock(catalog: &Mutex<Catalog>) -> Result<std::sync::MutexGuard<'_, Catalog>> {
    catalog
        .lock()
        .map_err(|_| SheetgenError::DatabaseError("Catalog lock poisoned".to_string()))
}

impl ProductWorkflows for Mutex<Catalog> {
    fn create_products(&self, products: &[GeneratedProduct]) -> Result<Vec<String>> {
        lock(self)?.create_products(products)
    }

    fn update_product(&self, product_id: &str, update: &ProductUpdate) -> Result<ProductDetail> {
        lock(self)?.update_product(product_id, update)
    }

    fn query_product(&self, product_id: &str) -> Result<ProductProjection> {
        lock(self)?.query_product(product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::catalog::tests::sample_products;
    use std::sync::Arc;

    #[test]
    fn test_shared_catalog_workflows() {
        let workflows: Arc<dyn ProductWorkflows> = Arc::new(Mutex::new(Catalog::in_memory().unwrap()));
        let ids = workflows.create_products(&sample_products(1, 2, 6)).unwrap();

        let updated = workflows.update_product(&ids[0], &ProductUpdate::default()).unwrap();
        assert_eq!(updated.update_count, 1);

        let projection = workflows.query_product(&ids[0]).unwrap();
        assert_eq!(projection.variants.len(), 2);
    }
}
