use super::product::{Product, ProductId};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only source of products for a checkout session.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn get(&self, id: ProductId) -> Result<Option<Product>>;
    async fn products(&self) -> Result<Vec<Product>>;
}

pub type CatalogProviderBox = Box<dyn CatalogProvider>;
