use crate::domain::catalog::{CatalogQuery, categories};
use crate::domain::ports::CatalogProvider;
use crate::domain::product::Product;
use crate::error::{CartError, Result};
use tracing::debug;

/// Runs `query` against the provider's product list.
///
/// A category that no product carries is rejected instead of yielding an
/// empty listing.
pub async fn list_products(
    catalog: &dyn CatalogProvider,
    query: &CatalogQuery,
) -> Result<Vec<Product>> {
    let products = catalog.products().await?;
    if let Some(category) = &query.category {
        if !categories(&products).contains(category) {
            return Err(CartError::Validation(format!(
                "Unknown category: {category}"
            )));
        }
    }

    let found: Vec<Product> = query.filter(&products).into_iter().cloned().collect();
    debug!(?query, matches = found.len(), "catalog listed");
    Ok(found)
}
