use crate::domain::product::Product;
use crate::error::{CartError, Result};
use crate::infrastructure::in_memory::InMemoryCatalog;
use std::collections::HashSet;
use std::io::Read;

/// Reads a product catalog from CSV with the header
/// `id, name, category, price, stock`.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }

    /// Loads the whole file into an in-memory catalog.
    ///
    /// Unlike intent scripts, a catalog is all-or-nothing: the first bad row
    /// or a repeated product id fails the load.
    pub fn into_catalog(self) -> Result<InMemoryCatalog> {
        let mut seen = HashSet::new();
        let mut products = Vec::new();
        for product in self.products() {
            let product = product?;
            if !seen.insert(product.id) {
                return Err(CartError::Validation(format!(
                    "Duplicate product id {} in catalog",
                    product.id
                )));
            }
            products.push(product);
        }
        Ok(InMemoryCatalog::new(products))
    }
}
