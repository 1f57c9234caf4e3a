use crate::domain::money::Price;
use crate::domain::ports::CatalogProvider;
use crate::domain::product::{Product, ProductId};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// The furniture range sold at the store counter.
///
/// Seed prices go through the same validation as catalog files, so a bad row
/// fails the load instead of disappearing from the range.
pub fn furniture_products() -> Result<Vec<Product>> {
    let rows: [(u32, &str, &str, Decimal, u32); 8] = [
        (1, "Luxury Sofa Set", "Living Room", dec!(2499.99), 15),
        (2, "King Size Bed", "Bedroom", dec!(1899.99), 8),
        (3, "Dining Table 6-Seater", "Dining", dec!(1299.99), 12),
        (4, "Office Desk", "Office", dec!(699.99), 20),
        (5, "Bookshelf", "Storage", dec!(399.99), 25),
        (6, "Coffee Table", "Living Room", dec!(299.99), 18),
        (7, "Wardrobe", "Bedroom", dec!(1599.99), 10),
        (8, "Recliner Chair", "Living Room", dec!(899.99), 14),
    ];
    rows.into_iter()
        .map(|(id, name, category, price, stock)| {
            Ok(Product::new(
                ProductId(id),
                name,
                category,
                Price::new(price)?,
                stock,
            ))
        })
        .collect()
}

/// An immutable in-memory catalog.
///
/// Clones share the same product list, so a catalog can be handed to several
/// sessions without copying.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    products: Arc<[Product]>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// A catalog seeded with [`furniture_products`].
    pub fn furniture() -> Result<Self> {
        Ok(Self::new(furniture_products()?))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn get(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::CatalogProviderBox;

    #[test]
    fn test_furniture_seed() {
        let products = furniture_products().unwrap();
        assert_eq!(products.len(), 8);
        assert!(products.iter().all(|p| p.price.value() > Decimal::ZERO));
        assert_eq!(products[0].name, "Luxury Sofa Set");
        assert_eq!(products[0].price, Price::new(dec!(2499.99)).unwrap());
    }

    #[tokio::test]
    async fn test_in_memory_catalog_lookup() {
        let catalog = InMemoryCatalog::furniture().unwrap();

        let desk = catalog.get(ProductId(4)).await.unwrap().unwrap();
        assert_eq!(desk.name, "Office Desk");
        assert_eq!(desk.stock, 20);

        assert!(catalog.get(ProductId(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_catalog_as_boxed_provider() {
        let catalog: CatalogProviderBox = Box::new(InMemoryCatalog::furniture().unwrap());
        let products = catalog.products().await.unwrap();
        assert_eq!(products.len(), 8);
    }

    #[tokio::test]
    async fn test_clones_share_products() {
        let catalog = InMemoryCatalog::new(vec![Product::new(
            ProductId(1),
            "Stool",
            "Kitchen",
            Price::new(dec!(25)).unwrap(),
            3,
        )]);
        let shared = catalog.clone();

        let handle = tokio::spawn(async move { shared.get(ProductId(1)).await.unwrap() });
        let found = handle.await.unwrap().unwrap();

        assert_eq!(found.name, "Stool");
        assert_eq!(catalog.len(), 1);
    }
}
