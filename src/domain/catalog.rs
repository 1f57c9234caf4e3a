use crate::domain::product::Product;

/// Pseudo-category that matches every product.
pub const ALL_CATEGORIES: &str = "all";

/// Search and category filter over a product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Case-insensitive name search combined with an exact category match.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|category| category == ALL_CATEGORIES || category == product.category);
        matches_search && matches_category
    }

    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct categories in first-seen order, led by [`ALL_CATEGORIES`].
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}
