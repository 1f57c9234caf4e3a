use crate::domain::money::{Money, Price, TaxRate};
use crate::domain::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product's aggregated quantity within a cart.
///
/// `name` and `price` are snapshots taken when the product was first added;
/// later catalog changes do not reach lines already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    /// Always at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// `price × quantity` for this line.
    pub fn amount(&self) -> Money {
        self.price * self.quantity
    }
}

/// Derived monetary summary of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// The line items of a single checkout session.
///
/// Lines keep insertion order and are unique by product. A line whose
/// quantity would drop to zero is removed instead of kept at zero. None of
/// the operations fail: unknown products and oversized decrements are
/// absorbed as no-ops or removals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    tax_rate: TaxRate,
}

impl Cart {
    /// Creates an empty cart taxed at [`TaxRate::DEFAULT`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Self {
            lines: Vec::new(),
            tax_rate,
        }
    }

    /// Adds one unit of `product`, merging with an existing line if present.
    pub fn add_item(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Shifts a line's quantity by `delta`, removing it when it reaches zero.
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) {
        let Some(idx) = self.position(product_id) else {
            return;
        };

        let updated = i64::from(self.lines[idx].quantity)
            .saturating_add(delta)
            .max(0);
        if updated == 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Computes subtotal, tax and total without touching the cart.
    ///
    /// Amounts past the `Decimal` range saturate, see [`Money`].
    pub fn compute_totals(&self) -> Totals {
        let subtotal: Money = self.lines.iter().map(CartLine::amount).sum();
        let tax = subtotal * self.tax_rate;
        Totals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub(crate) fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id == product_id)
    }
}
