use crate::domain::cart::{Cart, CartLine, Totals};
use crate::domain::intent::{CartIntent, PaymentMethod};
use crate::domain::money::TaxRate;
use crate::domain::ports::CatalogProviderBox;
use crate::error::{CartError, Result};
use serde::Serialize;
use tracing::{debug, info};

/// A completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Sequence number of the sale within its session, starting at 1.
    pub sale: u32,
    pub payment: PaymentMethod,
    pub lines: Vec<CartLine>,
    pub totals: Totals,
}

/// The controller between the presentation layer and the cart.
///
/// `CheckoutSession` owns the cart for one register session and resolves
/// product ids against its catalog. All cart mutations go through here.
pub struct CheckoutSession {
    cart: Cart,
    catalog: CatalogProviderBox,
    sales: u32,
}

impl CheckoutSession {
    /// Creates a session with an empty cart taxed at `tax_rate`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Where `Add` intents look up products.
    /// * `tax_rate` - Rate applied to the cart subtotal.
    pub fn new(catalog: CatalogProviderBox, tax_rate: TaxRate) -> Self {
        Self {
            cart: Cart::with_tax_rate(tax_rate),
            catalog,
            sales: 0,
        }
    }

    /// Applies a single user intent.
    ///
    /// Returns the receipt when the intent completed a sale. Errors leave the
    /// cart untouched.
    pub async fn apply(&mut self, intent: CartIntent) -> Result<Option<Receipt>> {
        debug!(?intent, "applying intent");
        match intent {
            CartIntent::Add { product } => {
                let product = self
                    .catalog
                    .get(product)
                    .await?
                    .ok_or(CartError::UnknownProduct(product))?;
                self.cart.add_item(&product);
            }
            CartIntent::Change { product, delta } => self.cart.change_quantity(product, delta),
            CartIntent::Remove { product } => self.cart.remove_item(product),
            CartIntent::Clear => self.cart.clear(),
            CartIntent::Checkout { payment } => return self.checkout(payment).map(Some),
        }
        Ok(None)
    }

    /// Completes the sale and empties the cart.
    ///
    /// An empty cart cannot be checked out.
    pub fn checkout(&mut self, payment: PaymentMethod) -> Result<Receipt> {
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let totals = self.cart.compute_totals();
        let lines = self.cart.take_lines();
        self.sales += 1;

        info!(
            sale = self.sales,
            %payment,
            items = lines.len(),
            total = %totals.total,
            "sale completed"
        );

        Ok(Receipt {
            sale: self.sales,
            payment,
            lines,
            totals,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> Totals {
        self.cart.compute_totals()
    }

    /// Number of sales completed so far.
    pub fn sales(&self) -> u32 {
        self.sales
    }

    /// Consumes the session and returns the open cart.
    pub fn into_cart(self) -> Cart {
        self.cart
    }
}
