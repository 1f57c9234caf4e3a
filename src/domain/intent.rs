use crate::domain::product::ProductId;
use crate::error::CartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer settles a sale. Recorded on the receipt only.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Check,
    Bank,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Check => "check",
            PaymentMethod::Bank => "bank",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "check" => Ok(PaymentMethod::Check),
            "bank" => Ok(PaymentMethod::Bank),
            other => Err(CartError::Validation(format!(
                "Unknown payment method '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum IntentAction {
    Add,
    Change,
    Remove,
    Clear,
    Checkout,
}

/// One row of an intent script as it appears on disk.
///
/// Columns that an action does not use may be left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct IntentRecord {
    pub action: IntentAction,
    pub product: Option<ProductId>,
    pub delta: Option<i64>,
    pub payment: Option<String>,
}

/// A user action forwarded from the presentation layer to the cart.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CartIntent {
    Add { product: ProductId },
    Change { product: ProductId, delta: i64 },
    Remove { product: ProductId },
    Clear,
    Checkout { payment: PaymentMethod },
}

fn require<T>(value: Option<T>, action: &str, column: &str) -> Result<T, CartError> {
    value.ok_or_else(|| CartError::Validation(format!("'{action}' requires a {column}")))
}

impl TryFrom<IntentRecord> for CartIntent {
    type Error = CartError;

    fn try_from(record: IntentRecord) -> Result<Self, Self::Error> {
        match record.action {
            IntentAction::Add => Ok(CartIntent::Add {
                product: require(record.product, "add", "product")?,
            }),
            IntentAction::Change => Ok(CartIntent::Change {
                product: require(record.product, "change", "product")?,
                delta: require(record.delta, "change", "delta")?,
            }),
            IntentAction::Remove => Ok(CartIntent::Remove {
                product: require(record.product, "remove", "product")?,
            }),
            IntentAction::Clear => Ok(CartIntent::Clear),
            IntentAction::Checkout => {
                let payment = require(record.payment, "checkout", "payment method")?;
                Ok(CartIntent::Checkout {
                    payment: payment.parse()?,
                })
            }
        }
    }
}
