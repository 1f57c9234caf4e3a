use crate::domain::product::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Cannot check out an empty cart")]
    EmptyCart,
}

pub type Result<T> = std::result::Result<T, CartError>;
