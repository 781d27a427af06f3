use thiserror::Error;

/// Rejected product fields. Raised when a [`crate::model::Product`] is built
/// from bad input, and by the command layer for user-supplied stock and price
/// changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Price cannot be negative (got {0})")]
    NegativePrice(f64),

    #[error("Price must be a finite number")]
    InvalidPrice,

    #[error("Quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    #[error("SKU cannot be empty")]
    EmptySku,
}

#[derive(Error, Debug)]
pub enum InvError {
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, InvError>;
