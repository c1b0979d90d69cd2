//! Validated data shapes for store collections.
//!
//! Each schema here corresponds to one store collection (see
//! [`crate::entity::Entity`]). The shapes are wire-facing: they deserialize
//! straight from request bodies and serialize straight into store documents.
//! None of them carry an identifier field - ids are assigned by the store on
//! insert and are never client-supplied.
//!
//! Deserialization enforces presence and types; the `validate` methods
//! enforce the value constraints (non-empty strings, non-negative prices,
//! quantity and age ranges).

mod order;
mod product;
mod user;

pub use order::{Order, OrderItem, TOTAL_TOLERANCE};
pub use product::Product;
pub use user::User;

use thiserror::Error;

/// A request body field failed value-level validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required string field is present but empty.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A numeric field is negative or not a finite number.
    #[error("{field} must be a finite number >= 0 (got {value})")]
    InvalidAmount {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An order item quantity below one.
    #[error("quantity must be >= 1 (got {value})")]
    QuantityTooSmall {
        /// The rejected quantity.
        value: u32,
    },
    /// A user age outside 0-120.
    #[error("age must be between 0 and 120 (got {value})")]
    AgeOutOfRange {
        /// The rejected age.
        value: u32,
    },
}

/// Check that a required string field is non-empty.
pub(crate) fn require_non_empty(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Check that a monetary amount is finite and non-negative.
pub(crate) fn require_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}
