//! Product schema for marketplace listings.

use serde::{Deserialize, Serialize};

use super::{ValidationError, require_amount, require_non_empty};
use crate::entity::Entity;

/// A marketplace listing.
///
/// ## Constraints
///
/// - `title` and `category` must be non-empty
/// - `price` must be a finite number >= 0
/// - `in_stock` defaults to true when omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product title.
    pub title: String,
    /// Product description.
    pub description: Option<String>,
    /// Price in INR.
    pub price: f64,
    /// Product category.
    pub category: String,
    /// Whether the product is in stock.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Primary image URL.
    pub image: Option<String>,
    /// Seller display name.
    pub seller_name: Option<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Entity for Product {
    const COLLECTION: &'static str = "product";
}

impl Product {
    /// Validate value-level constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `title` or `category` is empty, or if
    /// `price` is negative or not finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("category", &self.category)?;
        require_amount("price", self.price)?;
        Ok(())
    }
}
