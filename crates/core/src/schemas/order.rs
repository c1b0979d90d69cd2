//! Order and order-item schemas for checkout.

use serde::{Deserialize, Serialize};

use super::{ValidationError, require_amount, require_non_empty};
use crate::entity::Entity;

/// Tolerance for comparing a client-declared order total against the total
/// recomputed from its items.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// One line of an order.
///
/// Every field except `product_id` is a snapshot taken at checkout time,
/// deliberately decoupled from the live product it came from. `product_id`
/// is a plain string reference, not an enforced foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product document id this item was created from.
    pub product_id: String,
    /// Snapshot of the product title.
    pub title: String,
    /// Unit price at checkout.
    pub price: f64,
    /// Quantity purchased.
    pub quantity: u32,
    /// Snapshot of the image URL.
    pub image: Option<String>,
}

impl OrderItem {
    /// Validate value-level constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `product_id` or `title` is empty,
    /// `price` is negative or not finite, or `quantity` is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("product_id", &self.product_id)?;
        require_non_empty("title", &self.title)?;
        require_amount("price", self.price)?;
        if self.quantity < 1 {
            return Err(ValidationError::QuantityTooSmall {
                value: self.quantity,
            });
        }
        Ok(())
    }

    /// Line total for this item.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A checkout order.
///
/// `payment_method` and `status` default to `"COD"` and `"pending"` when
/// omitted; when supplied they are stored as-is. `total_amount` is declared
/// by the client and checked against the items at creation time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Buyer name.
    pub buyer_name: String,
    /// Buyer email.
    pub buyer_email: String,
    /// Items in this order.
    pub items: Vec<OrderItem>,
    /// Payment method, e.g. UPI or COD.
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    /// Order status.
    #[serde(default = "default_status")]
    pub status: String,
    /// Client-declared total amount.
    pub total_amount: f64,
}

fn default_payment_method() -> String {
    "COD".to_string()
}

fn default_status() -> String {
    "pending".to_string()
}

impl Entity for Order {
    const COLLECTION: &'static str = "order";
}

impl Order {
    /// Validate value-level constraints on the order and each item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `buyer_name` or `buyer_email` is empty,
    /// `total_amount` is negative or not finite, or any item fails its own
    /// validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("buyer_name", &self.buyer_name)?;
        require_non_empty("buyer_email", &self.buyer_email)?;
        require_amount("total_amount", self.total_amount)?;
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }

    /// Total recomputed from the items.
    #[must_use]
    pub fn computed_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Whether the declared total matches the recomputed total within
    /// [`TOTAL_TOLERANCE`].
    #[must_use]
    pub fn total_matches(&self) -> bool {
        (self.computed_total() - self.total_amount).abs() <= TOTAL_TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32) -> OrderItem {
        OrderItem {
            product_id: "64f0c2ab9d1e8a5b3c7d9e01".to_string(),
            title: "Maggi Bowl (Hot & Fresh)".to_string(),
            price,
            quantity,
            image: None,
        }
    }

    fn order(items: Vec<OrderItem>, total_amount: f64) -> Order {
        Order {
            buyer_name: "Ravi".to_string(),
            buyer_email: "ravi@campus.edu".to_string(),
            items,
            payment_method: "COD".to_string(),
            status: "pending".to_string(),
            total_amount,
        }
    }

    #[test]
    fn matching_total_is_accepted() {
        let order = order(vec![item(45.0, 2)], 90.0);
        assert!(order.validate().is_ok());
        assert!(order.total_matches());
    }

    #[test]
    fn tampered_total_is_detected() {
        let order = order(vec![item(45.0, 2)], 95.0);
        assert!(order.validate().is_ok());
        assert!(!order.total_matches());
    }

    #[test]
    fn total_within_tolerance_is_accepted() {
        let order = order(vec![item(33.33, 3)], 99.99);
        assert!(order.total_matches());
    }

    #[test]
    fn computed_total_sums_all_lines() {
        let order = order(vec![item(45.0, 2), item(79.0, 1)], 169.0);
        assert!((order.computed_total() - 169.0).abs() < f64::EPSILON);
        assert!(order.total_matches());
    }

    #[test]
    fn zero_quantity_item_is_rejected() {
        let order = order(vec![item(45.0, 0)], 0.0);
        assert_eq!(
            order.validate(),
            Err(ValidationError::QuantityTooSmall { value: 0 })
        );
    }

    #[test]
    fn negative_item_price_is_rejected() {
        let order = order(vec![item(-45.0, 1)], -45.0);
        assert!(order.validate().is_err());
    }

    #[test]
    fn empty_buyer_name_is_rejected() {
        let mut order = order(vec![item(45.0, 1)], 45.0);
        order.buyer_name = String::new();
        assert_eq!(
            order.validate(),
            Err(ValidationError::EmptyField {
                field: "buyer_name"
            })
        );
    }

    #[test]
    fn payment_method_and_status_default() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "buyer_name": "Ravi",
            "buyer_email": "ravi@campus.edu",
            "items": [{
                "product_id": "abc123",
                "title": "Maggi Bowl (Hot & Fresh)",
                "price": 45.0,
                "quantity": 2,
            }],
            "total_amount": 90.0,
        }))
        .unwrap();
        assert_eq!(order.payment_method, "COD");
        assert_eq!(order.status, "pending");
    }

    #[test]
    fn supplied_status_is_kept_verbatim() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "buyer_name": "Ravi",
            "buyer_email": "ravi@campus.edu",
            "items": [],
            "payment_method": "UPI",
            "status": "paid",
            "total_amount": 0.0,
        }))
        .unwrap();
        assert_eq!(order.payment_method, "UPI");
        assert_eq!(order.status, "paid");
    }
}
