//! Order Model
//!
//! An order only exists between submission and rendering of the receipt and
//! the owner message; it is never stored beyond the submitting session.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::cart::{Cart, CartLine};
use crate::error::{AppError, AppResult};

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const CART_REQUIRED: &str = "Please select at least one item.";

/// Submitted order snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub table_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

impl Order {
    /// Snapshot the cart into an order
    ///
    /// The name is checked before the cart, so an empty name wins even when
    /// the cart is empty too.
    pub fn from_cart(
        table_number: impl Into<String>,
        customer_name: &str,
        date: NaiveDate,
        cart: &Cart,
    ) -> AppResult<Self> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(AppError::validation(NAME_REQUIRED));
        }
        if cart.is_empty() {
            return Err(AppError::validation(CART_REQUIRED));
        }

        Ok(Self {
            table_number: table_number.into(),
            customer_name: customer_name.to_string(),
            date,
            lines: cart.lines().to_vec(),
            total: cart.total(),
        })
    }

    pub fn summary_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(CartLine::summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn cart_with_items() -> Cart {
        let mut cart = Cart::new();
        let item = MenuItem {
            id: 1,
            name: "Kopi O".to_string(),
            price: Decimal::from(120),
        };
        cart.set_item(&item, true, 2);
        cart
    }

    #[test]
    fn test_empty_name_rejected_regardless_of_cart() {
        let err = Order::from_cart("4", "", date(), &cart_with_items()).unwrap_err();
        assert_eq!(err.to_string(), NAME_REQUIRED);

        let err = Order::from_cart("4", "   ", date(), &Cart::new()).unwrap_err();
        assert_eq!(err.to_string(), NAME_REQUIRED);
    }

    #[test]
    fn test_empty_cart_rejected_regardless_of_name() {
        let err = Order::from_cart("4", "Aisyah", date(), &Cart::new()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), CART_REQUIRED);
    }

    #[test]
    fn test_order_snapshot() {
        let order = Order::from_cart("4", " Aisyah ", date(), &cart_with_items()).unwrap();
        assert_eq!(order.customer_name, "Aisyah");
        assert_eq!(order.total, Decimal::from(240));
        assert_eq!(order.lines.len(), 1);
    }
}
