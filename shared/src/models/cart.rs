//! Cart Model
//!
//! 购物车：每个菜品 id 最多一行，按首次加入的顺序排列。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::{ItemId, MenuItem};

/// Per-item quantity ceiling (matches the quantity control's `max`)
pub const MAX_QUANTITY: u32 = 10;

/// Format an amount the way receipts and messages show it (`120`, `90.5`)
pub fn display_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// One menu item's selected quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    /// Always in `1..=max_quantity`
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// `"{quantity} x {name} @ Rs. {price}"`
    pub fn summary(&self) -> String {
        format!(
            "{} x {} @ Rs. {}",
            self.quantity,
            self.name,
            display_amount(self.price)
        )
    }
}

/// Session cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    max_quantity: u32,
}

impl Default for Cart {
    fn default() -> Self {
        Self::with_max_quantity(MAX_QUANTITY)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_quantity(max_quantity: u32) -> Self {
        Self {
            lines: Vec::new(),
            max_quantity: max_quantity.max(1),
        }
    }

    /// Apply one item's checkbox and quantity
    ///
    /// Selected with a positive quantity upserts the line in place; anything
    /// else removes it. Quantities above the ceiling are clamped.
    pub fn set_item(&mut self, item: &MenuItem, selected: bool, quantity: u32) {
        if !selected || quantity == 0 {
            self.lines.retain(|line| line.id != item.id);
            return;
        }

        let quantity = quantity.min(self.max_quantity);
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine {
                id: item.id,
                name: item.name.clone(),
                price: item.price,
                quantity,
            }),
        }
    }

    /// Sum of `price × quantity` over all lines
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Human-readable lines in insertion order; call again to restart
    pub fn summary_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(CartLine::summary)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.line(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, name: &str, price: i64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn test_upsert_is_idempotent_by_id() {
        let kopi = item(1, "Kopi O", 120);
        let mut cart = Cart::new();
        cart.set_item(&kopi, true, 2);
        cart.set_item(&kopi, true, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 2);

        cart.set_item(&kopi, true, 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 5);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);

        cart.set_item(&item(1, "Nasi Lemak", 100), true, 2);
        cart.set_item(&item(2, "Teh", 50), true, 1);
        assert_eq!(cart.total(), Decimal::from(250));

        cart.set_item(&item(2, "Teh", 50), true, 3);
        assert_eq!(cart.total(), Decimal::from(350));

        cart.set_item(&item(1, "Nasi Lemak", 100), false, 0);
        assert_eq!(cart.total(), Decimal::from(150));
    }

    #[test]
    fn test_uncheck_removes_line() {
        let kopi = item(1, "Kopi O", 120);
        let mut cart = Cart::new();
        cart.set_item(&kopi, true, 3);
        cart.set_item(&kopi, false, 0);
        assert!(!cart.contains(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let kopi = item(1, "Kopi O", 120);
        let mut cart = Cart::new();
        cart.set_item(&kopi, true, 3);
        cart.set_item(&kopi, true, 0);
        assert!(!cart.contains(1));
    }

    #[test]
    fn test_selected_without_quantity_adds_nothing() {
        let mut cart = Cart::new();
        cart.set_item(&item(1, "Kopi O", 120), true, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_clamped() {
        let mut cart = Cart::new();
        cart.set_item(&item(1, "Kopi O", 120), true, 42);
        assert_eq!(cart.line(1).unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_summary_lines_insertion_order() {
        let mut cart = Cart::new();
        cart.set_item(&item(9, "Roti Bakar", 70), true, 1);
        cart.set_item(&item(1, "Kopi O", 120), true, 2);
        cart.set_item(&item(9, "Roti Bakar", 70), true, 4);

        let lines: Vec<String> = cart.summary_lines().collect();
        assert_eq!(
            lines,
            vec!["4 x Roti Bakar @ Rs. 70", "2 x Kopi O @ Rs. 120"]
        );

        // restartable
        assert_eq!(cart.summary_lines().count(), 2);
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(display_amount(Decimal::new(12050, 2)), "120.5");
        assert_eq!(display_amount(Decimal::new(12000, 2)), "120");
    }
}
