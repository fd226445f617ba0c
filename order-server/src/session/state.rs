//! Per-diner session state
//!
//! Everything a diner has done on the page lives here: table number, the
//! category being viewed, the item controls, the cart and the last order.
//! Nothing is shared between sessions.

use std::collections::HashMap;
use std::time::Instant;

use chrono::NaiveDate;
use shared::{AppError, AppResult, Cart, Category, ItemId, Order};

use super::controls::{ItemAction, ItemControl, ItemsForm};
use super::navigator::CategoryNavigator;

pub const TABLE_REQUIRED: &str = "Please enter your table number first.";

/// Inline message shown once on the next page render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
}

/// Shown once after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub whatsapp_link: String,
}

#[derive(Debug, Clone)]
pub struct OrderSession {
    pub table_number: Option<String>,
    pub navigator: CategoryNavigator,
    pub controls: HashMap<ItemId, ItemControl>,
    pub cart: Cart,
    /// Customer details as last typed, re-filled into the form
    pub customer_name: String,
    pub order_date: Option<NaiveDate>,
    /// Last successfully submitted order (serves `/receipt.pdf`)
    pub last_order: Option<Order>,
    pub notice: Option<Notice>,
    pub confirmation: Option<Confirmation>,
    last_seen: Instant,
}

impl OrderSession {
    pub fn new(category_count: usize, max_quantity: u32) -> Self {
        Self {
            table_number: None,
            navigator: CategoryNavigator::new(category_count),
            controls: HashMap::new(),
            cart: Cart::with_max_quantity(max_quantity),
            customer_name: String::new(),
            order_date: None,
            last_order: None,
            notice: None,
            confirmation: None,
            last_seen: Instant::now(),
        }
    }

    /// Remember a table number; blank input is ignored
    pub fn set_table(&mut self, table: &str) -> bool {
        let table = table.trim();
        if table.is_empty() {
            return false;
        }
        self.table_number = Some(table.to_string());
        true
    }

    /// The table number, or a notice asking for it
    pub fn require_table(&mut self) -> AppResult<String> {
        match &self.table_number {
            Some(table) => Ok(table.clone()),
            None => {
                let e = AppError::validation(TABLE_REQUIRED);
                self.notice = Some(Notice::Error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn control(&self, id: ItemId) -> ItemControl {
        self.controls.get(&id).copied().unwrap_or_default()
    }

    /// Apply the controls of one category to the cart, then navigate
    ///
    /// Every item of `category` is updated, so an item missing from the form
    /// is treated as unchecked.
    pub fn apply_items(&mut self, category: &Category, form: &ItemsForm) {
        for item in &category.items {
            let control = form.controls.get(&item.id).copied().unwrap_or_default();
            self.controls.insert(item.id, control);
            self.cart.set_item(item, control.selected, control.quantity);
        }

        match form.action {
            ItemAction::Previous => {
                self.navigator.previous();
            }
            ItemAction::Next => {
                self.navigator.next();
            }
            ItemAction::Update => {}
        }
    }

    /// Validate the details and snapshot the cart into an order
    ///
    /// On failure the error becomes the notice and nothing else changes.
    pub fn submit(&mut self, customer_name: &str, date: NaiveDate) -> AppResult<Order> {
        self.customer_name = customer_name.trim().to_string();
        self.order_date = Some(date);

        let table = self.require_table()?;
        match Order::from_cart(table, customer_name, date, &self.cart) {
            Ok(order) => {
                self.last_order = Some(order.clone());
                Ok(order)
            }
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Clear messages that should only be shown once
    pub fn clear_one_shot(&mut self) {
        self.notice = None;
        self.confirmation = None;
    }

    pub(crate) fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub(crate) fn idle_secs(&self) -> u64 {
        self.last_seen.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::MenuItem;
    use shared::models::order::{CART_REQUIRED, NAME_REQUIRED};

    fn drinks() -> Category {
        Category {
            name: "Drinks".into(),
            items: vec![
                MenuItem {
                    id: 1,
                    name: "Kopi O".into(),
                    price: Decimal::from(100),
                },
                MenuItem {
                    id: 2,
                    name: "Teh".into(),
                    price: Decimal::from(50),
                },
            ],
        }
    }

    fn form(action: ItemAction, controls: &[(ItemId, bool, u32)]) -> ItemsForm {
        ItemsForm {
            action,
            controls: controls
                .iter()
                .map(|&(id, selected, quantity)| (id, ItemControl { selected, quantity }))
                .collect(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()
    }

    #[test]
    fn test_apply_items_updates_cart_and_controls() {
        let mut session = OrderSession::new(2, 10);
        session.apply_items(
            &drinks(),
            &form(ItemAction::Update, &[(1, true, 2), (2, true, 1)]),
        );
        assert_eq!(session.cart.total(), Decimal::from(250));
        assert!(session.control(1).selected);

        session.apply_items(&drinks(), &form(ItemAction::Update, &[(2, true, 1)]));
        assert!(!session.cart.contains(1));
        assert_eq!(session.control(1), ItemControl::default());
    }

    #[test]
    fn test_apply_items_then_navigate() {
        let mut session = OrderSession::new(2, 10);
        session.apply_items(&drinks(), &form(ItemAction::Next, &[(1, true, 1)]));
        assert_eq!(session.navigator.index(), 1);
        assert!(session.cart.contains(1));

        session.apply_items(&drinks(), &form(ItemAction::Next, &[(1, true, 1)]));
        assert_eq!(session.navigator.index(), 1);
    }

    #[test]
    fn test_submit_validation_leaves_cart_untouched() {
        let mut session = OrderSession::new(1, 10);
        session.set_table("4");
        session.apply_items(&drinks(), &form(ItemAction::Update, &[(1, true, 2)]));

        let err = session.submit("  ", date()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.notice, Some(Notice::Error(NAME_REQUIRED.into())));
        assert_eq!(session.cart.len(), 1);
        assert!(session.last_order.is_none());
    }

    #[test]
    fn test_submit_without_table() {
        let mut session = OrderSession::new(1, 10);
        session.apply_items(&drinks(), &form(ItemAction::Update, &[(1, true, 1)]));

        let err = session.submit("Wei Ling", date()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.notice, Some(Notice::Error(TABLE_REQUIRED.into())));
        assert!(session.last_order.is_none());
    }

    #[test]
    fn test_submit_empty_cart() {
        let mut session = OrderSession::new(1, 10);
        session.set_table("2");
        let err = session.submit("Wei Ling", date()).unwrap_err();
        assert_eq!(err.to_string(), CART_REQUIRED);
    }

    #[test]
    fn test_submit_success() {
        let mut session = OrderSession::new(1, 10);
        session.set_table(" 7 ");
        session.apply_items(&drinks(), &form(ItemAction::Update, &[(2, true, 3)]));

        let order = session.submit("Wei Ling", date()).unwrap();
        assert_eq!(order.table_number, "7");
        assert_eq!(order.total, Decimal::from(150));
        assert_eq!(session.last_order.as_ref(), Some(&order));
    }

    #[test]
    fn test_blank_table_ignored() {
        let mut session = OrderSession::new(1, 10);
        assert!(!session.set_table("   "));
        assert!(session.table_number.is_none());
    }
}
