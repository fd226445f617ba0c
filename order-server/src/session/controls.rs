//! Item controls
//!
//! Each menu item on the page has a checkbox and a quantity box. Their state
//! is kept per item id so that a category re-renders exactly as the diner
//! left it.

use std::collections::HashMap;

use shared::{Category, ItemId};

/// Checkbox + quantity state of one menu item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemControl {
    pub selected: bool,
    pub quantity: u32,
}

/// What the diner asked for when submitting the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemAction {
    #[default]
    Update,
    Previous,
    Next,
}

/// Parsed item form for one category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsForm {
    pub action: ItemAction,
    pub controls: HashMap<ItemId, ItemControl>,
}

/// Form field name of an item's checkbox
pub fn checkbox_field(id: ItemId) -> String {
    format!("item-{}", id)
}

/// Form field name of an item's quantity box
pub fn quantity_field(id: ItemId) -> String {
    format!("qty-{}", id)
}

impl ItemsForm {
    /// Read the controls of `category`'s items out of submitted form pairs
    ///
    /// Unchecked checkboxes are absent from a form post, so a missing field
    /// means "not selected". Quantities that do not parse count as zero and
    /// are clamped to `max_quantity`.
    pub fn parse(fields: &[(String, String)], category: &Category, max_quantity: u32) -> Self {
        let action = match form_field(fields, "action") {
            Some("prev") => ItemAction::Previous,
            Some("next") => ItemAction::Next,
            _ => ItemAction::Update,
        };

        let controls = category
            .items
            .iter()
            .map(|item| {
                let selected = form_field(fields, &checkbox_field(item.id)).is_some();
                let quantity = form_field(fields, &quantity_field(item.id))
                    .and_then(|q| q.trim().parse::<u32>().ok())
                    .unwrap_or(0)
                    .min(max_quantity);
                (item.id, ItemControl { selected, quantity })
            })
            .collect();

        Self { action, controls }
    }

    /// Whether the post carries the controls of `category` at all
    ///
    /// Browsers always send number inputs, so the quantity boxes mark a post
    /// made from the category form. A post without them leaves the cart alone.
    pub fn is_present(fields: &[(String, String)], category: &Category) -> bool {
        category
            .items
            .iter()
            .any(|item| form_field(fields, &quantity_field(item.id)).is_some())
    }
}

/// First value of a form field
pub(crate) fn form_field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, v)| v.as_str())
}
