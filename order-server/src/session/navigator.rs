//! Category navigator
//!
//! Steps through the menu one category at a time. Moving past either end is
//! a silent no-op.

use shared::{Category, Menu};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryNavigator {
    index: usize,
    count: usize,
}

impl CategoryNavigator {
    /// Start at the first of `count` categories
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }

    /// Move back one category; returns whether the index changed
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one category; returns whether the index changed
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// The category currently shown
    pub fn current<'m>(&self, menu: &'m Menu) -> Option<&'m Category> {
        menu.category(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_clamped_at_start() {
        let mut nav = CategoryNavigator::new(3);
        assert!(!nav.has_previous());
        assert!(!nav.previous());
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_next_clamped_at_end() {
        let mut nav = CategoryNavigator::new(3);
        assert!(nav.next());
        assert!(nav.next());
        assert_eq!(nav.index(), 2);
        assert!(!nav.has_next());

        assert!(!nav.next());
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_round_trip() {
        let mut nav = CategoryNavigator::new(2);
        nav.next();
        nav.previous();
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_single_category() {
        let mut nav = CategoryNavigator::new(1);
        assert!(!nav.has_previous());
        assert!(!nav.has_next());
        nav.next();
        nav.previous();
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_current_category() {
        let menu = Menu::from_json_str(
            r#"{"Drinks": [{"id": 1, "name": "Kopi", "price": 3}], "Food": []}"#,
        )
        .unwrap();
        let mut nav = CategoryNavigator::new(menu.len());
        assert_eq!(nav.current(&menu).unwrap().name, "Drinks");
        nav.next();
        assert_eq!(nav.current(&menu).unwrap().name, "Food");
    }
}
