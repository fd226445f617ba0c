//! Menu Model
//!
//! 菜单在启动时从 JSON 文件加载一次，之后只读。
//!
//! ```json
//! {
//!   "Coffee": [
//!     { "id": 1, "name": "Kopi O", "price": 120 },
//!     { "id": 2, "name": "Kopi Susu", "price": 150 }
//!   ],
//!   "Toast": [
//!     { "id": 10, "name": "Kaya Toast", "price": 90.5 }
//!   ]
//! }
//! ```
//!
//! 分类顺序即文件中键的顺序。

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AppError, AppResult};

/// Menu item identifier (unique across the whole menu file)
pub type ItemId = u32;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    /// JSON number in both directions (same shape as the menu file)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A named group of menu items, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The whole menu
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    categories: Vec<Category>,
}

impl Menu {
    /// Load and validate the menu file
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::input_file(format!("{}: {}", path.display(), e)))?;

        let menu = Self::from_json_str(&raw).map_err(|e| match e {
            AppError::InputFile(msg) => AppError::input_file(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            categories = menu.len(),
            items = menu.item_count(),
            "Menu loaded"
        );
        Ok(menu)
    }

    /// Parse a menu document
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let CategoryList(categories) =
            serde_json::from_str(raw).map_err(|e| AppError::input_file(e.to_string()))?;
        Self::from_categories(categories)
    }

    /// Build a menu, rejecting empty menus and duplicate item ids
    pub fn from_categories(categories: Vec<Category>) -> AppResult<Self> {
        if categories.is_empty() {
            return Err(AppError::input_file("menu has no categories"));
        }

        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(AppError::input_file(format!(
                    "duplicate category '{}'",
                    category.name
                )));
            }
            for item in &category.items {
                if !ids.insert(item.id) {
                    return Err(AppError::input_file(format!(
                        "duplicate item id {}",
                        item.id
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Number of categories (never zero)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Look up an item by id in any category
    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }
}

impl Serialize for Menu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

/// Categories in document order (serde_json maps are sorted otherwise)
struct CategoryList(Vec<Category>);

impl<'de> Deserialize<'de> for CategoryList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryListVisitor;

        impl<'de> Visitor<'de> for CategoryListVisitor {
            type Value = CategoryList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to item lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) = access.next_entry::<String, Vec<MenuItem>>()? {
                    categories.push(Category { name, items });
                }
                Ok(CategoryList(categories))
            }
        }

        deserializer.deserialize_map(CategoryListVisitor)
    }
}
