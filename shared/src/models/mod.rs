//! Domain models
//!
//! - [`menu`] - 菜单 (启动时加载，只读)
//! - [`cart`] - 会话购物车
//! - [`order`] - 提交时生成的订单快照

pub mod cart;
pub mod menu;
pub mod order;

pub use cart::{Cart, CartLine, MAX_QUANTITY, display_amount};
pub use menu::{Category, ItemId, Menu, MenuItem};
pub use order::Order;
