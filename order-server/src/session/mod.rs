//! 会话模块 - 每位顾客独立的点单状态
//!
//! - [`store`] - 会话存储 (DashMap，按 cookie 中的 UUID 索引)
//! - [`state`] - 单个会话的状态 (桌号、分类、购物车、最近订单)
//! - [`navigator`] - 分类翻页
//! - [`controls`] - 菜品勾选框/数量输入框的状态
//! - [`middleware`] - 解析或创建会话 cookie

pub mod controls;
pub mod middleware;
pub mod navigator;
pub mod state;
pub mod store;

pub use controls::{ItemAction, ItemControl, ItemsForm};
pub use middleware::{SESSION_COOKIE, require_session};
pub use navigator::CategoryNavigator;
pub use state::{Confirmation, Notice, OrderSession, TABLE_REQUIRED};
pub use store::{SessionDefaults, SessionId, SessionStore};
