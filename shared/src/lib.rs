//! Shared types for the Kopi table ordering system
//!
//! Common types used by the ordering page and the QR generator:
//! menu and cart models, the unified error type, and the table URL shape
//! that ties a printed QR code to the ordering page.

pub mod error;
pub mod models;
pub mod table;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Cart, CartLine, Category, ItemId, MAX_QUANTITY, Menu, MenuItem, Order};
pub use table::{TABLE_QUERY_PARAM, table_url};
