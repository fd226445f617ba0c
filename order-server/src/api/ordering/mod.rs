//! 点单页面路由
//!
//! 所有 POST 都以 303 跳回 GET / (post/redirect/get)，提示信息和提交结果只在下一次渲染时显示一次。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::core::ServerState;
use crate::session::require_session;

pub use handler::parse_order_date;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/table", post(handler::set_table))
        .route("/items", post(handler::update_items))
        .route("/order", post(handler::submit_order))
        .route("/receipt.pdf", get(handler::download_receipt))
        .layer(middleware::from_fn_with_state(state.clone(), require_session))
}
