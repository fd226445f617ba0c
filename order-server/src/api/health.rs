//! 健康检查路由
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "ordering_enabled": true,
//!   "categories": 4,
//!   "active_sessions": 2
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    status: &'static str,
    version: &'static str,
    /// 是否已配置店主号码
    ordering_enabled: bool,
    categories: usize,
    active_sessions: usize,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ordering_enabled: state.config.ordering_enabled(),
        categories: state.menu.len(),
        active_sessions: state.sessions.len(),
    })
}
