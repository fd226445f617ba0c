//! Menu API

use axum::{Json, Router, extract::State, routing::get};
use shared::{ApiResponse, Menu};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(get_menu))
}

/// GET /api/menu - 菜单 (分类顺序与文件一致)
pub async fn get_menu(State(state): State<ServerState>) -> Json<ApiResponse<Menu>> {
    Json(ApiResponse::success(Menu::clone(&state.menu)))
}
