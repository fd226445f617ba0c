//! HTTP 路由
//!
//! | 路径 | 方法 | 说明 | 会话 |
//! |------|------|------|------|
//! | / | GET | 点单页面 (`?table=` 可选) | 是 |
//! | /table | POST | 手动输入桌号 | 是 |
//! | /items | POST | 保存当前分类的勾选/数量，并按 `action` 翻页 | 是 |
//! | /order | POST | 提交姓名和日期，生成收据和 WhatsApp 链接 | 是 |
//! | /receipt.pdf | GET | 下载最近一次的收据 | 是 |
//! | /api/menu | GET | 菜单 JSON | 否 |
//! | /health | GET | 健康检查 | 否 |

pub mod health;
pub mod menu;
pub mod ordering;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no tower middleware)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // 点单页面 - 需要会话
        .merge(ordering::router(state))
        // 公共接口
        .merge(menu::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    // Router::layer 后添加的在外层：SetRequestId -> PropagateRequestId -> Trace -> 路由
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
