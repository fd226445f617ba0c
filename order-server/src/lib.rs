//! Kopi Order Server - 扫码点单页面
//!
//! # 架构概述
//!
//! 顾客扫描桌上的二维码 (`/?table=N`)，按分类浏览菜单、勾选菜品和数量，
//! 提交后下载 PDF 收据，并通过预填好的 WhatsApp 链接把订单发给店主。
//!
//! # 模块结构
//!
//! ```text
//! order-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── session/       # 会话存储、购物车控件、分类翻页
//! ├── page/          # HTML 页面渲染
//! ├── receipt/       # PDF 收据
//! ├── notify/        # WhatsApp 链接
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod core;
pub mod notify;
pub mod page;
pub mod receipt;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 `.env` 并初始化日志
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | 输出 JSON 格式日志 |
/// | LOG_DIR | (无) | 按天滚动的日志文件目录 |
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_JSON")
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false);
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());

    init_logger_with_file(&level, json, log_dir.as_deref())
}

pub fn print_banner() {
    println!(
        r#"
  _  __           _
 | |/ /___  _ __ (_)
 | ' // _ \| '_ \| |
 | . \ (_) | |_) | |
 |_|\_\___/| .__/|_|
           |_|   order server
    "#
    );
}
