use std::sync::Arc;

use shared::{AppError, AppResult, Menu};

use crate::core::Config;
use crate::receipt::ReceiptRenderer;
use crate::session::{SessionDefaults, SessionStore};

/// 服务器状态 - 所有请求共享
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | menu | Arc<Menu> | 菜单，启动时加载一次 |
/// | sessions | SessionStore | 顾客会话 |
/// | receipts | ReceiptRenderer | 收据渲染器 |
///
/// Clone 只复制引用，不复制菜单和会话。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub menu: Arc<Menu>,
    pub sessions: SessionStore,
    pub receipts: ReceiptRenderer,
}

impl ServerState {
    pub fn new(config: Config, menu: Menu) -> Self {
        let sessions = SessionStore::new(SessionDefaults {
            category_count: menu.len(),
            max_quantity: config.max_quantity,
            ttl_secs: config.session_ttl_secs,
        });
        let receipts = ReceiptRenderer::new(config.restaurant_name.clone());
        Self {
            config,
            menu: Arc::new(menu),
            sessions,
            receipts,
        }
    }

    /// 加载菜单并创建状态
    ///
    /// 菜单文件缺失或格式错误时返回 `InputFile` 错误，服务不启动。
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let menu = Menu::from_path(&config.menu_path)?;
        if !config.ordering_enabled() {
            tracing::warn!("OWNER_WHATSAPP_NUMBER is not set, ordering is disabled");
        }
        Ok(Self::new(config.clone(), menu))
    }

    /// 店主号码；未配置时点单流程不可用
    pub fn owner_number(&self) -> AppResult<&str> {
        self.config
            .owner_whatsapp_number
            .as_deref()
            .ok_or_else(|| AppError::configuration("OWNER_WHATSAPP_NUMBER is not set"))
    }
}
