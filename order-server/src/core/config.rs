use std::path::PathBuf;

use shared::MAX_QUANTITY;

/// 服务器配置 - 点单页面的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量 (或 `.env` 文件) 覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8501 | HTTP 服务端口 |
/// | MENU_PATH | menu.json | 菜单文件 |
/// | OWNER_WHATSAPP_NUMBER | (无) | 店主 WhatsApp 号码，未设置时禁用点单 |
/// | RESTAURANT_NAME | The Kopi Spot | 页面标题、收据落款 |
/// | MAX_QUANTITY | 10 | 单个菜品的最大数量 |
/// | SESSION_TTL_SECS | 7200 | 会话空闲过期时间 (秒) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// OWNER_WHATSAPP_NUMBER=60123456789 MENU_PATH=./menu.json cargo run -p order-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub menu_path: PathBuf,
    /// 店主号码 (国际格式，不带 `+`)
    pub owner_whatsapp_number: Option<String>,
    pub restaurant_name: String,
    pub max_quantity: u32,
    pub session_ttl_secs: u64,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8501),
            menu_path: std::env::var("MENU_PATH")
                .unwrap_or_else(|_| "menu.json".into())
                .into(),
            owner_whatsapp_number: std::env::var("OWNER_WHATSAPP_NUMBER")
                .ok()
                .and_then(|n| normalize_phone_number(&n)),
            restaurant_name: std::env::var("RESTAURANT_NAME")
                .unwrap_or_else(|_| "The Kopi Spot".into()),
            max_quantity: std::env::var("MAX_QUANTITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(MAX_QUANTITY),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7200),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用指定的菜单和店主号码覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(menu_path: impl Into<PathBuf>, owner: Option<&str>) -> Self {
        let mut config = Self::from_env();
        config.menu_path = menu_path.into();
        config.owner_whatsapp_number = owner.and_then(normalize_phone_number);
        config
    }

    /// 是否可以点单 (已配置店主号码)
    pub fn ordering_enabled(&self) -> bool {
        self.owner_whatsapp_number.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// 去掉 `+`、空格和连字符；结果为空时视为未配置
fn normalize_phone_number(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '+' | ' ' | '-'))
        .collect();
    (!digits.is_empty()).then_some(digits)
}
