//! Error types for the shared crate
//!
//! # 错误码规范
//!
//! | 代码 | 分类 | HTTP |
//! |------|------|------|
//! | E0000 | 成功 | 200 |
//! | E0002 | 验证失败 (姓名为空、购物车为空) | 400 |
//! | E0003 | 资源不存在 | 404 |
//! | E1001 | 配置缺失 (未设置店主号码) | 503 |
//! | E1002 | 菜单文件错误 | 500 |
//! | E9001 | 内部错误 | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Resource not found (404)
    NotFound,
    /// Required configuration is missing (503)
    Configuration,
    /// Menu file missing or malformed (500)
    InputFile,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Configuration => StatusCode::SERVICE_UNAVAILABLE,
            Self::InputFile => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::NotFound => "E0003",
            Self::Configuration => "E1001",
            Self::InputFile => "E1002",
            Self::Internal => "E9001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 应用错误枚举
///
/// 验证错误的消息直接展示给顾客，所以 `Validation` 的 Display 只输出消息本身。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置缺失，点单流程被禁用
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 提交时的输入验证失败
    #[error("{0}")]
    Validation(String),

    /// 菜单文件不存在或格式错误 (启动时致命)
    #[error("Menu file error: {0}")]
    InputFile(String),

    /// 资源不存在
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 内部错误
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn input_file(msg: impl Into<String>) -> Self {
        Self::InputFile(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration(_) => ErrorCode::Configuration,
            Self::Validation(_) => ErrorCode::Validation,
            Self::InputFile(_) => ErrorCode::InputFile,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// API 统一响应结构
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// 错误码 (E0000 表示成功)
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code().to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match &self {
            AppError::Internal(msg) | AppError::InputFile(msg) => {
                tracing::error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            AppError::Configuration(msg) => {
                tracing::warn!(error = %msg, "Request rejected by missing configuration");
                msg.clone()
            }
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
        };

        let body = Json(ApiResponse::<()> {
            code: code.code().to_string(),
            message,
            data: None,
        });

        (code.status_code(), body).into_response()
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = AppError::validation("Please enter your name.");
        assert_eq!(err.to_string(), "Please enter your name.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::configuration("x").into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
