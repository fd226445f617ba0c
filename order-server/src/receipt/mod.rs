//! 收据模块
//!
//! - [`renderer`] - 把订单渲染成 PDF (布局在这里，PDF 细节在 kopi-pdf)
//!
//! 收据在下载时根据会话里最近一次提交的订单渲染，以 `receipt.pdf` 附件形式返回。

pub mod renderer;

use axum::response::{IntoResponse, Response};
use http::header;

pub use renderer::ReceiptRenderer;

pub const RECEIPT_FILE_NAME: &str = "receipt.pdf";
pub const RECEIPT_MIME: &str = "application/pdf";

/// Wrap PDF bytes as a `receipt.pdf` download
pub fn receipt_response(pdf: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, RECEIPT_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", RECEIPT_FILE_NAME),
            ),
        ],
        pdf,
    )
        .into_response()
}
