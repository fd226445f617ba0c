//! # kopi-pdf
//!
//! Minimal single-purpose PDF writer - low-level page building only.
//!
//! ## Scope
//!
//! This crate handles HOW to put text on a page:
//! - PDF object/xref serialization (PDF 1.4)
//! - The three built-in Helvetica faces with WinAnsi encoding
//! - Cells, wrapped paragraphs and filled rectangles in millimetres
//! - Automatic page breaks at the bottom margin
//!
//! Business logic (WHAT to print) stays in application code:
//! - Customer receipt layout → order-server
//!
//! ## Example
//!
//! ```ignore
//! use kopi_pdf::{Align, Font, PdfBuilder, Rgb};
//!
//! let mut pdf = PdfBuilder::new();
//! pdf.font(Font::Bold, 18.0);
//! pdf.text_color(Rgb(0, 102, 204));
//! pdf.cell_ln(0.0, 20.0, "Payment Receipt", Align::Center);
//! pdf.font(Font::Regular, 12.0);
//! pdf.multi_cell(10.0, "- 2 x Kopi O @ Rs. 120");
//!
//! let bytes = pdf.build();
//! ```

mod builder;
mod encoding;
mod metrics;

// Re-exports
pub use builder::{Align, PdfBuilder, Rgb};
pub use encoding::{escape_string, to_win_ansi};
pub use metrics::{Font, text_width};
