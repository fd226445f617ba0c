//! # kopi-qr
//!
//! Batch generator for the per-table QR codes stuck on each table.
//!
//! Every code encodes the ordering page URL for one table
//! (`{base_url}/?table={n}`, see [`shared::table_url`]) and is written to
//! `{out_dir}/table_{n}.png`. Re-running overwrites the files with identical
//! content.
//!
//! ## Example
//!
//! ```ignore
//! use kopi_qr::generate_qr_for_tables;
//!
//! let report = generate_qr_for_tables("https://kopi.example.com", 10, "qr_codes".as_ref())?;
//! assert!(report.is_success());
//! ```

mod error;
mod generator;

pub use error::{QrError, QrResult};
pub use generator::{
    DEFAULT_BASE_URL, DEFAULT_NUM_TABLES, DEFAULT_QR_DIR, GenerationReport,
    generate_qr_for_tables, qr_file_name, render_table_qr,
};
