//! Per-table QR code generation

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use qrcode::QrCode;
use shared::table_url;

use crate::error::{QrError, QrResult};

pub const DEFAULT_NUM_TABLES: u32 = 10;
pub const DEFAULT_BASE_URL: &str = "http://localhost:8501";
pub const DEFAULT_QR_DIR: &str = "qr_codes";

/// Pixels per QR module
const MODULE_SIZE: u32 = 10;

/// Outcome of one batch run
///
/// A failing table does not stop the batch; it is recorded here instead.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(u32, QrError)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// File name for a table's code
pub fn qr_file_name(table: u32) -> String {
    format!("table_{}.png", table)
}

/// Render a URL as a black-on-white QR raster (with quiet zone)
pub fn render_table_qr(url: &str) -> QrResult<GrayImage> {
    let code = QrCode::new(url.as_bytes())?;
    Ok(code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .build())
}

/// Generate `table_1.png` … `table_{num_tables}.png` under `out_dir`
///
/// Only directory creation aborts the run. Per-table failures are logged,
/// collected in the report, and the remaining tables are still generated.
pub fn generate_qr_for_tables(
    base_url: &str,
    num_tables: u32,
    out_dir: &Path,
) -> QrResult<GenerationReport> {
    fs::create_dir_all(out_dir).map_err(|source| QrError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = GenerationReport::default();
    for table in 1..=num_tables {
        let url = table_url(base_url, table);
        let path = out_dir.join(qr_file_name(table));

        match write_table_qr(&url, &path) {
            Ok(()) => {
                tracing::info!(table, url = %url, path = %path.display(), "QR generated");
                report.written.push(path);
            }
            Err(e) => {
                tracing::error!(table, url = %url, error = %e, "QR generation failed");
                report.failed.push((table, e));
            }
        }
    }

    Ok(report)
}

fn write_table_qr(url: &str, path: &Path) -> QrResult<()> {
    render_table_qr(url)?.save(path)?;
    Ok(())
}
