use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kopi_qr::{DEFAULT_BASE_URL, DEFAULT_NUM_TABLES, DEFAULT_QR_DIR, generate_qr_for_tables};

/// Generate one ordering QR code per table
#[derive(Parser, Debug)]
#[command(name = "kopi-qr", author, version, about)]
struct Args {
    /// Number of tables; codes are generated for 1..=NUM_TABLES
    #[arg(default_value_t = DEFAULT_NUM_TABLES, value_parser = clap::value_parser!(u32).range(1..))]
    num_tables: u32,

    /// Public URL of the ordering page
    #[arg(long, env = "BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory the PNG files are written to
    #[arg(long, env = "QR_DIR", default_value = DEFAULT_QR_DIR)]
    out_dir: PathBuf,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<ExitCode> {
    // .env must be loaded before clap reads the env fallbacks
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.as_str().into()),
        )
        .with_target(false)
        .init();

    tracing::info!(
        tables = args.num_tables,
        base_url = %args.base_url,
        out_dir = %args.out_dir.display(),
        "Generating table QR codes"
    );

    let report = generate_qr_for_tables(&args.base_url, args.num_tables, &args.out_dir)?;

    if report.is_success() {
        tracing::info!(written = report.written.len(), "✅ All QR codes generated");
        Ok(ExitCode::SUCCESS)
    } else {
        let failed: Vec<u32> = report.failed.iter().map(|(table, _)| *table).collect();
        tracing::error!(
            written = report.written.len(),
            failed = ?failed,
            "❌ Some QR codes could not be generated"
        );
        Ok(ExitCode::FAILURE)
    }
}
