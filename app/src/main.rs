//! Math Worksheet - generates arithmetic practice worksheets as PDF
//!
//! Usage: `math-worksheet [config.json]`
//!
//! Reads the optional JSON configuration, generates the requested pages,
//! renders each page to a bitmap, and writes the composed PDF. Set `RUST_LOG`
//! to control log output.

mod config;
mod glyphs;
mod raster;

use anyhow::{Context, Result};
use config::AppConfig;
use pdf_export::{DocumentExporter, ExportOptions};
use raster::BitmapRasterizer;
use std::path::PathBuf;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worksheet_model::{RngSource, WorksheetSession};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path).await?,
        None => AppConfig::default(),
    };
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Generating {} page(s) of {} with {} problems each",
        config.page_count,
        config.operator.name(),
        config.problem_count
    );

    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut session = WorksheetSession::new(
        config.operator,
        config.problem_count,
        config.worksheet,
        &mut rng,
    )?;
    for _ in 1..config.page_count {
        session.add_page(&mut rng)?;
    }

    let rasterizer = BitmapRasterizer::new(session.pages(), config.worksheet.grid, &config.page);
    let options = ExportOptions::new()
        .with_title(session.title())
        .with_subject(format!("{} problems per page", config.problem_count))
        .with_compression(config.compress);
    let exporter = DocumentExporter::new(config.page.clone(), options);

    // Ctrl-C stops the export between pages
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, cancelling export");
            let _ = cancel_tx.send(true);
        }
    });

    let output = exporter
        .export_with_cancel(session.pages(), &rasterizer, Some(&cancel_rx))
        .await?;

    tokio::fs::write(&config.output, &output.bytes)
        .await
        .with_context(|| format!("Failed to write {:?}", config.output))?;

    tracing::info!(
        "Wrote {} page(s) to {:?} ({} bytes, {} warnings)",
        output.page_count,
        config.output,
        output.bytes.len(),
        output.warnings.len()
    );

    Ok(())
}
