//! Top-level entry points: validate the input, run the pipeline, collect stats.

use crate::config::RenderConfig;
use crate::error::Pdf2PngError;
use crate::output::{DocumentMetadata, RenderOutput, RenderStats};
use crate::pipeline::{input, render};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Render every page of a PDF file to a PNG image in `out_dir`.
///
/// This is the primary entry point for the library. The output directory
/// (and any missing parents) is created after the source validates; existing
/// files with the same names are silently overwritten.
///
/// # Arguments
/// * `input`   — Path to a local PDF file
/// * `out_dir` — Directory the PNG files are written into
/// * `config`  — Rendering configuration (DPI, progress observer)
///
/// # Returns
/// `Ok(RenderOutput)` with one [`crate::output::PageImage`] per page, in
/// page order. A zero-page document yields an empty page list — that is a
/// valid, non-error outcome.
///
/// # Errors
/// - [`Pdf2PngError::FileNotFound`] / [`Pdf2PngError::NotAPdf`] before the
///   output directory is touched
/// - [`Pdf2PngError::CorruptPdf`] if pdfium cannot parse the document
/// - [`Pdf2PngError::RenderFailed`] / [`Pdf2PngError::ImageWriteFailed`] on
///   the first failing page; already-written pages stay on disk
pub async fn render(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, Pdf2PngError> {
    let total_start = Instant::now();

    // ── Step 1: Validate input (before any output-side effect) ──────────
    let pdf_path = input::validate_pdf_path(input.as_ref())?;
    info!("Starting render: {} @ {} DPI", pdf_path.display(), config.dpi);

    // ── Step 2: Rasterise and write all pages ───────────────────────────
    let (pages, metadata, render_duration_ms) =
        render::render_document(&pdf_path, out_dir.as_ref(), config).await?;

    // ── Step 3: Compute stats ───────────────────────────────────────────
    let stats = RenderStats {
        total_pages: metadata.page_count,
        rendered_pages: pages.len(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        render_duration_ms,
        output_bytes: pages.iter().map(|p| p.bytes).sum(),
    };

    info!(
        "Render complete: {}/{} pages, {} bytes, {}ms total",
        stats.rendered_pages, stats.total_pages, stats.output_bytes, stats.total_duration_ms
    );

    Ok(RenderOutput {
        pages,
        metadata,
        stats,
    })
}

/// Synchronous wrapper around [`render`].
///
/// Creates a temporary tokio runtime internally.
pub fn render_sync(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, Pdf2PngError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2PngError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(render(input, out_dir, config))
}

/// Extract PDF metadata without rendering anything.
pub async fn inspect(input: impl AsRef<Path>) -> Result<DocumentMetadata, Pdf2PngError> {
    let pdf_path = input::validate_pdf_path(input.as_ref())?;
    render::extract_metadata(&pdf_path).await
}
