//! PDF rasterisation: render every page to a PNG file via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async contexts.
//! `tokio::task::spawn_blocking` moves the work onto a dedicated thread pool
//! thread designed for blocking operations, preventing the Tokio worker
//! threads from stalling during CPU-heavy rendering.
//!
//! ## Scaling
//!
//! PDF pages are measured in points at 72 per inch. The target pixel size of
//! each page is `ceil(points * dpi / 72)` per axis — a uniform scale on both
//! axes, rounded up so a fractional point never loses a pixel row.

use crate::config::RenderConfig;
use crate::error::Pdf2PngError;
use crate::output::{DocumentMetadata, PageImage};
use crate::pipeline::{encode, input};
use pdfium_render::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Render every page of `pdf_path` into `out_dir` as
/// `{stem}_page_{NNN}.png` files.
///
/// This runs inside `spawn_blocking` since pdfium operations are CPU-bound.
///
/// # Returns
/// The ordered page images, the document metadata, and the time spent in the
/// render loop in milliseconds.
pub async fn render_document(
    pdf_path: &Path,
    out_dir: &Path,
    config: &RenderConfig,
) -> Result<(Vec<PageImage>, DocumentMetadata, u64), Pdf2PngError> {
    let path = pdf_path.to_path_buf();
    let out = out_dir.to_path_buf();
    let config = config.clone();

    tokio::task::spawn_blocking(move || render_document_blocking(&path, &out, &config))
        .await
        .map_err(|e| Pdf2PngError::Internal(format!("Render task panicked: {}", e)))?
}

/// Blocking implementation of document rendering.
///
/// The document handle is scoped to this function: pdfium resources are
/// released when it returns, on the error paths included.
fn render_document_blocking(
    pdf_path: &Path,
    out_dir: &Path,
    config: &RenderConfig,
) -> Result<(Vec<PageImage>, DocumentMetadata, u64), Pdf2PngError> {
    let pdfium = Pdfium::default();

    let document =
        pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| Pdf2PngError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: format!("{:?}", e),
            })?;

    let metadata = read_metadata(&document);
    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    // Only now that the document opened cleanly does the output directory
    // get created; a bad input never leaves an empty directory behind.
    std::fs::create_dir_all(out_dir).map_err(|e| Pdf2PngError::OutputDirFailed {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    // Progress starts only after the output directory exists, so a failed
    // directory creation never fires a start event with no completion.
    if let Some(ref cb) = config.progress {
        cb.on_render_start(total_pages);
    }

    let stem = input::source_stem(pdf_path);
    let scale = config.scale_factor();

    let mut results = Vec::with_capacity(total_pages);
    let render_start = Instant::now();

    for idx in 0..total_pages {
        let page_num = idx + 1;
        let page = pages
            .get(idx as u16)
            .map_err(|e| Pdf2PngError::RenderFailed {
                page: page_num,
                detail: format!("{:?}", e),
            })?;

        let target_width = (page.width().value * scale).ceil() as i32;
        let target_height = (page.height().value * scale).ceil() as i32;

        let render_config = PdfRenderConfig::new()
            .set_target_width(target_width)
            .set_target_height(target_height);

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| Pdf2PngError::RenderFailed {
                    page: page_num,
                    detail: format!("{:?}", e),
                })?;

        let image = bitmap.as_image();

        let out_path = out_dir.join(input::page_filename(&stem, page_num));
        let (width, height, bytes) = encode::write_png(&image, &out_path)?;
        debug!(
            "Rendered page {} → {}x{} px, {} bytes",
            page_num, width, height, bytes
        );

        if let Some(ref cb) = config.progress {
            cb.on_page_rendered(page_num, total_pages, width, height);
        }

        results.push(PageImage {
            page_num,
            path: out_path,
            width,
            height,
            bytes,
        });
    }

    let render_duration_ms = render_start.elapsed().as_millis() as u64;

    if let Some(ref cb) = config.progress {
        cb.on_render_complete(total_pages, results.len());
    }

    Ok((results, metadata, render_duration_ms))
}

/// Extract document metadata from a PDF without rendering pages.
pub async fn extract_metadata(pdf_path: &Path) -> Result<DocumentMetadata, Pdf2PngError> {
    let path = pdf_path.to_path_buf();

    tokio::task::spawn_blocking(move || extract_metadata_blocking(&path))
        .await
        .map_err(|e| Pdf2PngError::Internal(format!("Metadata task panicked: {}", e)))?
}

/// Blocking implementation of metadata extraction.
fn extract_metadata_blocking(pdf_path: &Path) -> Result<DocumentMetadata, Pdf2PngError> {
    let pdfium = Pdfium::default();

    let document =
        pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| Pdf2PngError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: format!("{:?}", e),
            })?;

    Ok(read_metadata(&document))
}

/// Read the standard info-dictionary tags from an open document.
fn read_metadata(document: &PdfDocument) -> DocumentMetadata {
    let metadata = document.metadata();
    let pages = document.pages();

    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    DocumentMetadata {
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        subject: get_meta(PdfDocumentMetadataTagType::Subject),
        creator: get_meta(PdfDocumentMetadataTagType::Creator),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        creation_date: get_meta(PdfDocumentMetadataTagType::CreationDate),
        modification_date: get_meta(PdfDocumentMetadataTagType::ModificationDate),
        page_count: pages.len() as usize,
        pdf_version: format!("{:?}", document.version()),
    }
}
