//! Error types for the pdf2png library.
//!
//! Every failure here is fatal: there is no per-page recovery or retry.
//! A page that fails to render aborts the run, and whatever pages were
//! already written stay on disk (no cleanup). Callers that want partial
//! salvage can inspect the output directory themselves.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2png library.
#[derive(Debug, Error)]
pub enum Pdf2PngError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// pdfium returned an error fetching or rasterising a specific page.
    #[error("Rendering failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create the output directory (or one of its parents).
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not encode or write a page image to disk.
    #[error("Failed to write image '{path}': {detail}")]
    ImageWriteFailed { path: PathBuf, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_names_path() {
        let e = Pdf2PngError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert!(e.to_string().contains("/tmp/missing.pdf"));
    }

    #[test]
    fn not_a_pdf_shows_magic_bytes() {
        let e = Pdf2PngError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"hell",
        };
        let msg = e.to_string();
        assert!(msg.contains("notes.txt"), "got: {msg}");
        assert!(msg.contains("104"), "magic bytes should appear, got: {msg}");
    }

    #[test]
    fn render_failed_is_one_indexed_in_message() {
        let e = Pdf2PngError::RenderFailed {
            page: 3,
            detail: "bitmap allocation failed".into(),
        };
        assert!(e.to_string().contains("page 3"));
    }

    #[test]
    fn output_dir_failed_carries_source() {
        use std::error::Error as _;
        let e = Pdf2PngError::OutputDirFailed {
            path: PathBuf::from("/proc/out"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("/proc/out"));
    }
}
