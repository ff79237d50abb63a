//! Input validation: make sure the source path is a readable PDF.
//!
//! pdfium aborts with an opaque error (or worse, a crash on some builds)
//! when handed a non-PDF file, so we check the `%PDF` magic bytes up front
//! and give callers a typed, actionable error instead. Validation happens
//! before the output directory is created, so a bad input never leaves an
//! empty directory behind.

use crate::error::Pdf2PngError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate a source path: it must exist, be readable, and start with `%PDF`.
pub fn validate_pdf_path(path_str: impl AsRef<Path>) -> Result<PathBuf, Pdf2PngError> {
    let path = path_str.as_ref().to_path_buf();

    if !path.exists() {
        return Err(Pdf2PngError::FileNotFound { path });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(&path) {
        Ok(mut f) => {
            // Verify PDF magic bytes
            use std::io::Read;
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2PngError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2PngError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2PngError::FileNotFound { path });
        }
    }

    debug!("Validated source PDF: {}", path.display());
    Ok(path)
}

/// Filename for a page image: `{stem}_page_{NNN}.png`, 1-indexed,
/// zero-padded to three digits so lexical order matches page order.
pub fn page_filename(stem: &str, page_num: usize) -> String {
    format!("{stem}_page_{page_num:03}.png")
}

/// Filename stem of the source document, used as the output prefix.
pub fn source_stem(pdf_path: &Path) -> String {
    pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_file_not_found() {
        let err = validate_pdf_path("/definitely/not/a/real/file.pdf").unwrap_err();
        assert!(matches!(err, Pdf2PngError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_content_is_rejected_with_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"hello world")
            .unwrap();

        let err = validate_pdf_path(&path).unwrap_err();
        match err {
            Pdf2PngError::NotAPdf { magic, .. } => assert_eq!(&magic, b"hell"),
            other => panic!("expected NotAPdf, got: {other}"),
        }
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("real.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.4\n%rest of the document")
            .unwrap();

        let resolved = validate_pdf_path(&path).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn tiny_file_under_four_bytes_is_accepted_for_pdfium_to_judge() {
        // read_exact fails on < 4 bytes; the magic check is skipped and the
        // file is left for pdfium to reject as corrupt.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.pdf");
        std::fs::File::create(&path).unwrap().write_all(b"%P").unwrap();
        assert!(validate_pdf_path(&path).is_ok());
    }

    #[test]
    fn page_filename_is_zero_padded_and_one_indexed() {
        assert_eq!(page_filename("report", 1), "report_page_001.png");
        assert_eq!(page_filename("report", 42), "report_page_042.png");
        assert_eq!(page_filename("report", 123), "report_page_123.png");
        // Beyond 999 the number keeps growing rather than truncating.
        assert_eq!(page_filename("report", 1000), "report_page_1000.png");
    }

    #[test]
    fn source_stem_strips_extension_and_directories() {
        assert_eq!(source_stem(Path::new("/tmp/docs/My Report.pdf")), "My Report");
        assert_eq!(source_stem(Path::new("plain.pdf")), "plain");
        assert_eq!(source_stem(Path::new("no_extension")), "no_extension");
    }
}
