//! Output types: what a rendering run produced.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One page rendered and written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageImage {
    /// 1-indexed page number, matching the `_page_NNN` filename suffix.
    pub page_num: usize,
    /// Path of the written PNG file.
    pub path: PathBuf,
    /// Pixel width of the written image.
    pub width: u32,
    /// Pixel height of the written image.
    pub height: u32,
    /// Size of the PNG file in bytes.
    pub bytes: u64,
}

/// Timing and volume statistics for a rendering run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Pages rendered and written (equals `total_pages` on success).
    pub rendered_pages: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub total_duration_ms: u64,
    /// Time spent rasterising and writing pages, in milliseconds.
    pub render_duration_ms: u64,
    /// Total bytes written across all PNG files.
    pub output_bytes: u64,
}

/// Document-level metadata read from the PDF's info dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    /// Number of pages in the document.
    pub page_count: usize,
    /// PDF specification version, e.g. "Pdf1_7".
    pub pdf_version: String,
}

/// The result of a full rendering run.
///
/// `pages` is ordered by page number and its length always equals the
/// document's page count — a zero-page document yields an empty vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// One entry per page, in page order.
    pub pages: Vec<PageImage>,
    /// Metadata of the source document.
    pub metadata: DocumentMetadata,
    /// Timing and volume statistics.
    pub stats: RenderStats,
}

impl RenderOutput {
    /// The ordered list of written file paths, one per page.
    pub fn paths(&self) -> Vec<&Path> {
        self.pages.iter().map(|p| p.path.as_path()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> RenderOutput {
        RenderOutput {
            pages: vec![
                PageImage {
                    page_num: 1,
                    path: PathBuf::from("out/doc_page_001.png"),
                    width: 2550,
                    height: 3300,
                    bytes: 120_000,
                },
                PageImage {
                    page_num: 2,
                    path: PathBuf::from("out/doc_page_002.png"),
                    width: 2550,
                    height: 3300,
                    bytes: 98_000,
                },
            ],
            metadata: DocumentMetadata {
                title: Some("Sample".into()),
                author: None,
                subject: None,
                creator: None,
                producer: None,
                creation_date: None,
                modification_date: None,
                page_count: 2,
                pdf_version: "Pdf1_7".into(),
            },
            stats: RenderStats {
                total_pages: 2,
                rendered_pages: 2,
                total_duration_ms: 840,
                render_duration_ms: 790,
                output_bytes: 218_000,
            },
        }
    }

    #[test]
    fn paths_preserve_page_order() {
        let out = sample_output();
        let paths = out.paths();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].to_string_lossy().ends_with("doc_page_001.png"));
        assert!(paths[1].to_string_lossy().ends_with("doc_page_002.png"));
    }

    #[test]
    fn output_round_trips_through_json() {
        let out = sample_output();
        let json = serde_json::to_string_pretty(&out).expect("serialise");
        let back: RenderOutput = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back.pages.len(), out.pages.len());
        assert_eq!(back.stats.total_pages, out.stats.total_pages);
        assert_eq!(back.metadata.page_count, out.metadata.page_count);
    }
}
