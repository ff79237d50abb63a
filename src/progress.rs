//! Progress-callback trait for per-page rendering events.
//!
//! Inject an [`Arc<dyn RenderProgressCallback>`] via
//! [`crate::config::RenderConfigBuilder::progress`] to receive real-time
//! events as the pipeline rasterises each page.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a channel, a database record, or a terminal progress bar
//! without the library knowing anything about how the host application
//! communicates. The trait is `Send + Sync` because rendering runs inside a
//! `tokio::task::spawn_blocking` thread, not on the caller's thread.

use std::sync::Arc;

/// Called by the rendering pipeline as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Pages are rendered strictly in order, so the
/// per-page methods are never invoked concurrently.
pub trait RenderProgressCallback: Send + Sync {
    /// Called once after the document is opened, before any page is rendered.
    fn on_render_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after a page's PNG has been written to disk.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages in the document
    /// * `width` / `height` — pixel dimensions of the written image
    fn on_page_rendered(&self, page_num: usize, total_pages: usize, width: u32, height: u32) {
        let _ = (page_num, total_pages, width, height);
    }

    /// Called once after the last page has been written.
    fn on_render_complete(&self, total_pages: usize, rendered: usize) {
        let _ = (total_pages, rendered);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl RenderProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::RenderConfig`].
pub type ProgressCallback = Arc<dyn RenderProgressCallback>;
