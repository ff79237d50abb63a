//! # pdf2png
//!
//! Render each page of a PDF document to a PNG image at a configurable DPI.
//!
//! ## What this crate does
//!
//! One thing: open a PDF, rasterise every page through the pdfium engine at
//! `dpi / 72` scale, and write one RGB PNG per page into an output directory
//! with a deterministic naming scheme (`{stem}_page_001.png`,
//! `{stem}_page_002.png`, …). The ordered list of written paths comes back
//! in the result, one entry per page.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input   validate the source path and PDF magic bytes
//!  ├─ 2. Render  rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  └─ 3. Encode  bitmap → RGB PNG file on disk
//! ```
//!
//! Pages are processed strictly in order on a single blocking thread: the
//! pdfium document handle is not safe for concurrent access, and the output
//! must match page order anyway. The handle is scoped to the render call and
//! released on every exit path, errors included.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2png::{render, RenderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::default(); // 300 DPI
//!     let output = render("document.pdf", "out_images", &config).await?;
//!     for page in &output.pages {
//!         println!("{}", page.path.display());
//!     }
//!     eprintln!("{} pages in {}ms",
//!         output.stats.rendered_pages,
//!         output.stats.total_duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2png` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2png = { version = "0.3", default-features = false }
//! ```
//!
//! ## The pdfium engine
//!
//! Rendering is delegated entirely to pdfium via the `pdfium-render`
//! bindings. The shared library is resolved by `pdfium-render` at startup;
//! point it at an existing copy with `LD_LIBRARY_PATH` /
//! `DYLD_LIBRARY_PATH` if it is not installed system-wide.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder, MAX_DPI, MIN_DPI};
pub use convert::{inspect, render, render_sync};
pub use error::Pdf2PngError;
pub use output::{DocumentMetadata, PageImage, RenderOutput, RenderStats};
pub use progress::{NoopProgressCallback, ProgressCallback, RenderProgressCallback};
