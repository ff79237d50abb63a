//! The rendering pipeline, split by stage:
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input   validate the source path and PDF magic bytes
//!  ├─ 2. Render  rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  └─ 3. Encode  bitmap → RGB PNG file on disk
//! ```

pub mod encode;
pub mod input;
pub mod render;
