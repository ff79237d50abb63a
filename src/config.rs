//! Configuration for PDF-to-PNG rendering.
//!
//! All behaviour is controlled through [`RenderConfig`], built via its
//! [`RenderConfigBuilder`]. The knob surface is deliberately tiny — DPI and
//! an optional progress observer — but the builder keeps validation in one
//! place and leaves room to grow without breaking callers.

use crate::error::Pdf2PngError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Minimum accepted rendering DPI.
///
/// Values below 72 downscale relative to PDF point space (useful for
/// thumbnails), so any positive DPI is accepted; only zero is refused.
pub const MIN_DPI: u32 = 1;

/// Maximum accepted rendering DPI.
///
/// 1200 DPI turns a US-Letter page into a 10,200 × 13,200 px bitmap
/// (~400 MB of RGBA pixels inside pdfium). Anything beyond that is almost
/// certainly a unit mistake, so the builder refuses it.
pub const MAX_DPI: u32 = 1200;

/// Configuration for a PDF-to-PNG rendering run.
///
/// Built via [`RenderConfig::builder()`] or [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2png::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .dpi(150)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct RenderConfig {
    /// Rendering DPI used when rasterising each page. Range: 1–1200. Default: 300.
    ///
    /// PDF coordinates are expressed in points at 72 per inch, so the pixel
    /// size of each output image is `ceil(page_points * dpi / 72)` per axis.
    /// 300 DPI is print quality; drop to 150 for previews or below 72 for
    /// thumbnails, raise to 600 for archival scans of small-font documents.
    pub dpi: u32,

    /// Optional per-page progress observer. Default: none.
    pub progress: Option<ProgressCallback>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            progress: None,
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("dpi", &self.dpi)
            .field(
                "progress",
                &self.progress.as_ref().map(|_| "<dyn RenderProgressCallback>"),
            )
            .finish()
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }

    /// Uniform scale factor mapping PDF points to pixels at this DPI.
    pub fn scale_factor(&self) -> f32 {
        self.dpi as f32 / 72.0
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn progress(mut self, cb: ProgressCallback) -> Self {
        self.config.progress = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenderConfig, Pdf2PngError> {
        let c = &self.config;
        if c.dpi < MIN_DPI || c.dpi > MAX_DPI {
            return Err(Pdf2PngError::InvalidConfig(format!(
                "DPI must be {MIN_DPI}–{MAX_DPI}, got {}",
                c.dpi
            )));
        }
        Ok(self.config)
    }
}
