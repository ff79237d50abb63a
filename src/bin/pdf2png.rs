//! CLI binary for pdf2png.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `RenderConfig` and prints the written paths.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2png::{
    inspect, render, ProgressCallback, RenderConfig, RenderProgressCallback, MAX_DPI, MIN_DPI,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and per-page log
/// lines using [indicatif]. Pages arrive strictly in order.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set dynamically
    /// by `on_render_start` (called once the document is open).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_render_start

        // Initial style: spinner only (no counter until we know the total).
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }

    /// Switch to the full progress-bar style once we know `total`.
    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  \
             ⏱ {elapsed_precise}  ETA {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Rendering");
        self.bar.reset_eta();
    }
}

impl RenderProgressCallback for CliProgressCallback {
    fn on_render_start(&self, total_pages: usize) {
        self.activate_bar(total_pages);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Rendering {total_pages} pages…"))
        ));
    }

    fn on_page_rendered(&self, page_num: usize, total: usize, width: u32, height: u32) {
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            green("✓"),
            page_num,
            total,
            dim(&format!("{width}x{height} px")),
        ));
        self.bar.inc(1);
    }

    fn on_render_complete(&self, _total_pages: usize, rendered: usize) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {} pages rendered",
            green("✔"),
            bold(&rendered.to_string())
        );
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (PNGs land in ./out_images)
  pdf2png document.pdf

  # Choose output directory and resolution
  pdf2png document.pdf -o pages/ --dpi 150

  # Structured JSON result (paths, dimensions, stats)
  pdf2png --json document.pdf > result.json

  # Inspect PDF metadata, no rendering
  pdf2png --inspect-only document.pdf

OUTPUT NAMING:
  One PNG per page, RGB without alpha, named after the source file:
    report.pdf  →  report_page_001.png, report_page_002.png, …
  Existing files with the same names are overwritten.

ENVIRONMENT VARIABLES:
  PDF2PNG_DPI         Default rendering DPI
  PDF2PNG_OUTPUT_DIR  Default output directory

SETUP:
  Rendering is delegated to the pdfium shared library, resolved by
  pdfium-render at startup. Install libpdfium system-wide or point
  LD_LIBRARY_PATH / DYLD_LIBRARY_PATH at an existing copy.
"#;

/// Render each page of a PDF to a PNG image.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2png",
    version,
    about = "Render each page of a PDF document to a PNG image",
    long_about = "Render each page of a PDF document to a PNG image at a configurable DPI. \
Output files are named {stem}_page_NNN.png in page order; the pdfium engine does the \
rasterisation.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    input: PathBuf,

    /// Directory the PNG files are written into (created if missing).
    #[arg(short, long, env = "PDF2PNG_OUTPUT_DIR", default_value = "out_images")]
    output_dir: PathBuf,

    /// Rendering DPI (1–1200).
    #[arg(long, env = "PDF2PNG_DPI", default_value_t = 300,
          value_parser = clap::value_parser!(u32).range(MIN_DPI as i64..=MAX_DPI as i64))]
    dpi: u32,

    /// Output the structured result (paths, dimensions, stats) as JSON.
    #[arg(long, env = "PDF2PNG_JSON")]
    json: bool,

    /// Print PDF metadata only, no rendering.
    #[arg(long)]
    inspect_only: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDF2PNG_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2PNG_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the written paths.
    #[arg(short, long, env = "PDF2PNG_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta = inspect(&cli.input).await.context("Failed to inspect PDF")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialise metadata")?
            );
        } else {
            println!("File:         {}", cli.input.display());
            if let Some(ref t) = meta.title {
                println!("Title:        {}", t);
            }
            if let Some(ref a) = meta.author {
                println!("Author:       {}", a);
            }
            if let Some(ref s) = meta.subject {
                println!("Subject:      {}", s);
            }
            println!("Pages:        {}", meta.page_count);
            println!("PDF Version:  {}", meta.pdf_version);
            if let Some(ref p) = meta.producer {
                println!("Producer:     {}", p);
            }
            if let Some(ref c) = meta.creator {
                println!("Creator:      {}", c);
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = RenderConfig::builder().dpi(cli.dpi);
    if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        builder = builder.progress(cb as ProgressCallback);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run rendering ────────────────────────────────────────────────────
    let output = render(&cli.input, &cli.output_dir, &config)
        .await
        .context("Rendering failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for page in &output.pages {
            writeln!(handle, "{}", page.path.display()).context("Failed to write to stdout")?;
        }
    }

    // Summary (the callback already printed the final green tick).
    if !cli.quiet && !cli.json {
        eprintln!(
            "   {} pages  {}  {}ms  →  {}",
            dim(&output.stats.rendered_pages.to_string()),
            dim(&format!("{} bytes", output.stats.output_bytes)),
            output.stats.total_duration_ms,
            bold(&cli.output_dir.display().to_string()),
        );
    }

    Ok(())
}
