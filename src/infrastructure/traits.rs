//! I/O boundary traits for testability
//!
//! These traits abstract drawing, filesystem access and external commands,
//! allowing services to be tested with mock implementations.

use std::io;
use std::path::Path;
use std::process::Output;

/// A raster surface that circles and labels are drawn onto.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Draw a circle outline centred at (`x`, `y`), in pixels.
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Draw `text` with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, x: f64, y: f64, text: &str);

    /// Persist the canvas to a raster file.
    fn save(&self, path: &Path) -> io::Result<()>;
}

/// Creates canvases; lets the renderer size a canvas before drawing.
pub trait CanvasFactory: Send + Sync {
    fn new_canvas(&self, width: u32, height: u32) -> Box<dyn Canvas>;

    /// Width in pixels that `text` occupies when drawn.
    fn text_width(&self, text: &str) -> u32;

    /// Height in pixels of one line of text.
    fn text_height(&self) -> u32;
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments.
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd).args(args).output()
    }
}
