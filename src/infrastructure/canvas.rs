//! PNG canvas backed by the `image` crate.

use std::io;
use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::infrastructure::font::{self, GLYPH_COLUMNS, GLYPH_ROWS, GLYPH_SPACING};
use crate::infrastructure::traits::{Canvas, CanvasFactory};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Black-on-white RGB canvas.
pub struct PngCanvas {
    image: RgbImage,
    text_scale: u32,
}

impl PngCanvas {
    pub fn new(width: u32, height: u32, text_scale: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
            text_scale: text_scale.max(1),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    fn plot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, INK);
        }
    }
}

impl Canvas for PngCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    // midpoint circle, one point per octant per step
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        let (cx, cy) = (x.round() as i64, y.round() as i64);
        let r = radius.round() as i64;
        if r <= 0 {
            self.plot(cx, cy);
            return;
        }
        let (mut dx, mut dy, mut err) = (r, 0i64, 1 - r);
        while dx >= dy {
            for (px, py) in [
                (dx, dy),
                (dy, dx),
                (-dy, dx),
                (-dx, dy),
                (-dx, -dy),
                (-dy, -dx),
                (dy, -dx),
                (dx, -dy),
            ] {
                self.plot(cx + px, cy + py);
            }
            dy += 1;
            if err < 0 {
                err += 2 * dy + 1;
            } else {
                dx -= 1;
                err += 2 * (dy - dx) + 1;
            }
        }
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        let scale = self.text_scale as i64;
        let advance = ((GLYPH_COLUMNS + GLYPH_SPACING) * self.text_scale) as i64;
        let (left, top) = (x.round() as i64, y.round() as i64);
        for (i, c) in text.chars().enumerate() {
            let origin = left + i as i64 * advance;
            for (col, row) in font::pixels(c) {
                for sx in 0..scale {
                    for sy in 0..scale {
                        self.plot(
                            origin + col as i64 * scale + sx,
                            top + row as i64 * scale + sy,
                        );
                    }
                }
            }
        }
    }

    fn save(&self, path: &Path) -> io::Result<()> {
        debug!("save: {}", path.display());
        self.image.save(path).map_err(io::Error::other)
    }
}

/// Creates [`PngCanvas`] instances with a fixed text scale.
#[derive(Debug, Clone)]
pub struct PngCanvasFactory {
    text_scale: u32,
}

impl PngCanvasFactory {
    pub fn new(text_scale: u32) -> Self {
        Self {
            text_scale: text_scale.max(1),
        }
    }
}

impl Default for PngCanvasFactory {
    fn default() -> Self {
        Self::new(2)
    }
}

impl CanvasFactory for PngCanvasFactory {
    fn new_canvas(&self, width: u32, height: u32) -> Box<dyn Canvas> {
        Box::new(PngCanvas::new(width, height, self.text_scale))
    }

    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * (GLYPH_COLUMNS + GLYPH_SPACING) * self.text_scale
    }

    fn text_height(&self) -> u32 {
        GLYPH_ROWS * self.text_scale
    }
}
