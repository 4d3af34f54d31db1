//! Rendering of a level's configurations into raster images, and upload.
//!
//! Each configuration takes one row: its circles on the left, its canonical
//! text to the right. Rows are stacked top to bottom in discovery order and
//! continue on a new page once `render.max_height` is reached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{CircleGeometry, ConfigurationSet, DedupCollection};
use crate::infrastructure::traits::{CanvasFactory, CommandRunner, FileSystem};
use crate::infrastructure::InfraError;

/// Where a configuration's label is drawn, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One configuration, positioned on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub label: LabelPlacement,
    pub circles: Vec<CircleGeometry>,
}

/// Canvas size and content for one page of a level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub level: usize,
    /// 0-based; a level only spans several pages when it outgrows `render.max_height`
    pub page: usize,
    pub width: u32,
    pub height: u32,
    pub rows: Vec<RowLayout>,
}

/// Renders levels to image files and optionally copies them to a remote host.
pub struct RenderService {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    canvas: Arc<dyn CanvasFactory>,
    settings: Arc<Settings>,
}

impl RenderService {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        canvas: Arc<dyn CanvasFactory>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            cmd,
            canvas,
            settings,
        }
    }

    fn margin(&self) -> f64 {
        0.5 * self.settings.render.scale
    }

    fn row_gap(&self) -> f64 {
        1.5 * self.settings.render.scale
    }

    /// Half the pixel height a row needs: the taller of its circles and its label.
    fn half_height(&self, config: &ConfigurationSet) -> f64 {
        let text_height = f64::from(self.canvas.text_height());
        (config.height() / 2.0 * self.settings.render.scale).max(text_height / 2.0)
    }

    /// Pixel layout of `collection`, split into pages no taller than
    /// `render.max_height`. A single row taller than the limit gets a page of its own.
    pub fn layout(&self, collection: &DedupCollection) -> Vec<LevelLayout> {
        let max_height = f64::from(self.settings.render.max_height);
        let margin = self.margin();

        let mut pages: Vec<Vec<&ConfigurationSet>> = vec![Vec::new()];
        let mut used = margin;
        for config in collection {
            let row = 2.0 * self.half_height(config);
            let current = pages.len() - 1;
            if !pages[current].is_empty() && used + row + self.row_gap() > max_height {
                pages.push(Vec::new());
                used = margin;
            }
            let current = pages.len() - 1;
            pages[current].push(config);
            used += row + self.row_gap();
        }

        if pages.len() > 1 {
            warn!(
                "level {} split into {} pages (render.max_height = {})",
                collection.level(),
                pages.len(),
                self.settings.render.max_height
            );
        }
        pages
            .iter()
            .enumerate()
            .map(|(page, configs)| self.layout_page(collection.level(), page, configs))
            .collect()
    }

    fn layout_page(&self, level: usize, page: usize, configs: &[&ConfigurationSet]) -> LevelLayout {
        let render = &self.settings.render;
        let scale = render.scale;
        let margin = self.margin();
        let text_height = f64::from(self.canvas.text_height());

        let mut rows = Vec::with_capacity(configs.len());
        let mut offset_y = margin;
        let mut needed_width: f64 = 0.0;

        for config in configs {
            let half_height = self.half_height(config);
            offset_y += half_height;

            let circles = config
                .circles(0.0)
                .into_iter()
                .map(|c| {
                    CircleGeometry::new(c.x * scale + margin, c.y * scale + offset_y, c.radius * scale)
                })
                .collect();

            let text = config.canonical_text();
            let right_edge = margin + config.width() * scale;
            let label_x = f64::from(render.label_x).max(right_edge + scale);
            needed_width =
                needed_width.max(label_x + f64::from(self.canvas.text_width(&text)) + margin);

            rows.push(RowLayout {
                label: LabelPlacement {
                    x: label_x,
                    y: offset_y - text_height / 2.0,
                    text,
                },
                circles,
            });
            offset_y += half_height + self.row_gap();
        }

        LevelLayout {
            level,
            page,
            width: render.width.max(needed_width.ceil() as u32),
            height: render.height.max(offset_y.ceil() as u32),
            rows,
        }
    }

    /// Draw `collection` and save it; returns the image path of every page.
    #[instrument(skip(self, collection), fields(level = collection.level()))]
    pub fn render_level(&self, collection: &DedupCollection) -> ApplicationResult<Vec<PathBuf>> {
        info!("Create image for level {}", collection.level());
        let dir = self.settings.render.output_dir.as_path();
        if !dir.as_os_str().is_empty() && !self.fs.exists(dir) {
            self.fs
                .create_dir_all(dir)
                .with_path_context("create output directory", dir)?;
        }

        let mut paths = Vec::new();
        for layout in self.layout(collection) {
            let path = self.settings.page_path(layout.level, layout.page);
            let mut canvas = self.canvas.new_canvas(layout.width, layout.height);
            for row in &layout.rows {
                debug!("render_level: {}", row.label.text);
                canvas.draw_text(row.label.x, row.label.y, &row.label.text);
                for circle in &row.circles {
                    canvas.draw_circle(circle.x, circle.y, circle.radius);
                }
            }
            canvas
                .save(&path)
                .with_path_context("save image", &path)?;

            debug!(
                "render_level: {}x{} -> {}",
                canvas.width(),
                canvas.height(),
                path.display()
            );
            paths.push(path);
        }
        Ok(paths)
    }

    /// Copy `image` to the configured host with scp; returns where it can be found.
    #[instrument(skip(self))]
    pub fn upload(&self, image: &Path) -> ApplicationResult<String> {
        let upload = &self.settings.upload;
        let host = upload
            .host
            .as_deref()
            .ok_or(ApplicationError::UploadNotConfigured)?;
        let file_name = image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let target = format!("{}:{}", host, upload.remote_dir);
        let source = image.to_string_lossy().into_owned();
        let output = self
            .cmd
            .run("scp", &[source.as_str(), target.as_str()])
            .with_path_context("run scp", image)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::OperationFailed {
                context: format!("scp {} {}", image.display(), target),
                source: Box::new(InfraError::Upload {
                    message: stderr.trim().to_string(),
                    exit_code: output.status.code(),
                }),
            });
        }

        let location = match upload.url_base.as_deref() {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), file_name),
            None => format!("{}/{}", target, file_name),
        };
        debug!("upload: {}", location);
        Ok(location)
    }
}
