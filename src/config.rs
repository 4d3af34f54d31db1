//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/circlenest/circlenest.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `CIRCLENEST__<SECTION>__<KEY>`

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::util::path::expand_path;

const APP_NAME: &str = "circlenest";
const ENV_PREFIX: &str = "CIRCLENEST";

/// Image output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Minimum canvas width in pixels
    pub width: u32,
    /// Minimum canvas height in pixels
    pub height: u32,
    /// Page height limit; rows beyond it go to further images of the same level
    pub max_height: u32,
    /// Pixels per layout unit (a leaf circle has radius 1 unit)
    pub scale: f64,
    /// Minimum x position of configuration labels
    pub label_x: u32,
    /// Directory images are written to
    pub output_dir: PathBuf,
    /// Image file name prefix: `<prefix>_<level>.png`
    pub file_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 2048,
            max_height: 16384,
            scale: 10.0,
            label_x: 300,
            output_dir: PathBuf::from("."),
            file_prefix: "circles".into(),
        }
    }
}

/// Image upload settings (scp).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadConfig {
    /// scp destination host, e.g. `user@example.org`; upload is disabled when unset
    pub host: Option<String>,
    /// Directory on the host images are copied into
    pub remote_dir: String,
    /// Public URL under which uploaded images appear
    pub url_base: Option<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            host: None,
            remote_dir: "public_html/A250001".into(),
            url_base: None,
        }
    }
}

/// Raw render section: every field optional to detect "not specified".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_height: Option<u32>,
    pub scale: Option<f64>,
    pub label_x: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub file_prefix: Option<String>,
}

/// Raw upload section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawUploadConfig {
    pub host: Option<String>,
    pub remote_dir: Option<String>,
    pub url_base: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderConfig,
    pub upload: RawUploadConfig,
}

impl RenderConfig {
    fn merge(&self, overlay: &RawRenderConfig) -> Self {
        Self {
            width: overlay.width.unwrap_or(self.width),
            height: overlay.height.unwrap_or(self.height),
            max_height: overlay.max_height.unwrap_or(self.max_height),
            scale: overlay.scale.unwrap_or(self.scale),
            label_x: overlay.label_x.unwrap_or(self.label_x),
            output_dir: overlay
                .output_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.clone()),
            file_prefix: overlay
                .file_prefix
                .clone()
                .unwrap_or_else(|| self.file_prefix.clone()),
        }
    }
}

impl UploadConfig {
    fn merge(&self, overlay: &RawUploadConfig) -> Self {
        Self {
            host: overlay.host.clone().or_else(|| self.host.clone()),
            remote_dir: overlay
                .remote_dir
                .clone()
                .unwrap_or_else(|| self.remote_dir.clone()),
            url_base: overlay.url_base.clone().or_else(|| self.url_base.clone()),
        }
    }
}

/// Unified configuration for circlenest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub render: RenderConfig,
    pub upload: UploadConfig,
}

/// Get the XDG config directory for circlenest.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{}.toml", APP_NAME)))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn to_u32(key: &str, value: i64) -> Result<u32, ApplicationError> {
    u32::try_from(value).map_err(|_| ApplicationError::Config {
        message: format!("{}: {} is out of range", key, value),
    })
}

impl Settings {
    /// Path of the image for `level`.
    pub fn image_path(&self, level: usize) -> PathBuf {
        self.page_path(level, 0)
    }

    /// Path of page `page` (0-based) of `level`; the first page carries no page suffix.
    pub fn page_path(&self, level: usize, page: usize) -> PathBuf {
        let name = match page {
            0 => format!("{}_{}.png", self.render.file_prefix, level),
            n => format!("{}_{}_{}.png", self.render.file_prefix, level, n + 1),
        };
        self.render.output_dir.join(name)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.render.output_dir = expand_path(&self.render.output_dir);
    }

    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: self.render.merge(&overlay.render),
            upload: self.upload.merge(&overlay.upload),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file; unlike the global file it must exist
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = local {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply CIRCLENEST__* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_int("render.width") {
            settings.render.width = to_u32("render.width", val)?;
        }
        if let Ok(val) = config.get_int("render.height") {
            settings.render.height = to_u32("render.height", val)?;
        }
        if let Ok(val) = config.get_int("render.max_height") {
            settings.render.max_height = to_u32("render.max_height", val)?;
        }
        if let Ok(val) = config.get_float("render.scale") {
            settings.render.scale = val;
        }
        if let Ok(val) = config.get_int("render.label_x") {
            settings.render.label_x = to_u32("render.label_x", val)?;
        }
        if let Ok(val) = config.get_string("render.output_dir") {
            settings.render.output_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("render.file_prefix") {
            settings.render.file_prefix = val;
        }
        if let Ok(val) = config.get_string("upload.host") {
            settings.upload.host = Some(val);
        }
        if let Ok(val) = config.get_string("upload.remote_dir") {
            settings.upload.remote_dir = val;
        }
        if let Ok(val) = config.get_string("upload.url_base") {
            settings.upload.url_base = Some(val);
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if !(self.render.scale.is_finite() && self.render.scale > 0.0) {
            return Err(ApplicationError::Config {
                message: format!("render.scale must be positive, got {}", self.render.scale),
            });
        }
        if self.render.max_height < self.render.height {
            return Err(ApplicationError::Config {
                message: format!(
                    "render.max_height ({}) must not be below render.height ({})",
                    self.render.max_height, self.render.height
                ),
            });
        }
        if self.render.file_prefix.is_empty() {
            return Err(ApplicationError::Config {
                message: "render.file_prefix must not be empty".into(),
            });
        }
        Ok(())
    }

    /// TOML rendering of the effective settings.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
