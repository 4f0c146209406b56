//! Configuration for the star map viewer.
//!
//! YAML file with per-field defaults; an absent file means all defaults.

use crate::error::{Error, Result};
use crate::ingest::{Session, HYG_DATABASE_URL};
use crate::plots::StarMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "starfield.yaml";

/// Where and how the catalog is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Catalog URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Pause between chunk reads in milliseconds.
    #[serde(default = "default_read_delay_ms")]
    pub read_delay_ms: u64,

    /// Stop after this many records; `null` or 0 reads the whole catalog.
    #[serde(default)]
    pub max_records: Option<usize>,

    /// Field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_url() -> String {
    HYG_DATABASE_URL.to_string()
}
fn default_read_delay_ms() -> u64 {
    1
}
fn default_delimiter() -> String {
    ",".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            read_delay_ms: default_read_delay_ms(),
            max_records: None,
            delimiter: default_delimiter(),
        }
    }
}

/// Canvas size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_canvas_edge")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_canvas_edge")]
    pub height: u32,
}

fn default_canvas_edge() -> u32 {
    700
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: default_canvas_edge(), height: default_canvas_edge() }
    }
}

/// Batch rendering and column mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Records drawn per tick.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Interval between batches in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Marker diameter in pixels.
    #[serde(default = "default_point_diameter")]
    pub point_diameter: f64,

    /// Column mapped to the horizontal axis.
    #[serde(default = "default_x_column")]
    pub x_column: String,

    /// Column mapped to the vertical axis.
    #[serde(default = "default_y_column")]
    pub y_column: String,

    /// Spectral type column used for color.
    #[serde(default = "default_color_column")]
    pub color_column: String,
}

fn default_batch_size() -> usize {
    1000
}
fn default_tick_ms() -> u64 {
    20
}
fn default_point_diameter() -> f64 {
    10.0
}
fn default_x_column() -> String {
    "x".to_string()
}
fn default_y_column() -> String {
    "z".to_string()
}
fn default_color_column() -> String {
    "spect".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            tick_ms: default_tick_ms(),
            point_diameter: default_point_diameter(),
            x_column: default_x_column(),
            y_column: default_y_column(),
            color_column: default_color_column(),
        }
    }
}

/// Where the finished map is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// PNG output path.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("starfield.png")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: default_output_path() }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog source.
    #[serde(default)]
    pub source: SourceConfig,

    /// Canvas size.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Rendering.
    #[serde(default)]
    pub render: RenderConfig,

    /// PNG output.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            source: SourceConfig::default(),
            canvas: CanvasConfig::default(),
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// A file that exists but is invalid is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path) {
            Err(Error::ConfigNotFound(path)) => {
                tracing::debug!(%path, "no configuration file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Rejects values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| {
            Err(Error::ConfigInvalid { key: key.to_string(), message: message.to_string() })
        };

        if self.source.url.trim().is_empty() {
            return invalid("source.url", "must not be empty");
        }
        if self.source.delimiter.is_empty() {
            return invalid("source.delimiter", "must not be empty");
        }
        if self.canvas.width == 0 {
            return invalid("canvas.width", "must be positive");
        }
        if self.canvas.height == 0 {
            return invalid("canvas.height", "must be positive");
        }
        if self.render.batch_size == 0 {
            return invalid("render.batch_size", "must be positive");
        }
        if self.render.tick_ms == 0 {
            return invalid("render.tick_ms", "must be positive");
        }
        if !(self.render.point_diameter.is_finite() && self.render.point_diameter > 0.0) {
            return invalid("render.point_diameter", "must be a positive number");
        }
        Ok(())
    }

    /// Pause between chunk reads.
    #[must_use]
    pub fn read_delay(&self) -> Duration {
        Duration::from_millis(self.source.read_delay_ms)
    }

    /// Interval between render batches.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.render.tick_ms)
    }

    /// An ingestion session configured from the `source` section.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new()
            .delimiter(self.source.delimiter.clone())
            .max_records(self.source.max_records)
            .read_delay(self.read_delay())
    }

    /// A star map configured from the `canvas` and `render` sections.
    #[must_use]
    pub fn star_map(&self) -> StarMap {
        StarMap::new()
            .dimensions(self.canvas.width, self.canvas.height)
            .batch_size(self.render.batch_size)
            .tick(self.tick_interval())
            .point_diameter(self.render.point_diameter)
            .columns(
                self.render.x_column.clone(),
                self.render.y_column.clone(),
                self.render.color_column.clone(),
            )
    }
}
