use crate::color::Color;
use crate::progress::Progress;
use crate::style::StyleConfig;
use crate::theme::Preset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_STROKE_WIDTH: f64 = 12.0;
pub const DEFAULT_SIZE: u32 = 200;

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub preset: Preset,
    pub dark_color: Option<Color>,
    pub mid_color: Option<Color>,
    pub light_color: Option<Color>,
    pub background_color: Option<Color>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            dark_color: None,
            mid_color: None,
            light_color: None,
            background_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            progress: Progress::ZERO,
            size: DEFAULT_SIZE,
        }
    }
}

impl Settings {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        if self.size == 0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        Ok(self)
    }

    /// Preset colors with any explicitly configured color on top.
    pub fn style(&self) -> StyleConfig {
        let theme = self.preset.colors();
        StyleConfig {
            dark_color: self.dark_color.unwrap_or(theme.dark),
            mid_color: self.mid_color.unwrap_or(theme.mid),
            light_color: self.light_color.unwrap_or(theme.light),
            background_color: self.background_color.unwrap_or(theme.background),
            stroke_width: self.stroke_width,
            progress: self.progress,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Stroke width must be a non-negative number, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("Size must be at least 1 pixel, got {0}")]
    InvalidSize(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "lapring", "lapring").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Layers the built-in defaults, the file at `path` (if it exists) and
/// `LAPRING_*` environment variables.
pub fn load_config_from(path: &Path) -> Result<Settings, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("LAPRING"))
        .build()?;

    s.try_deserialize::<Settings>()?.validate()
}

pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(&get_config_path()?)
}

pub fn load_or_default(path: Option<&Path>) -> Settings {
    let loaded = match path {
        Some(p) => load_config_from(p),
        None => load_config(),
    };

    loaded.unwrap_or_else(|e| {
        log::warn!("Falling back to default settings: {}", e);
        Settings::default()
    })
}

pub fn write_default_config(path: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
