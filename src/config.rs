use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ui::style::{default_tag_styles, ElementStyle, Theme};
use crate::util::CellRef;

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_CELL_WIDTH: u16 = 12;
pub const MIN_CELL_WIDTH: u16 = 3;

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "Failed to parse config {}: {}", path.display(), e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<ConfigError> for io::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Io(_, inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

/// Grid dimensions and cell display width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

/// Top-level configuration, read from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name
    pub theme: Option<String>,
    /// Full theme file, takes precedence over `theme`
    pub theme_file: Option<PathBuf>,
    pub grid: GridConfig,
    /// Style tag -> terminal attributes, merged over the built-in mapping
    pub styles: HashMap<String, ElementStyle>,
}

/// Values given on the command line, each overriding the config file
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub cell_width: Option<u16>,
    pub theme: Option<String>,
    pub config_path: Option<PathBuf>,
    /// Cell to start on instead of A1
    pub start_cell: Option<CellRef>,
}

/// `$HOME/.config/sheetgrid/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("sheetgrid")
            .join("config.toml")
    })
}

impl Config {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&content, path)
    }

    /// Load from an explicit path, or from the default path if it exists.
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Load, apply command line overrides, and validate
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::load(args.config_path.as_deref())?;
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(rows) = args.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = args.cols {
            self.grid.cols = cols;
        }
        if let Some(width) = args.cell_width {
            self.grid.cell_width = width;
        }
        if let Some(theme) = &args.theme {
            self.theme = Some(theme.clone());
            // an explicit name on the command line beats a theme file from config
            self.theme_file = None;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column (got {}x{})",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.grid.cell_width < MIN_CELL_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "cell_width must be at least {} (got {})",
                MIN_CELL_WIDTH, self.grid.cell_width
            )));
        }
        if let Some(name) = &self.theme {
            if self.theme_file.is_none() && Theme::by_name(name).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "unknown theme '{}', expected one of: {}",
                    name,
                    Theme::builtin_names().join(", ")
                )));
            }
        }
        Ok(())
    }

    pub fn resolve_theme(&self) -> Result<Theme, ConfigError> {
        if let Some(path) = &self.theme_file {
            return Theme::from_file(path).map_err(ConfigError::Invalid);
        }
        match &self.theme {
            Some(name) => Theme::by_name(name)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown theme '{}'", name))),
            None => Ok(Theme::default()),
        }
    }

    /// Built-in tag mapping with the configured entries layered on top
    pub fn tag_styles(&self) -> HashMap<String, ElementStyle> {
        let mut styles = default_tag_styles();
        for (tag, style) in &self.styles {
            if tag.trim().is_empty() {
                warn!("ignoring style entry with an empty tag name");
                continue;
            }
            styles.insert(tag.clone(), style.clone());
        }
        styles
    }
}
