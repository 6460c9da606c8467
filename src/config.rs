use crate::icons::WorkIcons;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Projects JSON to read instead of the bundled data
    #[serde(default)]
    pub projects_file: Option<PathBuf>,
    #[serde(default = "default_color")]
    pub color: bool,
    /// Default list format: simple, detailed, table or json
    #[serde(default)]
    pub format: Option<String>,
    /// Pixel size of outlined work-history icons
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
}

const FORMATS: &[&str] = &["simple", "detailed", "table", "json"];

fn default_color() -> bool {
    true
}

fn default_icon_size() -> u32 {
    WorkIcons::DEFAULT_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                projects_file: None,
                color: true,
                format: None,
                icon_size: WorkIcons::DEFAULT_SIZE,
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        if let Some(base) = config_path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Make a relative `projects_file` relative to `base` (the config file's directory)
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(path) = &self.general.projects_file
            && path.is_relative()
        {
            self.general.projects_file = Some(base.join(path));
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.icon_size == 0 {
            return Err(AppError::Config("Icon size must be greater than zero".to_string()));
        }

        if let Some(path) = &self.general.projects_file
            && !path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            return Err(AppError::Config(format!(
                "Projects file should have a .json extension: {}",
                path.display()
            )));
        }

        if let Some(format) = &self.general.format
            && !FORMATS.contains(&format.as_str())
        {
            return Err(AppError::Config(format!(
                "Unknown list format '{}', expected one of: {}",
                format,
                FORMATS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }
}
