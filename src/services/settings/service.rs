use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable that points at a settings file, taking precedence
/// over every other location.
pub const CONFIG_ENV_VAR: &str = "BACKOFFICE_CALENDAR_CONFIG";

const CONFIG_FILE_NAME: &str = "calendar.toml";

pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Locate the settings file: the env var, then `override_path`, then the
    /// platform config directory.
    pub fn discover(override_path: Option<&Path>) -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| override_path.map(Path::to_path_buf))
            .or_else(default_config_path);
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings. A missing file yields defaults; a malformed or invalid
    /// one is an error.
    pub fn get(&self) -> Result<Settings> {
        let Some(path) = self.path.as_deref() else {
            return Ok(Settings::default());
        };
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`get`](Self::get), but falls back to defaults on any error.
    pub fn get_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("No settings location available"))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "BackOffice", "BackofficeCalendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
