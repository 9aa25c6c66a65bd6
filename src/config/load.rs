use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `QUAVER__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("QUAVER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        let carousel = &self.carousel;
        if carousel.slot_count < 4 || carousel.slot_count % 2 != 0 {
            return Err(Error::InvalidSettings(format!(
                "carousel.slot_count must be even and >= 4 (got {})",
                carousel.slot_count
            )));
        }
        if carousel.tick_ms == 0 {
            return Err(Error::InvalidSettings(
                "carousel.tick_ms must be >= 1".to_string(),
            ));
        }
        if !(carousel.step > 0.0) {
            return Err(Error::InvalidSettings(
                "carousel.step must be > 0".to_string(),
            ));
        }
        if self.visualizer.bar_count == 0 {
            return Err(Error::InvalidSettings(
                "visualizer.bar_count must be >= 1".to_string(),
            ));
        }
        if self.visualizer.decay_ms == 0 || self.visualizer.jump_ms == 0 {
            return Err(Error::InvalidSettings(
                "visualizer periods must be >= 1ms".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `QUAVER_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("QUAVER_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/quaver/config.toml`
/// or `~/.config/quaver/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("quaver").join("config.toml"))
}
