use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/quaver/config.toml` or `~/.config/quaver/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `QUAVER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub carousel: CarouselSettings,
    pub visualizer: VisualizerSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// Image file shown in the carousel for albums without embedded art.
    ///
    /// When unset (or unreadable) those slots render as blank cards.
    pub placeholder_cover: Option<PathBuf>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into()],
            follow_links: false,
            include_hidden: false,
            recursive: true,
            max_depth: None,
            placeholder_cover: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Number of visible cover slots. Must be even.
    pub slot_count: usize,
    /// Period between animation ticks (milliseconds).
    pub tick_ms: u64,
    /// Progress added per tick; a full transition spans a progress of 2.
    pub step: f64,
    /// Card width in scene units, used for the lateral offsets handed to the renderer.
    pub card_width: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            slot_count: 10,
            tick_ms: 10,
            step: 0.05,
            card_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Number of bars.
    pub bar_count: usize,
    /// Period of the decay pass that lowers every bar (milliseconds).
    pub decay_ms: u64,
    /// Period of the random jump pass while the visualizer is active (milliseconds).
    pub jump_ms: u64,
    /// Whether the jump animation starts enabled.
    pub start_active: bool,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            bar_count: 100,
            decay_ms: 25,
            jump_ms: 500,
            start_active: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Which decorative display is shown on startup.
    pub start_display: DisplaySetting,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ quaver ~ ".to_string(),
            start_display: DisplaySetting::CoverFlow,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplaySetting {
    #[serde(alias = "coverflow", alias = "cover_flow", alias = "carousel")]
    CoverFlow,
    #[serde(alias = "bars")]
    Visualizer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Directory for the log file. Defaults to `<tmp>/quaver`.
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`.
    pub file_name: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
            file_name: "quaver.log".to_string(),
        }
    }
}
