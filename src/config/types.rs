use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Event loop and interaction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between ticks in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Ticks an inserted or moved chip stays highlighted (default: 4).
    #[serde(default = "default_highlight_ticks")]
    pub highlight_ticks: u8,
    /// Capture the mouse so chips can be clicked (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Chip geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Columns between neighbouring chips in a row (default: 1).
    #[serde(default = "default_column_gap")]
    pub column_gap: u16,
    /// Blank rows between chip rows (default: 0).
    #[serde(default)]
    pub row_gap: u16,
    /// Columns between a chip's border and its label (default: 1).
    #[serde(default = "default_padding_x")]
    pub padding_x: u16,
}

/// Log output. Nothing is logged unless a file is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// File to append log lines to.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_highlight_ticks() -> u8 {
    4
}

fn default_mouse() -> bool {
    true
}

fn default_column_gap() -> u16 {
    1
}

fn default_padding_x() -> u16 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            highlight_ticks: default_highlight_ticks(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_gap: default_column_gap(),
            row_gap: 0,
            padding_x: default_padding_x(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
