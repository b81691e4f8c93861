//! Client configuration, loaded once at startup.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tabuleiro_input::RouterConfig;
use tabuleiro_shared::constants::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_TAP_SLOP_PX, DEFAULT_TICK_INTERVAL_MS,
};

use crate::error::{ClientError, ClientResult};

/// A pinned logical render resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
}

/// Client settings persisted between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Render tick period in milliseconds.
    pub tick_interval_ms: u64,
    /// Pinned logical resolution; `None` renders at native surface size.
    pub fixed_resolution: Option<Resolution>,
    /// Movement beyond this radius turns a press into a drag.
    pub tap_slop: f32,
    /// Window for double-tap detection in milliseconds.
    pub double_tap_window_ms: u64,
    /// Player name sent to the server on connect.
    pub player_name: String,
    /// Last server address used, pre-filled in the connect dialog.
    pub server_address: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            fixed_resolution: None,
            tap_slop: DEFAULT_TAP_SLOP_PX,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            player_name: String::new(),
            server_address: String::new(),
        }
    }
}

impl ClientConfig {
    /// Loads the config from a TOML file.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ClientError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ClientError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Saves the config to a TOML file.
    pub fn save(&self, path: &Path) -> ClientResult<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| ClientError::ConfigIo {
            path: path.display().to_string(),
            source,
        })
    }

    /// Render tick period as a duration.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Router parameters for a surface of the given physical size.
    #[must_use]
    pub fn router_config(&self, surface_size: (u32, u32)) -> RouterConfig {
        RouterConfig {
            tap_slop: self.tap_slop,
            double_tap_window: Duration::from_millis(self.double_tap_window_ms),
            surface_size,
            fixed_resolution: self.fixed_resolution.map(|r| (r.width, r.height)),
            ..RouterConfig::default()
        }
    }
}
