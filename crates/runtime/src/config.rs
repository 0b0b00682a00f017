//! Runtime configuration structures and loaders.
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use game_core::GameConfig;

use crate::api::{Result, RuntimeError};

/// Settings for the engine and the channels around it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Delay between two `process_turn()` calls in [`Runtime::run`](crate::Runtime::run).
    pub tick_interval_ms: u64,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;
    pub const DEFAULT_COMMAND_BUFFER_SIZE: usize = 32;

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(RuntimeError::ConfigParse)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// Construct configuration from process environment variables.
    ///
    /// `DUNGEON_CONFIG` names an optional RON file loaded first; the
    /// variables listed on [`apply_env`](Self::apply_env) override it.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var("DUNGEON_CONFIG") {
            Ok(path) => Self::load(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_TICK_MS` - Delay between ticks (default: 50)
    /// - `DUNGEON_EVENT_BUFFER` - Event channel capacity (default: 100)
    /// - `DUNGEON_COMMAND_BUFFER` - Command channel capacity (default: 32)
    /// - `DUNGEON_ENERGY_THRESHOLD` - Energy needed to act (default: 100)
    /// - `DUNGEON_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `DUNGEON_MENU_PAGE_SIZE` - Menu rows per page (default: 26)
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| env::var(key).ok())
    }

    /// Same as [`apply_env`](Self::apply_env) with an explicit variable source.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(ms) = read_var::<u64>(&lookup, "DUNGEON_TICK_MS")? {
            self.tick_interval_ms = ms.max(1);
        }
        if let Some(capacity) = read_var::<usize>(&lookup, "DUNGEON_EVENT_BUFFER")? {
            self.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_var::<usize>(&lookup, "DUNGEON_COMMAND_BUFFER")? {
            self.command_buffer_size = capacity.max(1);
        }
        if let Some(threshold) = read_var::<u32>(&lookup, "DUNGEON_ENERGY_THRESHOLD")? {
            self.game.energy_threshold = threshold;
        }
        if let Some(capacity) = read_var::<usize>(&lookup, "DUNGEON_MESSAGE_CAPACITY")? {
            self.game.message_capacity = capacity.max(1);
        }
        if let Some(size) = read_var::<usize>(&lookup, "DUNGEON_MENU_PAGE_SIZE")? {
            self.game.menu_page_size = size.max(1);
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
            command_buffer_size: Self::DEFAULT_COMMAND_BUFFER_SIZE,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| RuntimeError::InvalidEnv { key, value }),
    }
}
