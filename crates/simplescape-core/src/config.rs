//! Configuration loading and typed config structures for a `SimpleScape`
//! session.
//!
//! The canonical configuration lives in `simplescape-config.yaml` at the
//! project root. Every section and field is optional; anything left out
//! takes the classic game's value.

use std::path::Path;

use serde::Deserialize;
use simplescape_player::GameRules;
use simplescape_types::Activity;
use simplescape_world::{DEFAULT_TICK_MS, WELCOME_MESSAGE, base_tick_ms};
use tracing::info;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level session configuration.
///
/// Mirrors the structure of `simplescape-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimplescapeConfig {
    /// Session seed, buffering, and opening line.
    #[serde(default)]
    pub session: SessionConfig,

    /// Tick intervals per activity.
    #[serde(default)]
    pub ticks: TickConfig,

    /// Reducer rules (slot caps, prayer cadence, prices, roll chances).
    #[serde(default)]
    pub rules: GameRules,

    /// Where saves are kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level and output format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimplescapeConfig {
    /// Load configuration from a YAML file.
    ///
    /// Environment variable overrides are applied after parsing:
    /// - `SIMPLESCAPE_DRAGONFLY_URL` overrides `storage.dragonfly_url`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.storage.apply_env_overrides();
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_file`] for a file that exists but cannot be
    /// read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        info!(path = %path.display(), "Config file not found, using defaults");
        let mut config = Self::default();
        config.storage.apply_env_overrides();
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Session-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Seed for the session RNG. Entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Capacity of the command channel into the session task.
    #[serde(default = "default_command_buffer")]
    pub command_buffer: usize,

    /// Capacity of the log broadcast channel. Slow subscribers that fall
    /// further behind miss lines.
    #[serde(default = "default_log_buffer")]
    pub log_buffer: usize,

    /// First log line of a fresh game.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,

    /// Restore the saved game on startup.
    #[serde(default = "default_true")]
    pub load_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            command_buffer: default_command_buffer(),
            log_buffer: default_log_buffer(),
            welcome_message: default_welcome_message(),
            load_on_start: default_true(),
        }
    }
}

const fn default_command_buffer() -> usize {
    64
}

const fn default_log_buffer() -> usize {
    256
}

fn default_welcome_message() -> String {
    WELCOME_MESSAGE.to_owned()
}

const fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Ticks
// ---------------------------------------------------------------------------

/// Fixed tick intervals in milliseconds.
///
/// Gathering activities are not listed: their interval comes from the
/// spot's base duration and the equipped tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickConfig {
    /// Combat rounds.
    #[serde(default = "default_combat_ms")]
    pub combat_ms: u64,

    /// Cooking.
    #[serde(default = "default_cooking_ms")]
    pub cooking_ms: u64,

    /// Smelting and smithing.
    #[serde(default = "default_smithing_ms")]
    pub smithing_ms: u64,

    /// Fletching.
    #[serde(default = "default_fletching_ms")]
    pub fletching_ms: u64,

    /// Firemaking.
    #[serde(default = "default_firemaking_ms")]
    pub firemaking_ms: u64,

    /// Crafting.
    #[serde(default = "default_crafting_ms")]
    pub crafting_ms: u64,

    /// Enchanting.
    #[serde(default = "default_enchanting_ms")]
    pub enchanting_ms: u64,

    /// Thieving.
    #[serde(default = "default_thieving_ms")]
    pub thieving_ms: u64,

    /// Fallback for a gathering spot with no known duration.
    #[serde(default = "default_tick_ms")]
    pub default_ms: u64,
}

impl TickConfig {
    /// Fixed interval for `activity`.
    pub const fn interval_ms(&self, activity: Activity) -> u64 {
        match activity {
            Activity::Combat => self.combat_ms,
            Activity::Cooking => self.cooking_ms,
            Activity::Smithing => self.smithing_ms,
            Activity::Fletching => self.fletching_ms,
            Activity::Firemaking => self.firemaking_ms,
            Activity::Crafting => self.crafting_ms,
            Activity::Enchanting => self.enchanting_ms,
            Activity::Thieving => self.thieving_ms,
            Activity::Idle | Activity::Woodcutting | Activity::Mining | Activity::Fishing => {
                self.default_ms
            }
        }
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            combat_ms: default_combat_ms(),
            cooking_ms: default_cooking_ms(),
            smithing_ms: default_smithing_ms(),
            fletching_ms: default_fletching_ms(),
            firemaking_ms: default_firemaking_ms(),
            crafting_ms: default_crafting_ms(),
            enchanting_ms: default_enchanting_ms(),
            thieving_ms: default_thieving_ms(),
            default_ms: default_tick_ms(),
        }
    }
}

const fn default_combat_ms() -> u64 {
    base_tick_ms(Activity::Combat)
}

const fn default_cooking_ms() -> u64 {
    base_tick_ms(Activity::Cooking)
}

const fn default_smithing_ms() -> u64 {
    base_tick_ms(Activity::Smithing)
}

const fn default_fletching_ms() -> u64 {
    base_tick_ms(Activity::Fletching)
}

const fn default_firemaking_ms() -> u64 {
    base_tick_ms(Activity::Firemaking)
}

const fn default_crafting_ms() -> u64 {
    base_tick_ms(Activity::Crafting)
}

const fn default_enchanting_ms() -> u64 {
    base_tick_ms(Activity::Enchanting)
}

const fn default_thieving_ms() -> u64 {
    base_tick_ms(Activity::Thieving)
}

const fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Which save repository the engine wires up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-process map. Saves vanish with the process.
    #[default]
    Memory,
    /// One JSON file per key in a directory.
    File,
    /// Dragonfly (or any Redis-protocol server).
    Dragonfly,
}

/// Save storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Backend to use.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Dragonfly connection URL.
    #[serde(default = "default_dragonfly_url")]
    pub dragonfly_url: String,

    /// Directory for the file backend.
    #[serde(default = "default_save_dir")]
    pub save_dir: String,

    /// Key the player is saved under.
    #[serde(default = "default_player_key")]
    pub player_key: String,

    /// Key the shop stock is saved under.
    #[serde(default = "default_shop_key")]
    pub shop_key: String,
}

impl StorageConfig {
    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SIMPLESCAPE_DRAGONFLY_URL") {
            self.dragonfly_url = val;
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dragonfly_url: default_dragonfly_url(),
            save_dir: default_save_dir(),
            player_key: default_player_key(),
            shop_key: default_shop_key(),
        }
    }
}

fn default_dragonfly_url() -> String {
    "redis://localhost:6379".to_owned()
}

fn default_save_dir() -> String {
    "saves".to_owned()
}

fn default_player_key() -> String {
    "simpleScapeSaveData".to_owned()
}

fn default_shop_key() -> String {
    "simpleScapeShopSaveData".to_owned()
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
