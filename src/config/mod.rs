use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HISTORY_CAPACITY;
use crate::editor::history::{CommandHistory, EvictionPolicy};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_true() -> bool {
    true
}

/// History configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfigData {
    /// Bound on the number of undoable commands
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// When a push evicts the oldest command
    #[serde(default)]
    pub eviction: EvictionPolicy,

    /// Whether the undo and delete keyboard shortcuts are active
    #[serde(default = "default_true")]
    pub shortcuts_enabled: bool,
}

impl Default for HistoryConfigData {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            eviction: EvictionPolicy::default(),
            shortcuts_enabled: true,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct HistoryConfig {
    /// The persisted configuration data
    pub data: HistoryConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            data: HistoryConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify the host when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to change the history bound at runtime
#[derive(Message)]
pub struct SetHistoryLimitsRequest {
    pub capacity: usize,
    pub eviction: EvictionPolicy,
}

/// Result of loading config from disk
pub(crate) struct LoadConfigResult {
    pub data: HistoryConfigData,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from `path`, falling back to defaults.
pub(crate) fn load_config_from(path: &Path) -> LoadConfigResult {
    if !path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: HistoryConfigData::default(),
            reset_reason: None,
        };
    }

    let (data, reset_reason) = match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", path);
                (data, None)
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                (
                    HistoryConfigData::default(),
                    Some(format!("Configuration file was corrupted: {}", e)),
                )
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                HistoryConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    };

    LoadConfigResult { data, reset_reason }
}

/// Write configuration to `path` as pretty JSON.
pub(crate) fn write_config(path: &Path, data: &HistoryConfigData) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(data).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

fn save_config(config: &HistoryConfig) {
    match write_config(&config.config_path, &config.data) {
        Ok(()) => info!("Config saved to {:?}", config.config_path),
        Err(e) => error!("Failed to save config: {}", e),
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<HistoryConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config_from(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Push the configured bound into the command history
fn apply_history_limits(config: Res<HistoryConfig>, history: Option<ResMut<CommandHistory>>) {
    let Some(mut history) = history else {
        return;
    };
    let evicted = history.set_limits(config.data.capacity, config.data.eviction);
    debug!(
        "History bound set to {} ({:?}), {} commands evicted",
        history.capacity(),
        history.policy(),
        evicted.len()
    );
}

/// System to update the history bound when requested
fn set_history_limits_system(
    mut events: MessageReader<SetHistoryLimitsRequest>,
    mut config: ResMut<HistoryConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.capacity = event.capacity;
        config.data.eviction = event.eviction;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("History bound changed to {} ({:?})", event.capacity, event.eviction);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<HistoryConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HistoryConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetHistoryLimitsRequest>()
            .add_systems(
                Startup,
                (load_config_system, apply_history_limits)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    set_history_limits_system.run_if(on_message::<SetHistoryLimitsRequest>),
                    apply_history_limits.run_if(resource_changed::<HistoryConfig>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
