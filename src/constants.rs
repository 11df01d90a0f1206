//! Centralized constants used across the crate.

/// Number of commands the undo history holds before evicting the oldest.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "scene-history.json";

/// File name of the debug log inside the logs directory.
pub const LOG_FILE_NAME: &str = "scene-history.log";
