//! Bounded undo history for a Bevy scene editor.
//!
//! Editor operations (selection, movement, creation, removal, grouping)
//! record an [`EditorCommand`] holding the state from before the edit.
//! [`undo_last`] pops the most recent command and restores that state;
//! entities despawned in the meantime are skipped.
//!
//! Add [`EditorPlugin`] (and optionally [`ConfigPlugin`]) to an app, or drive
//! the history directly against a `World`.

mod common;
pub mod config;
pub mod constants;
pub mod editor;
pub mod paths;
pub mod scene;

pub use config::ConfigPlugin;
pub use editor::{
    CommandHistory, EditorCommand, EditorPlugin, EvictionPolicy, UndoCommand, record, undo_last,
};
