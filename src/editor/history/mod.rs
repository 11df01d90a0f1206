//! Undo system for editor actions.
//!
//! Every reversible editor operation (selection, movement, creation, removal,
//! grouping) is recorded as a command holding the state from before the
//! edit. Undo pops the most recent command and restores that state. There is
//! no redo: undone commands are dropped.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//!
//! ## Module Structure
//!
//! - [`commands`] - EditorCommand enum and the UndoCommand extension trait
//! - [`command_history`] - bounded CommandHistory resource
//! - [`execute`] - inverse of each command kind
//! - [`systems`] - Bevy systems for the undo shortcut and undo requests

mod command_history;
mod commands;
mod execute;
mod systems;


use bevy::prelude::*;

use crate::common::publish;

pub use command_history::{CommandHistory, EvictionPolicy};
pub use commands::{EditorCommand, UndoCommand};
pub use systems::{apply_undo_requests, handle_undo_shortcut};

/// Request to undo the most recent edit.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct UndoRequest;

/// Published whenever the history changes.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Recorded { label: &'static str },
    Undone { label: &'static str },
    Evicted { label: &'static str },
}

/// Record a completed edit.
pub fn record(world: &mut World, command: EditorCommand) {
    let label = command.label();
    let (evicted, depth) = {
        let Some(mut history) = world.get_resource_mut::<CommandHistory>() else {
            warn!("No command history registered, dropping {label} command");
            return;
        };
        (history.push(command), history.undo_count())
    };

    debug!("Recorded {label} (history depth {depth})");
    publish(world, HistoryEvent::Recorded { label });

    if let Some(evicted) = evicted {
        let label = evicted.label();
        debug!("History full, evicted oldest {label} command");
        publish(world, HistoryEvent::Evicted { label });
    }
}

/// Undo the most recent edit. Returns `false` when there was nothing to undo.
pub fn undo_last(world: &mut World) -> bool {
    let Some(command) = world
        .get_resource_mut::<CommandHistory>()
        .and_then(|mut history| history.pop_undo())
    else {
        debug!("Nothing to undo");
        return false;
    };

    let label = command.label();
    command.undo(world);
    info!("Undid {label}");
    publish(world, HistoryEvent::Undone { label });
    true
}
