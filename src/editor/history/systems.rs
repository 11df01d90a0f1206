//! Bevy systems for handling the undo shortcut.

use bevy::prelude::*;

use crate::common::drain;
use crate::config::HistoryConfig;

use super::{UndoRequest, undo_last};

/// System to turn the undo keyboard shortcut (Ctrl+Z) into an [`UndoRequest`]
pub fn handle_undo_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Option<Res<HistoryConfig>>,
    mut requests: MessageWriter<UndoRequest>,
) {
    if config.is_some_and(|config| !config.data.shortcuts_enabled) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    // Ctrl+Z (without shift) = undo
    if ctrl && !shift && keyboard.just_pressed(KeyCode::KeyZ) {
        requests.write(UndoRequest);
    }
}

/// Exclusive system undoing once per pending [`UndoRequest`].
pub fn apply_undo_requests(world: &mut World) {
    let requested = drain::<UndoRequest>(world).len();
    for _ in 0..requested {
        if !undo_last(world) {
            break;
        }
    }
}
