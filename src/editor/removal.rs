//! Removing scene objects.
//!
//! Removal deactivates instead of despawning, so undo can bring objects back
//! with their components intact.

use bevy::prelude::*;

use crate::common::{drain, publish};
use crate::config::HistoryConfig;
use crate::scene::{
    Concealer, group_of, is_alive, remove_from_roster, set_active, set_hidden, set_panel_open,
};

use super::history::{EditorCommand, record};
use super::selection::{Selection, current_selection, release, remove_additional};

/// Published for every object taken out of the scene.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRemoved {
    pub entity: Entity,
}

/// Request to remove the whole current selection.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct RemoveSelectedRequest;

fn deactivate(world: &mut World, entity: Entity) -> bool {
    if !set_active(world, entity, false) {
        return false;
    }
    set_panel_open(world, entity, false);
    remove_from_roster(world, entity);
    true
}

/// Deactivate every live entity in `entities`, returning how many were removed.
///
/// A concealer takes its whole group with it, hidden.
pub fn remove_batch(world: &mut World, entities: &[Entity]) -> usize {
    let mut removed = 0;
    for &entity in entities {
        if !deactivate(world, entity) {
            continue;
        }
        if world.get::<Concealer>(entity).is_some() {
            set_hidden(world, entity, true);
            for member in group_of(world, entity) {
                if member != entity && deactivate(world, member) {
                    set_hidden(world, member, true);
                }
            }
        }
        removed += 1;
        publish(world, EntityRemoved { entity });
    }
    removed
}

/// Release the selection and remove a single entity without recording it.
pub fn remove_entity(world: &mut World, entity: Entity) -> bool {
    release(world);
    remove_batch(world, &[entity]) == 1
}

fn removal_command(world: &World, batch: &[Entity]) -> Option<EditorCommand> {
    let &primary = batch.first()?;
    if world.get::<Concealer>(primary).is_some() {
        Some(EditorCommand::concealer_removed(world, primary))
    } else {
        EditorCommand::removed_batch(batch)
    }
}

/// Remove the primary selection and its additional group as one undoable edit.
///
/// Does nothing without a primary selection.
pub fn remove_selected(world: &mut World) -> bool {
    let Some(selection) = world.get_resource::<Selection>() else {
        return false;
    };
    if selection.current().is_none() {
        return false;
    }
    let batch = selection.batch();
    let Some(command) = removal_command(world, &batch) else {
        return false;
    };

    release(world);
    let removed = remove_batch(world, &batch);
    debug!("Removed {removed} selected objects");
    record(world, command);
    true
}

/// Remove one object from its view panel as an undoable edit.
pub fn remove_from_panel(world: &mut World, entity: Entity) -> bool {
    if !is_alive(world, entity) {
        return false;
    }
    let Some(command) = removal_command(world, &[entity]) else {
        return false;
    };

    if current_selection(world) == Some(entity) {
        release(world);
    } else {
        remove_additional(world, entity);
    }
    remove_batch(world, &[entity]);
    record(world, command);
    true
}

/// System to turn Delete/Backspace into a [`RemoveSelectedRequest`]
pub fn handle_delete_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Option<Res<HistoryConfig>>,
    mut requests: MessageWriter<RemoveSelectedRequest>,
) {
    if config.is_some_and(|config| !config.data.shortcuts_enabled) {
        return;
    }

    let should_delete =
        keyboard.just_pressed(KeyCode::Delete) || keyboard.just_pressed(KeyCode::Backspace);
    if should_delete {
        requests.write(RemoveSelectedRequest);
    }
}

/// Exclusive system applying pending [`RemoveSelectedRequest`]s.
pub fn apply_remove_requests(world: &mut World) {
    if !drain::<RemoveSelectedRequest>(world).is_empty() {
        remove_selected(world);
    }
}
