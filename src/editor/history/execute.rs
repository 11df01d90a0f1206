//! Inverse of every command kind.
//!
//! Each step goes through a liveness-checked helper; a despawned entity only
//! skips its own steps and the rest of the command still runs.

use bevy::prelude::*;

use crate::editor::removal::remove_entity;
use crate::editor::selection::{
    add_additional, current_selection, release, remove_additional, revert_pivot, select,
};
use crate::scene::{add_to_roster, set_active, set_group, set_hidden, set_panel_open, set_parent};

use super::commands::EditorCommand;

/// Run the inverse of `command` against the world.
pub(super) fn execute_undo(command: EditorCommand, world: &mut World) {
    match command {
        EditorCommand::Select { previous } => match previous {
            Some(previous) => {
                select(world, previous);
            }
            None => release(world),
        },
        EditorCommand::Move {
            entity,
            start,
            active,
        } => {
            if let Some(mut transform) = world.get_mut::<Transform>(entity) {
                transform.translation = start;
            }
            reselect(world, active);
        }
        EditorCommand::Rotate {
            entity,
            start,
            active,
        } => {
            if let Some(mut transform) = world.get_mut::<Transform>(entity) {
                transform.rotation = start;
            }
            reselect(world, active);
        }
        EditorCommand::AdditionalAdded { entities } => {
            let current = current_selection(world);
            for entity in entities {
                if Some(entity) == current {
                    continue;
                }
                remove_additional(world, entity);
            }
        }
        EditorCommand::AdditionalRemoved { entity, anchor } => {
            add_additional(world, entity, anchor);
        }
        EditorCommand::Created { entities } => {
            for entity in entities {
                remove_entity(world, entity);
            }
        }
        EditorCommand::Duplicated {
            anchor,
            additionals,
            duplicates,
        } => {
            for duplicate in duplicates {
                remove_entity(world, duplicate);
            }
            if let Some(anchor) = anchor {
                select(world, anchor);
            }
            for additional in additionals {
                add_additional(world, additional, anchor);
            }
        }
        EditorCommand::Replaced { old, new } => {
            remove_entity(world, new);
            reinstate(world, old);
            select(world, old);
        }
        EditorCommand::Removed {
            primary,
            additionals,
        } => {
            for additional in additionals {
                if reinstate(world, additional) {
                    add_additional(world, additional, Some(primary));
                }
            }
            // Primary goes last so the selection focus ends on it
            if reinstate(world, primary) {
                select(world, primary);
            }
        }
        EditorCommand::Hidden { entity } => {
            set_hidden(world, entity, false);
        }
        EditorCommand::Unhidden { entity } => {
            set_hidden(world, entity, true);
        }
        EditorCommand::PivotChanged { post, pre } => {
            revert_pivot(world, pre);
            // `post` is still the primary selection until `pre` takes it back
            select(world, pre);
            add_additional(world, post, Some(pre));
        }
        EditorCommand::ConcealerCreated { concealer, members } => {
            deactivate_with_panel(world, concealer);
            for member in members {
                deactivate_with_panel(world, member);
            }
        }
        EditorCommand::ConcealerPivotChanged { pre, members } => {
            set_parent(world, pre, None);
            for member in members {
                if member != pre {
                    set_parent(world, member, Some(pre));
                }
            }
            select(world, pre);
        }
        EditorCommand::ConcealerRemoved { concealer, members } => {
            set_active(world, concealer, true);
            set_parent(world, concealer, None);
            set_hidden(world, concealer, false);
            set_panel_open(world, concealer, true);

            for member in members {
                if member == concealer {
                    continue;
                }
                set_active(world, member, true);
                set_hidden(world, member, false);
                set_panel_open(world, member, true);
                set_parent(world, member, Some(concealer));
            }
        }
        EditorCommand::ConcealerSeparated {
            concealer,
            members,
            scene_root,
        } => {
            set_parent(world, concealer, scene_root);
            set_group(world, concealer, &members);

            for &member in &members {
                if member == concealer {
                    continue;
                }
                set_active(world, member, true);
                set_parent(world, member, Some(concealer));
                set_group(world, member, &members);
            }
        }
        EditorCommand::Custom(command) => command.undo(world),
    }
}

fn reselect(world: &mut World, active: Option<Entity>) {
    if let Some(active) = active {
        select(world, active);
    }
}

/// Bring a removed machine back: active, panel open, box-selectable.
fn reinstate(world: &mut World, entity: Entity) -> bool {
    if !set_active(world, entity, true) {
        return false;
    }
    set_panel_open(world, entity, true);
    add_to_roster(world, entity);
    true
}

fn deactivate_with_panel(world: &mut World, entity: Entity) {
    if set_active(world, entity, false) {
        set_panel_open(world, entity, false);
    }
}
