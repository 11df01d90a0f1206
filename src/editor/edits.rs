//! Forward edits that record their own undo command.
//!
//! Each helper reads what it is about to change, applies the edit, then
//! records a command built from the values read beforehand.

use bevy::prelude::*;

use crate::scene::{
    Concealer, Hideable, Machine, ViewPanel, add_to_roster, group_of, is_active, is_alive,
    parent_of, remove_from_roster, set_active, set_group, set_hidden, set_panel_open, set_parent,
};

use super::history::{EditorCommand, record};
use super::selection::{
    Selection, add_additional, current_selection, release, remove_additional, select,
};

/// Select `entity` as the primary selection, recording the previous one.
pub fn select_with_command(world: &mut World, entity: Entity) -> bool {
    let previous = current_selection(world);
    if previous == Some(entity) || !select(world, entity) {
        return false;
    }
    record(world, EditorCommand::Select { previous });
    true
}

/// Add `entity` to the additional group, anchored on the primary selection.
pub fn add_additional_with_command(world: &mut World, entity: Entity) -> bool {
    let Some(selection) = world.get_resource::<Selection>() else {
        return false;
    };
    if selection.additional().contains(&entity) {
        return false;
    }
    let anchor = selection.current();
    if !add_additional(world, entity, anchor) {
        return false;
    }
    record(
        world,
        EditorCommand::AdditionalAdded {
            entities: vec![entity],
        },
    );
    true
}

pub fn remove_additional_with_command(world: &mut World, entity: Entity) -> bool {
    let Some(selection) = world.get_resource::<Selection>() else {
        return false;
    };
    let anchor = selection.pivot().or(selection.current());
    if !remove_additional(world, entity) {
        return false;
    }
    record(world, EditorCommand::AdditionalRemoved { entity, anchor });
    true
}

pub fn move_entity(world: &mut World, entity: Entity, to: Vec3) -> bool {
    let active = current_selection(world);
    let start = {
        let Some(mut transform) = world.get_mut::<Transform>(entity) else {
            return false;
        };
        std::mem::replace(&mut transform.translation, to)
    };
    record(
        world,
        EditorCommand::Move {
            entity,
            start,
            active,
        },
    );
    true
}

pub fn rotate_entity(world: &mut World, entity: Entity, to: Quat) -> bool {
    let active = current_selection(world);
    let start = {
        let Some(mut transform) = world.get_mut::<Transform>(entity) else {
            return false;
        };
        std::mem::replace(&mut transform.rotation, to)
    };
    record(
        world,
        EditorCommand::Rotate {
            entity,
            start,
            active,
        },
    );
    true
}

fn spawn_machine(world: &mut World, transform: Transform) -> Entity {
    let entity = world
        .spawn((Machine, ViewPanel::default(), transform))
        .id();
    add_to_roster(world, entity);
    entity
}

/// Place one machine per transform, recorded as a single edit.
pub fn create_machines(world: &mut World, transforms: &[Transform]) -> Vec<Entity> {
    let entities: Vec<Entity> = transforms
        .iter()
        .map(|transform| spawn_machine(world, *transform))
        .collect();
    if !entities.is_empty() {
        record(
            world,
            EditorCommand::Created {
                entities: entities.clone(),
            },
        );
    }
    entities
}

/// Copy every active machine in the selection, shifted by `offset`.
///
/// The copies become the new selection, the first one primary.
pub fn duplicate_selection(world: &mut World, offset: Vec3) -> Vec<Entity> {
    let Some(selection) = world.get_resource::<Selection>() else {
        return Vec::new();
    };
    let anchor = selection.current();
    let additionals = selection.additional().to_vec();
    let batch = selection.batch();

    let mut duplicates = Vec::new();
    for source in batch {
        if !is_active(world, source) || world.get::<Machine>(source).is_none() {
            continue;
        }
        let Some(&transform) = world.get::<Transform>(source) else {
            continue;
        };
        let copy = Transform {
            translation: transform.translation + offset,
            ..transform
        };
        duplicates.push(spawn_machine(world, copy));
    }
    if duplicates.is_empty() {
        return duplicates;
    }

    release(world);
    if let Some((&first, rest)) = duplicates.split_first() {
        select(world, first);
        for &duplicate in rest {
            add_additional(world, duplicate, Some(first));
        }
    }

    record(
        world,
        EditorCommand::Duplicated {
            anchor,
            additionals,
            duplicates: duplicates.clone(),
        },
    );
    duplicates
}

/// Swap `old` out of the scene for the already spawned `new`.
pub fn replace_entity(world: &mut World, old: Entity, new: Entity) -> bool {
    if old == new || !is_alive(world, new) || !set_active(world, old, false) {
        return false;
    }
    set_panel_open(world, old, false);
    remove_from_roster(world, old);
    add_to_roster(world, new);
    select(world, new);
    record(world, EditorCommand::Replaced { old, new });
    true
}

fn is_hidden(world: &World, entity: Entity) -> Option<bool> {
    world.get::<Hideable>(entity).map(|hideable| hideable.hidden)
}

pub fn hide_with_command(world: &mut World, entity: Entity) -> bool {
    if is_hidden(world, entity) != Some(false) {
        return false;
    }
    set_hidden(world, entity, true);
    record(world, EditorCommand::Hidden { entity });
    true
}

pub fn unhide_with_command(world: &mut World, entity: Entity) -> bool {
    if is_hidden(world, entity) != Some(true) {
        return false;
    }
    set_hidden(world, entity, false);
    record(world, EditorCommand::Unhidden { entity });
    true
}

/// Make an additional selection the group pivot; the old primary joins the
/// additional group.
pub fn change_pivot(world: &mut World, new_pivot: Entity) -> bool {
    let Some(selection) = world.get_resource::<Selection>() else {
        return false;
    };
    let Some(pre) = selection.current() else {
        return false;
    };
    if pre == new_pivot || !selection.additional().contains(&new_pivot) {
        return false;
    }

    if !select(world, new_pivot) {
        return false;
    }
    add_additional(world, pre, Some(new_pivot));
    record(
        world,
        EditorCommand::PivotChanged {
            post: new_pivot,
            pre,
        },
    );
    true
}

/// Spawn a concealer grouping `members` under it.
pub fn create_concealer(world: &mut World, members: &[Entity], transform: Transform) -> Entity {
    let concealer = world
        .spawn((
            Concealer::default(),
            Hideable::default(),
            ViewPanel::default(),
            transform,
        ))
        .id();

    let mut group = vec![concealer];
    group.extend(
        members
            .iter()
            .copied()
            .filter(|member| *member != concealer && is_alive(world, *member)),
    );
    for &member in &group {
        if member != concealer {
            set_parent(world, member, Some(concealer));
        }
        set_group(world, member, &group);
    }

    let command = EditorCommand::concealer_created(world, concealer);
    record(world, command);
    concealer
}

/// Move a concealer group's pivot to `new_pivot`, one of its members.
pub fn change_concealer_pivot(world: &mut World, new_pivot: Entity) -> bool {
    let Some(pre) = parent_of(world, new_pivot) else {
        return false;
    };
    let members = group_of(world, pre);
    if !members.contains(&new_pivot) {
        return false;
    }
    let command = EditorCommand::concealer_pivot_changed(world, pre);

    // Detach first so reparenting `pre` below cannot form a cycle
    set_parent(world, new_pivot, parent_of(world, pre));
    for &member in &members {
        if member != new_pivot {
            set_parent(world, member, Some(new_pivot));
        }
        set_group(world, member, &members);
    }
    select(world, new_pivot);
    record(world, command);
    true
}

/// Split a concealer group into standalone concealers.
pub fn separate_concealer(world: &mut World, concealer: Entity) -> bool {
    if world.get::<Concealer>(concealer).is_none() {
        return false;
    }
    let members = group_of(world, concealer);
    if members.len() < 2 {
        return false;
    }
    let command = EditorCommand::concealer_separated(world, concealer);
    let scene_root = parent_of(world, concealer);

    for &member in &members {
        if member == concealer {
            continue;
        }
        set_parent(world, member, scene_root);
        set_group(world, member, &[member]);
    }
    set_group(world, concealer, &[concealer]);
    record(world, command);
    true
}
