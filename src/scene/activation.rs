//! Liveness-checked entity access.
//!
//! Each helper returns `false` (or an empty value) when the entity no longer
//! exists. Callers restoring state treat that as "already gone" and move on.

use bevy::prelude::*;

use super::components::{Concealer, Hideable, Inactive, SelectionRoster, ViewPanel};

/// Whether the entity still exists in the world. Deactivated entities are alive.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world.get_entity(entity).is_ok()
}

/// Whether the entity exists and has not been deactivated.
pub fn is_active(world: &World, entity: Entity) -> bool {
    world
        .get_entity(entity)
        .is_ok_and(|entity_ref| !entity_ref.contains::<Inactive>())
}

pub fn set_active(world: &mut World, entity: Entity, active: bool) -> bool {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        debug!("Skipping activation change for despawned {entity}");
        return false;
    };
    if active {
        entity_mut.remove::<Inactive>();
    } else {
        entity_mut.insert(Inactive);
    }
    true
}

/// Open or close the entity's view panel. Entities without a panel are left as is.
pub fn set_panel_open(world: &mut World, entity: Entity, open: bool) -> bool {
    if !is_alive(world, entity) {
        debug!("Skipping panel change for despawned {entity}");
        return false;
    }
    if let Some(mut panel) = world.get_mut::<ViewPanel>(entity) {
        panel.open = open;
    }
    true
}

pub fn set_hidden(world: &mut World, entity: Entity, hidden: bool) -> bool {
    match world.get_mut::<Hideable>(entity) {
        Some(mut hideable) => {
            hideable.hidden = hidden;
            true
        }
        None => {
            debug!("{entity} is not a live hideable object");
            false
        }
    }
}

/// Parent `child` under `parent`, or detach it when `parent` is `None`.
///
/// Fails without side effects if either entity is gone or the two are the same.
pub fn set_parent(world: &mut World, child: Entity, parent: Option<Entity>) -> bool {
    if let Some(parent) = parent
        && (parent == child || !is_alive(world, parent))
    {
        debug!("Cannot parent {child} under {parent}");
        return false;
    }
    let Ok(mut entity_mut) = world.get_entity_mut(child) else {
        debug!("Skipping reparent of despawned {child}");
        return false;
    };
    match parent {
        Some(parent) => {
            entity_mut.insert(ChildOf(parent));
        }
        None => {
            entity_mut.remove::<ChildOf>();
        }
    }
    true
}

pub fn parent_of(world: &World, entity: Entity) -> Option<Entity> {
    world.get::<ChildOf>(entity).map(|child_of| child_of.parent())
}

/// Current member list of a concealer group, empty if `concealer` is not one.
pub fn group_of(world: &World, concealer: Entity) -> Vec<Entity> {
    world
        .get::<Concealer>(concealer)
        .map(|concealer| concealer.group.clone())
        .unwrap_or_default()
}

pub fn set_group(world: &mut World, concealer: Entity, members: &[Entity]) -> bool {
    match world.get_mut::<Concealer>(concealer) {
        Some(mut group) => {
            group.group = members.to_vec();
            true
        }
        None => false,
    }
}

pub fn add_to_roster(world: &mut World, entity: Entity) {
    if is_alive(world, entity)
        && let Some(mut roster) = world.get_resource_mut::<SelectionRoster>()
    {
        roster.add(entity);
    }
}

pub fn remove_from_roster(world: &mut World, entity: Entity) {
    if let Some(mut roster) = world.get_resource_mut::<SelectionRoster>() {
        roster.remove(entity);
    }
}
