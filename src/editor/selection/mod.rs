//! Selection module for the editor.
//!
//! Holds the [`Selection`] resource and the operations other modules (and
//! undo commands) use to change it:
//! - primary selection: [`select`], [`release`]
//! - additional selection group: [`add_additional`], [`remove_additional`],
//!   [`revert_pivot`]
//! - tool-driven selection: [`strategy`]

pub mod strategy;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::scene::{Selected, is_alive};

pub use strategy::{SelectRequest, ToolSelection, apply_select_requests, apply_selection_strategy};

/// Current primary selection plus the additional multi-select group.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    current: Option<Entity>,
    additional: Vec<Entity>,
    /// Anchor the additional group moves relative to
    pivot: Option<Entity>,
    /// Whether clicks add to the additional group instead of replacing the selection
    addition_mode: bool,
}

impl Selection {
    pub fn current(&self) -> Option<Entity> {
        self.current
    }

    pub fn additional(&self) -> &[Entity] {
        &self.additional
    }

    pub fn pivot(&self) -> Option<Entity> {
        self.pivot
    }

    pub fn is_selected(&self, entity: Entity) -> bool {
        self.current == Some(entity) || self.additional.contains(&entity)
    }

    pub fn addition_mode(&self) -> bool {
        self.addition_mode
    }

    pub fn set_addition_mode(&mut self, active: bool) {
        self.addition_mode = active;
    }

    /// Primary selection followed by the additional group, in selection order.
    pub fn batch(&self) -> Vec<Entity> {
        self.current
            .iter()
            .chain(self.additional.iter())
            .copied()
            .collect()
    }
}

/// Primary selection, `None` when nothing is selected or no selection is registered.
pub fn current_selection(world: &World) -> Option<Entity> {
    world.get_resource::<Selection>().and_then(Selection::current)
}

fn mark_selected(world: &mut World, entity: Entity) {
    if let Ok(mut entity_mut) = world.get_entity_mut(entity) {
        entity_mut.insert(Selected);
    }
}

fn unmark_selected(world: &mut World, entity: Entity) {
    if let Ok(mut entity_mut) = world.get_entity_mut(entity) {
        entity_mut.remove::<Selected>();
    }
}

/// Make `entity` the primary selection. The additional group is kept; an
/// entity from outside the group becomes its new pivot.
pub fn select(world: &mut World, entity: Entity) -> bool {
    if !is_alive(world, entity) {
        debug!("Cannot select despawned {entity}");
        return false;
    }

    let (previous, previous_still_selected) = {
        let Some(mut selection) = world.get_resource_mut::<Selection>() else {
            warn!("No selection registered, cannot select {entity}");
            return false;
        };
        let in_group =
            selection.additional.contains(&entity) || selection.pivot == Some(entity);
        let previous = selection.current.replace(entity);
        selection.additional.retain(|e| *e != entity);
        if !in_group {
            // A primary from outside the group anchors whatever group remains
            selection.pivot = (!selection.additional.is_empty()).then_some(entity);
        }
        (previous, previous.is_some_and(|p| selection.is_selected(p)))
    };

    if let Some(previous) = previous
        && !previous_still_selected
    {
        unmark_selected(world, previous);
    }
    mark_selected(world, entity);
    true
}

/// Drop the whole selection, primary and additional.
pub fn release(world: &mut World) {
    let released = {
        let Some(mut selection) = world.get_resource_mut::<Selection>() else {
            return;
        };
        let released = selection.batch();
        selection.current = None;
        selection.additional.clear();
        selection.pivot = None;
        released
    };

    for entity in released {
        unmark_selected(world, entity);
    }
}

/// Add `entity` to the additional group anchored on `anchor`.
///
/// The primary selection is never also an additional one.
pub fn add_additional(world: &mut World, entity: Entity, anchor: Option<Entity>) -> bool {
    if !is_alive(world, entity) {
        debug!("Cannot add despawned {entity} to the selection");
        return false;
    }
    let anchor = anchor.filter(|a| is_alive(world, *a));

    {
        let Some(mut selection) = world.get_resource_mut::<Selection>() else {
            warn!("No selection registered, cannot add {entity}");
            return false;
        };
        if selection.current == Some(entity) {
            return false;
        }
        if !selection.additional.contains(&entity) {
            selection.additional.push(entity);
        }
        if anchor.is_some() {
            selection.pivot = anchor;
        }
    }

    mark_selected(world, entity);
    true
}

/// Take `entity` out of the additional group. Works for despawned entities too.
pub fn remove_additional(world: &mut World, entity: Entity) -> bool {
    let (removed, still_primary) = {
        let Some(mut selection) = world.get_resource_mut::<Selection>() else {
            return false;
        };
        let before = selection.additional.len();
        selection.additional.retain(|e| *e != entity);
        (
            selection.additional.len() != before,
            selection.current == Some(entity),
        )
    };

    if removed && !still_primary {
        unmark_selected(world, entity);
    }
    removed
}

/// Make `pre_pivot` the anchor of the additional group again.
pub fn revert_pivot(world: &mut World, pre_pivot: Entity) -> bool {
    if !is_alive(world, pre_pivot) {
        debug!("Cannot revert pivot to despawned {pre_pivot}");
        return false;
    }
    let Some(mut selection) = world.get_resource_mut::<Selection>() else {
        return false;
    };
    selection.pivot = Some(pre_pivot);
    selection.additional.retain(|e| *e != pre_pivot);
    true
}
