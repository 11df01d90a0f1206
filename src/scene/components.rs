use std::collections::HashSet;

use bevy::prelude::*;

/// A placeable factory machine.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Machine;

/// Info panel shown for a scene object while it is active.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPanel {
    pub open: bool,
}

impl Default for ViewPanel {
    fn default() -> Self {
        Self { open: true }
    }
}

/// Marks an entity that was removed from the scene but is kept alive so the
/// removal can be undone.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Inactive;

/// Marks every entity that is part of the current selection (primary or
/// additional).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Selected;

/// Visibility toggle for objects that can be hidden without being removed.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hideable {
    pub hidden: bool,
}

/// Volume grouping a set of objects under one pivot.
///
/// `group` lists every member, the concealer itself included.
#[derive(Component, Debug, Default, Clone, PartialEq, Eq)]
pub struct Concealer {
    pub group: Vec<Entity>,
}

/// The scene root that top-level objects are parented to.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneRoot;

/// Machines that take part in box (RTS-style) selection.
#[derive(Resource, Debug, Default)]
pub struct SelectionRoster {
    entries: HashSet<Entity>,
}

impl SelectionRoster {
    pub fn add(&mut self, entity: Entity) -> bool {
        self.entries.insert(entity)
    }

    pub fn remove(&mut self, entity: Entity) -> bool {
        self.entries.remove(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
