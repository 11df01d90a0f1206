//! Editor command enum for undo operations.

use std::fmt;

use bevy::prelude::*;

use crate::scene::{group_of, parent_of};

use super::execute::execute_undo;

/// Undo capability for command kinds defined outside this crate.
///
/// `undo` consumes the command: the history calls it exactly once, on pop.
pub trait UndoCommand: fmt::Debug + Send + Sync + 'static {
    fn undo(self: Box<Self>, world: &mut World);

    fn label(&self) -> &'static str {
        "custom"
    }
}

/// A reversible edit, holding the state from before the edit was applied.
#[derive(Debug)]
pub enum EditorCommand {
    /// The primary selection changed away from `previous`
    Select { previous: Option<Entity> },
    /// An entity was moved
    Move {
        entity: Entity,
        start: Vec3,
        /// Primary selection at the time of the move
        active: Option<Entity>,
    },
    /// An entity was rotated
    Rotate {
        entity: Entity,
        start: Quat,
        active: Option<Entity>,
    },
    /// Entities joined the additional selection
    AdditionalAdded { entities: Vec<Entity> },
    /// An entity left the additional selection anchored on `anchor`
    AdditionalRemoved {
        entity: Entity,
        anchor: Option<Entity>,
    },
    /// Machines were created
    Created { entities: Vec<Entity> },
    /// The selection was duplicated
    Duplicated {
        anchor: Option<Entity>,
        additionals: Vec<Entity>,
        duplicates: Vec<Entity>,
    },
    /// `old` was swapped out for `new`
    Replaced { old: Entity, new: Entity },
    /// A batch of machines was removed; `primary` held the selection focus
    Removed {
        primary: Entity,
        additionals: Vec<Entity>,
    },
    Hidden { entity: Entity },
    Unhidden { entity: Entity },
    /// The additional-selection pivot moved from `pre` to `post`
    PivotChanged { post: Entity, pre: Entity },
    ConcealerCreated {
        concealer: Entity,
        members: Vec<Entity>,
    },
    /// The concealer group pivot moved away from `pre`
    ConcealerPivotChanged { pre: Entity, members: Vec<Entity> },
    ConcealerRemoved {
        concealer: Entity,
        members: Vec<Entity>,
    },
    /// A concealer group was split into standalone concealers
    ConcealerSeparated {
        concealer: Entity,
        members: Vec<Entity>,
        scene_root: Option<Entity>,
    },
    Custom(Box<dyn UndoCommand>),
}

impl EditorCommand {
    /// Command for removing `batch` together. The first entity is the
    /// primary selection target; returns `None` for an empty batch.
    pub fn removed_batch(batch: &[Entity]) -> Option<Self> {
        let (&primary, additionals) = batch.split_first()?;
        Some(EditorCommand::Removed {
            primary,
            additionals: additionals.to_vec(),
        })
    }

    /// Snapshot for creating `concealer`. Call once the group is assembled.
    pub fn concealer_created(world: &World, concealer: Entity) -> Self {
        EditorCommand::ConcealerCreated {
            concealer,
            members: group_of(world, concealer),
        }
    }

    /// Snapshot for moving the concealer pivot away from `pre`. Call before the change.
    pub fn concealer_pivot_changed(world: &World, pre: Entity) -> Self {
        EditorCommand::ConcealerPivotChanged {
            pre,
            members: group_of(world, pre),
        }
    }

    /// Snapshot for removing `concealer`. Call before the removal.
    pub fn concealer_removed(world: &World, concealer: Entity) -> Self {
        EditorCommand::ConcealerRemoved {
            concealer,
            members: group_of(world, concealer),
        }
    }

    /// Snapshot for separating `concealer`'s group. Call before the split.
    pub fn concealer_separated(world: &World, concealer: Entity) -> Self {
        EditorCommand::ConcealerSeparated {
            concealer,
            members: group_of(world, concealer),
            scene_root: parent_of(world, concealer),
        }
    }

    pub fn custom(command: impl UndoCommand) -> Self {
        EditorCommand::Custom(Box::new(command))
    }

    /// Short name used in logs and history messages.
    pub fn label(&self) -> &'static str {
        match self {
            EditorCommand::Select { .. } => "select",
            EditorCommand::Move { .. } => "move",
            EditorCommand::Rotate { .. } => "rotate",
            EditorCommand::AdditionalAdded { .. } => "add to selection",
            EditorCommand::AdditionalRemoved { .. } => "remove from selection",
            EditorCommand::Created { .. } => "create",
            EditorCommand::Duplicated { .. } => "duplicate",
            EditorCommand::Replaced { .. } => "replace",
            EditorCommand::Removed { .. } => "remove",
            EditorCommand::Hidden { .. } => "hide",
            EditorCommand::Unhidden { .. } => "unhide",
            EditorCommand::PivotChanged { .. } => "change pivot",
            EditorCommand::ConcealerCreated { .. } => "create concealer",
            EditorCommand::ConcealerPivotChanged { .. } => "change concealer pivot",
            EditorCommand::ConcealerRemoved { .. } => "remove concealer",
            EditorCommand::ConcealerSeparated { .. } => "separate concealer",
            EditorCommand::Custom(command) => command.label(),
        }
    }

    /// Reverse the edit. Steps touching despawned entities are skipped.
    pub fn undo(self, world: &mut World) {
        execute_undo(self, world);
    }
}
