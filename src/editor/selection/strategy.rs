//! Per-tool selection behaviour.
//!
//! A click on a scene object arrives as a [`SelectRequest`]. The active
//! [`NavigationTool`] decides what happens to the selection, and the outcome
//! is published as a [`ToolSelection`] message for the tool's drag handler.

use bevy::prelude::*;

use crate::common::{drain, publish};
use crate::editor::edits::{add_additional_with_command, select_with_command};
use crate::editor::tools::{CurrentTool, NavigationTool};

use super::{Selection, current_selection};

/// A scene object (or empty space, for `None`) was clicked.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectRequest {
    pub target: Option<Entity>,
}

/// Selection outcome of a click under the active tool.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSelection {
    pub tool: NavigationTool,
    /// Primary selection after the click
    pub selected: Option<Entity>,
    /// Whether the click went to the additional group
    pub additive: bool,
}

/// Apply a click on `target` according to the current tool.
///
/// Returns the published outcome, or `None` when the tool ignores clicks.
pub fn apply_selection_strategy(world: &mut World, target: Option<Entity>) -> Option<ToolSelection> {
    let tool = world
        .get_resource::<CurrentTool>()
        .map(|current| current.tool)
        .unwrap_or_default();

    if tool == NavigationTool::Empty {
        return None;
    }

    let outcome = if tool.selects() {
        let additive = world
            .get_resource::<Selection>()
            .is_some_and(Selection::addition_mode);
        if let Some(target) = target {
            if additive {
                add_additional_with_command(world, target);
            } else {
                select_with_command(world, target);
            }
        }
        ToolSelection {
            tool,
            selected: current_selection(world),
            additive,
        }
    } else {
        // Snap leaves the selection alone
        ToolSelection {
            tool,
            selected: None,
            additive: false,
        }
    };

    publish(world, outcome);
    Some(outcome)
}

/// Exclusive system applying queued clicks in arrival order.
pub fn apply_select_requests(world: &mut World) {
    for request in drain::<SelectRequest>(world) {
        apply_selection_strategy(world, request.target);
    }
}
