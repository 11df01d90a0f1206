//! Navigation tools and their keyboard shortcuts.

use bevy::prelude::*;

use super::selection::Selection;

/// Drag tool driving what a click on a scene object does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationTool {
    Empty,
    #[default]
    Movement,
    Rotation,
    Snap,
    Remove,
}

impl NavigationTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            NavigationTool::Empty => "None (Esc)",
            NavigationTool::Movement => "Move (V)",
            NavigationTool::Rotation => "Rotate (R)",
            NavigationTool::Snap => "Snap (G)",
            NavigationTool::Remove => "Remove (X)",
        }
    }

    /// Whether clicking with this tool changes the selection.
    pub fn selects(&self) -> bool {
        matches!(
            self,
            NavigationTool::Movement | NavigationTool::Rotation | NavigationTool::Remove
        )
    }
}

#[derive(Resource, Default)]
pub struct CurrentTool {
    pub tool: NavigationTool,
}

pub fn handle_tool_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut current_tool: ResMut<CurrentTool>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl {
        return;
    }

    let new_tool = if keyboard.just_pressed(KeyCode::Escape) {
        Some(NavigationTool::Empty)
    } else if keyboard.just_pressed(KeyCode::KeyV) {
        Some(NavigationTool::Movement)
    } else if keyboard.just_pressed(KeyCode::KeyR) {
        Some(NavigationTool::Rotation)
    } else if keyboard.just_pressed(KeyCode::KeyG) {
        Some(NavigationTool::Snap)
    } else if keyboard.just_pressed(KeyCode::KeyX) {
        Some(NavigationTool::Remove)
    } else {
        None
    };

    if let Some(tool) = new_tool
        && tool != current_tool.tool
    {
        info!("Switched to {} tool", tool.display_name());
        current_tool.tool = tool;
    }
}

/// Holding Shift puts clicks into addition mode.
pub fn track_addition_mode(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
) {
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    if selection.addition_mode() != shift {
        selection.set_addition_mode(shift);
    }
}
