pub mod edits;
pub mod history;
pub mod removal;
pub mod selection;
pub mod tools;


pub use history::{CommandHistory, EditorCommand, EvictionPolicy, UndoCommand, record, undo_last};
pub use selection::Selection;
pub use tools::{CurrentTool, NavigationTool};

use bevy::prelude::*;

use crate::scene::SelectionRoster;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<history::CommandHistory>()
            .init_resource::<selection::Selection>()
            .init_resource::<tools::CurrentTool>()
            .init_resource::<SelectionRoster>()
            .add_message::<history::UndoRequest>()
            .add_message::<history::HistoryEvent>()
            .add_message::<removal::RemoveSelectedRequest>()
            .add_message::<removal::EntityRemoved>()
            .add_message::<selection::SelectRequest>()
            .add_message::<selection::ToolSelection>()
            .add_systems(
                Update,
                (
                    tools::handle_tool_shortcuts,
                    tools::track_addition_mode,
                    history::handle_undo_shortcut,
                    removal::handle_delete_shortcut,
                    selection::apply_select_requests,
                    removal::apply_remove_requests,
                    history::apply_undo_requests,
                )
                    .chain(),
            );
    }
}
