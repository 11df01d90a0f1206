//! Scene objects the editor manipulates.
//!
//! Entities are plain Bevy entities carrying the components below. Undo
//! commands never own them: every access goes through the liveness-checked
//! helpers in [`activation`], so a despawned entity turns a restore step into
//! a no-op instead of a panic.

pub mod activation;
mod components;


pub use activation::{
    add_to_roster, group_of, is_active, is_alive, parent_of, remove_from_roster, set_active,
    set_group, set_hidden, set_panel_open, set_parent,
};
pub use components::{
    Concealer, Hideable, Inactive, Machine, SceneRoot, Selected, SelectionRoster, ViewPanel,
};
