//! Helpers shared by the editor modules.

use bevy::prelude::*;

/// Write a message from exclusive code.
///
/// Messages whose type was never registered are dropped; a bare `World`
/// without the editor plugin still runs every edit and undo path.
pub(crate) fn publish<M: Message>(world: &mut World, message: M) {
    if let Some(mut messages) = world.get_resource_mut::<Messages<M>>() {
        messages.write(message);
    }
}

/// Take every pending message of one type out of the world.
pub(crate) fn drain<M: Message>(world: &mut World) -> Vec<M> {
    world
        .get_resource_mut::<Messages<M>>()
        .map(|mut messages| messages.drain().collect())
        .unwrap_or_default()
}
