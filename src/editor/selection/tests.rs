//! Unit tests for the selection module.

use bevy::prelude::*;

use super::*;
use crate::editor::history::CommandHistory;
use crate::editor::tools::{CurrentTool, NavigationTool};
use crate::scene::Machine;

fn selection_world() -> World {
    let mut world = World::new();
    world.init_resource::<Selection>();
    world.init_resource::<CommandHistory>();
    world.init_resource::<CurrentTool>();
    world.init_resource::<Messages<ToolSelection>>();
    world.init_resource::<Messages<SelectRequest>>();
    world
}

fn use_tool(world: &mut World, tool: NavigationTool) {
    world.resource_mut::<CurrentTool>().tool = tool;
}

fn published(world: &mut World) -> Vec<ToolSelection> {
    world
        .resource_mut::<Messages<ToolSelection>>()
        .drain()
        .collect()
}

fn is_marked(world: &World, entity: Entity) -> bool {
    world.get::<Selected>(entity).is_some()
}

#[test]
fn test_select_marks_entity() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();

    assert!(select(&mut world, a));
    assert!(is_marked(&world, a));

    assert!(select(&mut world, b));
    assert!(!is_marked(&world, a));
    assert!(is_marked(&world, b));
    assert_eq!(world.resource::<Selection>().current(), Some(b));
}

#[test]
fn test_select_despawned_entity_fails() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    world.despawn(a);

    assert!(!select(&mut world, a));
    assert_eq!(world.resource::<Selection>().current(), None);
}

#[test]
fn test_select_additional_promotes_it() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    select(&mut world, a);
    add_additional(&mut world, b, Some(a));

    select(&mut world, b);
    let selection = world.resource::<Selection>();
    assert_eq!(selection.current(), Some(b));
    assert!(selection.additional().is_empty());
    assert!(!is_marked(&world, a));
}

#[test]
fn test_select_outside_group_takes_over_pivot() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    let c = world.spawn(Machine).id();
    select(&mut world, a);
    add_additional(&mut world, b, Some(a));

    select(&mut world, c);
    let selection = world.resource::<Selection>();
    assert_eq!(selection.pivot(), Some(c));
    assert_eq!(selection.additional(), &[b]);
}

#[test]
fn test_select_without_group_has_no_pivot() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    select(&mut world, a);
    add_additional(&mut world, b, Some(a));
    remove_additional(&mut world, b);

    select(&mut world, b);
    assert_eq!(world.resource::<Selection>().pivot(), None);
}

#[test]
fn test_helpers_without_selection_resource() {
    let mut world = World::new();
    let a = world.spawn(Machine).id();

    assert!(!select(&mut world, a));
    assert!(!add_additional(&mut world, a, None));
    assert!(!remove_additional(&mut world, a));
    assert!(!revert_pivot(&mut world, a));
    release(&mut world);
    assert_eq!(current_selection(&world), None);
    assert!(!is_marked(&world, a));
}

#[test]
fn test_release_clears_everything() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    select(&mut world, a);
    add_additional(&mut world, b, Some(a));

    release(&mut world);
    let selection = world.resource::<Selection>();
    assert_eq!(selection.current(), None);
    assert!(selection.additional().is_empty());
    assert_eq!(selection.pivot(), None);
    assert!(!is_marked(&world, a));
    assert!(!is_marked(&world, b));
}

#[test]
fn test_add_additional_rules() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    let gone = world.spawn(Machine).id();
    world.despawn(gone);
    select(&mut world, a);

    assert!(!add_additional(&mut world, a, None));
    assert!(!add_additional(&mut world, gone, Some(a)));

    assert!(add_additional(&mut world, b, Some(gone)));
    assert_eq!(world.resource::<Selection>().pivot(), None);

    assert!(add_additional(&mut world, b, Some(a)));
    let selection = world.resource::<Selection>();
    assert_eq!(selection.additional(), &[b]);
    assert_eq!(selection.pivot(), Some(a));
    assert_eq!(selection.batch(), vec![a, b]);
    assert!(is_marked(&world, b));
}

#[test]
fn test_remove_additional_accepts_despawned() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    select(&mut world, a);
    add_additional(&mut world, b, Some(a));

    world.despawn(b);
    assert!(remove_additional(&mut world, b));
    assert!(!remove_additional(&mut world, b));
    assert!(world.resource::<Selection>().additional().is_empty());
}

#[test]
fn test_revert_pivot() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    select(&mut world, b);
    add_additional(&mut world, a, Some(b));

    assert!(revert_pivot(&mut world, a));
    let selection = world.resource::<Selection>();
    assert_eq!(selection.pivot(), Some(a));
    assert!(selection.additional().is_empty());
}

// =========================================================================
// Tool strategies
// =========================================================================

#[test]
fn test_empty_tool_ignores_clicks() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    use_tool(&mut world, NavigationTool::Empty);

    assert_eq!(apply_selection_strategy(&mut world, Some(a)), None);
    assert_eq!(world.resource::<Selection>().current(), None);
    assert!(published(&mut world).is_empty());
}

#[test]
fn test_movement_tool_selects_and_records() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();

    let outcome = apply_selection_strategy(&mut world, Some(a));
    let expected = ToolSelection {
        tool: NavigationTool::Movement,
        selected: Some(a),
        additive: false,
    };
    assert_eq!(outcome, Some(expected));
    assert_eq!(published(&mut world), vec![expected]);
    assert_eq!(world.resource::<CommandHistory>().undo_count(), 1);
}

#[test]
fn test_addition_mode_adds_to_group() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    use_tool(&mut world, NavigationTool::Rotation);
    apply_selection_strategy(&mut world, Some(a));

    world.resource_mut::<Selection>().set_addition_mode(true);
    let outcome = apply_selection_strategy(&mut world, Some(b));

    assert_eq!(outcome.map(|o| o.additive), Some(true));
    assert_eq!(outcome.and_then(|o| o.selected), Some(a));
    assert_eq!(world.resource::<Selection>().additional(), &[b]);
}

#[test]
fn test_snap_tool_leaves_selection() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    use_tool(&mut world, NavigationTool::Snap);

    let outcome = apply_selection_strategy(&mut world, Some(a));
    assert_eq!(outcome.and_then(|o| o.selected), None);
    assert_eq!(world.resource::<Selection>().current(), None);
    assert_eq!(published(&mut world).len(), 1);
}

#[test]
fn test_select_requests_apply_in_order() {
    let mut world = selection_world();
    let a = world.spawn(Machine).id();
    let b = world.spawn(Machine).id();
    {
        let mut requests = world.resource_mut::<Messages<SelectRequest>>();
        requests.write(SelectRequest { target: Some(a) });
        requests.write(SelectRequest { target: Some(b) });
    }

    apply_select_requests(&mut world);
    assert_eq!(world.resource::<Selection>().current(), Some(b));
    assert_eq!(world.resource::<CommandHistory>().undo_count(), 2);
    assert_eq!(published(&mut world).len(), 2);
}
