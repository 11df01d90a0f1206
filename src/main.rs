use bevy::input::InputPlugin;
use bevy::prelude::*;

use scene_history::editor::edits::{create_machines, move_entity, rotate_entity, select_with_command};
use scene_history::editor::history::UndoRequest;
use scene_history::editor::removal::RemoveSelectedRequest;
use scene_history::editor::selection::add_additional;
use scene_history::scene::is_active;
use scene_history::{CommandHistory, ConfigPlugin, EditorPlugin};

/// Set up stdout and file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    use scene_history::constants::LOG_FILE_NAME;
    use scene_history::paths;

    if let Err(e) = paths::ensure_directories() {
        eprintln!("Failed to create log directories: {e}");
        return None;
    }

    let logs_dir = paths::logs_dir();
    let log_file_path = logs_dir.join(LOG_FILE_NAME);

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure file layer (no ANSI colors for file output)
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,scene_history=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    None
}

fn log_history(app: &App, step: &str) {
    let history = app.world().resource::<CommandHistory>();
    let labels: Vec<&str> = history.labels().collect();
    info!(
        "{step}: {} of {} commands {:?}",
        history.undo_count(),
        history.capacity(),
        labels
    );
}

/// Headless editing session: place, select, move, rotate and remove machines,
/// then undo everything back.
fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();

    let mut app = App::new();
    app.add_plugins(InputPlugin)
        .add_plugins(ConfigPlugin)
        .add_plugins(EditorPlugin);
    app.update();

    let world = app.world_mut();
    let machines = create_machines(
        world,
        &[
            Transform::from_xyz(0.0, 0.0, 0.0),
            Transform::from_xyz(4.0, 0.0, 0.0),
            Transform::from_xyz(8.0, 0.0, 0.0),
        ],
    );
    select_with_command(world, machines[0]);
    move_entity(world, machines[0], Vec3::new(0.0, 0.0, 6.0));
    rotate_entity(world, machines[0], Quat::from_rotation_y(90f32.to_radians()));
    for &machine in &machines[1..] {
        add_additional(world, machine, Some(machines[0]));
    }
    log_history(&app, "After edits");

    app.world_mut()
        .resource_mut::<Messages<RemoveSelectedRequest>>()
        .write(RemoveSelectedRequest);
    app.update();
    let active = machines
        .iter()
        .filter(|machine| is_active(app.world(), **machine))
        .count();
    info!("Active machines after removal: {active}");
    log_history(&app, "After removal");

    while app.world().resource::<CommandHistory>().can_undo() {
        app.world_mut()
            .resource_mut::<Messages<UndoRequest>>()
            .write(UndoRequest);
        app.update();
    }
    log_history(&app, "After undoing everything");
}
