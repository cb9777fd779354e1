//! Systems for syncing Bevy entities with session state

use bevy::log::{info, warn};
use bevy::prelude::*;

use super::components::{lamp_color, SessionResource, SignalRow, StatusText};
use crate::simulation::Direction;

/// System to feed frame time into the session timers
pub fn advance_session(time: Res<Time>, mut session: ResMut<SessionResource>) {
    if let Err(err) = session.0.advance(time.delta_secs()) {
        warn!("Failed to advance session: {err:#}");
    }
}

/// System to update each approach's text and lamp color
pub fn sync_signal_rows(
    session: Res<SessionResource>,
    mut rows: Query<(&SignalRow, &mut Text, &mut TextColor)>,
) {
    let session = &session.0;
    for (row, mut text, mut text_color) in rows.iter_mut() {
        let state = session.signals().get(row.0);
        **text = format!(
            "{:<6} {:<6} {:>2}s   vehicles: {}",
            row.0.name(),
            state.color.name(),
            state.remaining_seconds,
            session.vehicles().get(row.0)
        );
        text_color.0 = lamp_color(state.color);
    }
}

/// System to update the status lines
pub fn update_status_text(
    session: Res<SessionResource>,
    mut query: Query<(&StatusText, &mut Text)>,
) {
    let session = &session.0;
    for (status, mut text) in query.iter_mut() {
        match status {
            StatusText::Emergency => {
                **text = match session.emergency() {
                    Some(priority) => format!("EMERGENCY OVERRIDE: {}", priority.bound_label()),
                    None => "Emergency override: inactive".to_string(),
                };
            }
            StatusText::Vehicles => {
                let vehicles = session.vehicles();
                **text = match session.emergency() {
                    Some(priority) => format!(
                        "Total vehicles: {} | Delayed: {}",
                        vehicles.total(),
                        vehicles.delayed_excluding(priority)
                    ),
                    None => format!("Total vehicles: {}", vehicles.total()),
                };
            }
            StatusText::Clock => {
                **text = format!("Time: {:.1}s", session.elapsed_secs());
            }
        }
    }
}

/// Keyboard controls for the emergency override and exit
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SessionResource>,
    mut commands: Commands,
    mut exit: MessageWriter<AppExit>,
) {
    let requested = [
        (KeyCode::KeyN, Direction::North),
        (KeyCode::KeyS, Direction::South),
        (KeyCode::KeyE, Direction::East),
        (KeyCode::KeyW, Direction::West),
    ]
    .into_iter()
    .find(|(key, _)| keyboard.just_pressed(*key))
    .map(|(_, direction)| direction);

    if let Some(direction) = requested {
        if let Err(err) = session.0.activate_emergency(direction) {
            warn!("{err:#}");
        }
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        session.0.clear_emergency();
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        // Unmount before exit so the session timers are released
        commands.queue(|world: &mut World| {
            if let Some(SessionResource(session)) = world.remove_resource::<SessionResource>() {
                let stats = session.unmount();
                info!("Session unmounted after {:.1}s", stats.elapsed.as_secs_f64());
            }
        });
        exit.write(AppExit::Success);
    }
}
