//! Camera and dashboard panel setup

use bevy::prelude::*;

use super::components::{MainCamera, SignalRow, StatusText};
use crate::simulation::Direction;

/// System to spawn the camera and the dashboard panel
pub fn setup_dashboard(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));

    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                padding: UiRect::all(Val::Px(16.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Signal Dashboard"),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            for direction in Direction::ALL {
                parent.spawn((
                    Text::new(direction.name()),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    SignalRow(direction),
                ));
            }

            spawn_status_text(parent, StatusText::Emergency, Color::srgb(1.0, 0.4, 0.4));
            spawn_status_text(parent, StatusText::Vehicles, Color::srgb(0.9, 0.9, 0.9));
            spawn_status_text(parent, StatusText::Clock, Color::srgb(0.6, 0.6, 0.6));
        });
}

fn spawn_status_text(
    parent: &mut bevy::ecs::hierarchy::ChildSpawnerCommands,
    status: StatusText,
    color: Color,
) {
    parent.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(color),
        status,
    ));
}
