//! UI components and resources for linking Bevy entities to session state

use bevy::prelude::*;

use crate::simulation::{DashboardSession, Direction, SignalColor};

/// Resource wrapper for the mounted dashboard session
#[derive(Resource)]
pub struct SessionResource(pub DashboardSession);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Text row showing one approach's signal and queue
#[derive(Component)]
pub struct SignalRow(pub Direction);

/// Marker for status text elements below the signal rows
#[derive(Component)]
pub enum StatusText {
    /// Emergency override state
    Emergency,
    /// Total and delayed vehicles
    Vehicles,
    /// Session clock
    Clock,
}

/// Display color of a signal lamp
pub fn lamp_color(color: SignalColor) -> Color {
    match color {
        SignalColor::Red => Color::srgb(0.95, 0.2, 0.2),
        SignalColor::Yellow => Color::srgb(1.0, 0.85, 0.1),
        SignalColor::Green => Color::srgb(0.2, 0.9, 0.3),
    }
}
