//! UI module that visualizes the session state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `DashboardSession` and renders it as a 2D text panel.

mod components;
mod sync;
mod world;

use bevy::log::error;
use bevy::prelude::*;

pub use components::SessionResource;

use crate::simulation::{DashboardSession, SimConfig};
use sync::{advance_session, handle_input, sync_signal_rows, update_status_text};
use world::setup_dashboard;

/// Plugin to register all UI systems
pub struct SmartSignalUIPlugin {
    pub config: SimConfig,
}

impl Plugin for SmartSignalUIPlugin {
    fn build(&self, app: &mut App) {
        let session = match DashboardSession::mount(&self.config) {
            Ok(session) => session,
            Err(err) => {
                error!("Failed to mount dashboard session: {err:#}");
                return;
            }
        };

        app.insert_resource(SessionResource(session))
            .add_systems(Startup, setup_dashboard)
            .add_systems(
                Update,
                (
                    advance_session,
                    sync_signal_rows.after(advance_session),
                    update_status_text.after(advance_session),
                    handle_input,
                )
                    .run_if(resource_exists::<SessionResource>),
            );
    }
}
