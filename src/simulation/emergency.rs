//! Emergency override for priority vehicles
//!
//! When an emergency is detected the approach it arrives on gets a held
//! green and every other approach is held on red. The regular countdown is
//! suspended until the override is cleared.

use anyhow::{bail, Result};
use log::info;
use std::collections::VecDeque;
use std::time::Duration;

use super::signal::{SignalBoard, SignalTimings};
use super::types::{Direction, SignalColor, SignalState};
use super::vehicles::VehicleCounts;

/// Samples kept by [`EmergencyLog`]
pub const EMERGENCY_LOG_CAPACITY: usize = 32;

/// Active override state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmergencyOverride {
    priority: Option<Direction>,
}

impl EmergencyOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(&self) -> Option<Direction> {
        self.priority
    }

    pub fn is_active(&self) -> bool {
        self.priority.is_some()
    }

    /// Hold `direction` on green and every other approach on red
    pub fn activate(&mut self, board: &mut SignalBoard, direction: Direction) -> Result<()> {
        match self.priority {
            Some(current) if current == direction => return Ok(()),
            Some(current) => bail!(
                "Emergency override already active for {}, cannot switch to {}",
                current.bound_label(),
                direction.bound_label()
            ),
            None => {}
        }

        for other in Direction::ALL {
            let color = if other == direction {
                SignalColor::Green
            } else {
                SignalColor::Red
            };
            board.set(other, SignalState::new(color, 0));
        }
        self.priority = Some(direction);
        info!("Emergency override active: priority {}", direction.bound_label());
        Ok(())
    }

    /// Release the override and resume regular cycling.
    ///
    /// The priority approach keeps its green at zero so its next tick moves
    /// it to yellow; the others restart a full red.
    pub fn clear(&mut self, board: &mut SignalBoard, timings: &SignalTimings) {
        let Some(priority) = self.priority.take() else {
            return;
        };

        let red = SignalState::new(SignalColor::Red, timings.duration_for(SignalColor::Red));
        for other in Direction::ALL.into_iter().filter(|d| *d != priority) {
            board.set(other, red);
        }
        info!("Emergency override cleared for {}", priority.bound_label());
    }
}

/// One point of the emergency congestion history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergencySample {
    /// Session time the sample was taken at
    pub elapsed: Duration,
    /// Vehicles held on non-priority approaches
    pub delayed_vehicles: u32,
    pub total_vehicles: u32,
}

impl EmergencySample {
    pub fn capture(elapsed: Duration, priority: Direction, vehicles: &VehicleCounts) -> Self {
        Self {
            elapsed,
            delayed_vehicles: vehicles.delayed_excluding(priority),
            total_vehicles: vehicles.total(),
        }
    }

    /// `mm:ss` label of the sample time
    pub fn time_label(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Rolling history of congestion while an override is held
#[derive(Debug, Clone, Default)]
pub struct EmergencyLog {
    samples: VecDeque<EmergencySample>,
}

impl EmergencyLog {
    pub fn record(&mut self, sample: EmergencySample) {
        if self.samples.len() == EMERGENCY_LOG_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&EmergencySample> {
        self.samples.back()
    }

    pub fn samples(&self) -> impl Iterator<Item = &EmergencySample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Highest delayed-vehicle count seen so far
    pub fn peak_delayed(&self) -> Option<u32> {
        self.samples.iter().map(|s| s.delayed_vehicles).max()
    }
}
