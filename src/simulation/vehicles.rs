//! Simulated vehicle counts per approach
//!
//! Counts follow a bounded random walk: each jitter moves a count by at most
//! two vehicles in either direction and never below zero.

use rand::Rng;

use super::types::{clamp_to_u32, Direction, DirectionMap};

/// Largest change a single jitter can apply
pub const MAX_JITTER: i64 = 2;

/// Nudge a count by a uniform delta in `-2..=2`, floored at zero
pub fn jitter<R: Rng>(count: u32, rng: &mut R) -> u32 {
    let delta = rng.random_range(0..=2 * MAX_JITTER) - MAX_JITTER;
    clamp_to_u32(count as i64 + delta)
}

/// Vehicles waiting on each approach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleCounts {
    counts: DirectionMap<u32>,
}

impl Default for VehicleCounts {
    fn default() -> Self {
        Self::initial()
    }
}

impl VehicleCounts {
    pub fn new(counts: DirectionMap<u32>) -> Self {
        Self { counts }
    }

    /// Counts shown when a session starts
    pub fn initial() -> Self {
        Self::new(DirectionMap::from_fn(|direction| match direction {
            Direction::North => 12,
            Direction::South => 8,
            Direction::East => 15,
            Direction::West => 6,
        }))
    }

    pub fn get(&self, direction: Direction) -> u32 {
        self.counts[direction]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &u32)> {
        self.counts.iter()
    }

    /// Apply an independent jitter to every direction
    pub fn jitter_all<R: Rng>(&mut self, rng: &mut R) {
        for (_, count) in self.counts.iter_mut() {
            *count = jitter(*count, rng);
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Vehicles held on every approach except `priority`
    pub fn delayed_excluding(&self, priority: Direction) -> u32 {
        self.counts
            .iter()
            .filter(|(direction, _)| *direction != priority)
            .map(|(_, count)| *count)
            .sum()
    }

    /// Mean vehicles per approach
    pub fn average(&self) -> f32 {
        self.total() as f32 / Direction::ALL.len() as f32
    }
}
