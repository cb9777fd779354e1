//! Signal timer logic for the simulation
//!
//! Each direction runs the same three-color countdown on its own. There is
//! no coordination between directions, so any combination of colors can be
//! shown at once.

use anyhow::{bail, Result};
use log::debug;

use super::types::{Direction, DirectionMap, SignalColor, SignalState};

/// Seconds spent on red before turning green
pub const DEFAULT_RED_SECONDS: u32 = 45;

/// Seconds spent on green before turning yellow
pub const DEFAULT_GREEN_SECONDS: u32 = 30;

/// Seconds spent on yellow before turning red
pub const DEFAULT_YELLOW_SECONDS: u32 = 5;

/// Duration table for each signal color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTimings {
    pub red: u32,
    pub green: u32,
    pub yellow: u32,
}

impl Default for SignalTimings {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED_SECONDS,
            green: DEFAULT_GREEN_SECONDS,
            yellow: DEFAULT_YELLOW_SECONDS,
        }
    }
}

impl SignalTimings {
    pub fn new(red: u32, green: u32, yellow: u32) -> Result<Self> {
        let timings = Self { red, green, yellow };
        timings.validate()?;
        Ok(timings)
    }

    /// Reject tables where a color would never be visible
    pub fn validate(&self) -> Result<()> {
        for color in [SignalColor::Red, SignalColor::Green, SignalColor::Yellow] {
            if self.duration_for(color) == 0 {
                bail!("{} duration must be at least one second", color);
            }
        }
        Ok(())
    }

    /// Countdown assigned when a signal switches to `color`
    pub fn duration_for(&self, color: SignalColor) -> u32 {
        match color {
            SignalColor::Red => self.red,
            SignalColor::Green => self.green,
            SignalColor::Yellow => self.yellow,
        }
    }

    /// Number of ticks before a signal returns to the same state.
    ///
    /// A color with duration `d` is shown for `d + 1` ticks, since the
    /// countdown reaches zero before switching.
    pub fn cycle_period(&self) -> u32 {
        self.red + self.green + self.yellow + 3
    }
}

/// Next color in the fixed ring Red -> Green -> Yellow -> Red
pub fn transition(color: SignalColor) -> SignalColor {
    match color {
        SignalColor::Red => SignalColor::Green,
        SignalColor::Green => SignalColor::Yellow,
        SignalColor::Yellow => SignalColor::Red,
    }
}

/// Advance one signal by one second
pub fn tick(state: SignalState, timings: &SignalTimings) -> SignalState {
    if state.remaining_seconds > 0 {
        SignalState::new(state.color, state.remaining_seconds - 1)
    } else {
        let next = transition(state.color);
        SignalState::new(next, timings.duration_for(next))
    }
}

/// The signal heads of every approach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalBoard {
    states: DirectionMap<SignalState>,
}

impl Default for SignalBoard {
    fn default() -> Self {
        Self::initial()
    }
}

impl SignalBoard {
    pub fn new(states: DirectionMap<SignalState>) -> Self {
        Self { states }
    }

    /// Board shown when a session starts
    pub fn initial() -> Self {
        Self::new(DirectionMap::from_fn(|direction| match direction {
            Direction::North => SignalState::new(SignalColor::Red, 25),
            Direction::South => SignalState::new(SignalColor::Green, 18),
            Direction::East => SignalState::new(SignalColor::Red, 40),
            Direction::West => SignalState::new(SignalColor::Yellow, 3),
        }))
    }

    pub fn get(&self, direction: Direction) -> SignalState {
        self.states[direction]
    }

    pub fn set(&mut self, direction: Direction, state: SignalState) {
        self.states[direction] = state;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &SignalState)> {
        self.states.iter()
    }

    /// Tick every direction independently.
    /// Returns how many directions changed color.
    pub fn tick_all(&mut self, timings: &SignalTimings) -> usize {
        let mut transitions = 0;
        for (direction, state) in self.states.iter_mut() {
            let next = tick(*state, timings);
            if next.color != state.color {
                debug!(
                    "{} signal {} -> {} ({}s)",
                    direction, state.color, next.color, next.remaining_seconds
                );
                transitions += 1;
            }
            *state = next;
        }
        transitions
    }

    /// Count of directions currently showing `color`
    pub fn count_showing(&self, color: SignalColor) -> usize {
        self.states.values().filter(|s| s.color == color).count()
    }
}
