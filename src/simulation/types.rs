//! Core types for the signal simulation
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Compass direction of an approach into the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in display order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Short upper-case name used on the map and in summaries
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }

    /// Label of the traffic flow heading this way
    pub fn bound_label(self) -> &'static str {
        match self {
            Direction::North => "Northbound",
            Direction::South => "Southbound",
            Direction::East => "Eastbound",
            Direction::West => "Westbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color shown by a signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalColor {
    Red,
    Yellow,
    Green,
}

impl SignalColor {
    pub fn name(self) -> &'static str {
        match self {
            SignalColor::Red => "RED",
            SignalColor::Yellow => "YELLOW",
            SignalColor::Green => "GREEN",
        }
    }

    /// Single-character lamp used by the ASCII map
    pub fn lamp(self) -> char {
        match self {
            SignalColor::Red => 'R',
            SignalColor::Yellow => 'Y',
            SignalColor::Green => 'G',
        }
    }
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color and countdown of one signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalState {
    pub color: SignalColor,
    pub remaining_seconds: u32,
}

impl SignalState {
    pub fn new(color: SignalColor, remaining_seconds: u32) -> Self {
        Self {
            color,
            remaining_seconds,
        }
    }

    /// Build a state from a signed countdown, clamping negatives to zero
    pub fn clamped(color: SignalColor, remaining_seconds: i64) -> Self {
        Self::new(color, clamp_to_u32(remaining_seconds))
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}s", self.color, self.remaining_seconds)
    }
}

/// Clamp a signed value into the non-negative `u32` range
pub fn clamp_to_u32(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

/// A fixed-size map holding one value per [`Direction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionMap<T>([T; 4]);

impl<T> DirectionMap<T> {
    /// Build a map by evaluating `f` once per direction
    pub fn from_fn(f: impl FnMut(Direction) -> T) -> Self {
        Self(Direction::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Direction, &mut T)> {
        Direction::ALL.into_iter().zip(self.0.iter_mut())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<Direction> for DirectionMap<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        &self.0[direction.index()]
    }
}

impl<T> IndexMut<Direction> for DirectionMap<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.0[direction.index()]
    }
}
