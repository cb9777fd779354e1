//! Smart Signal Library
//!
//! A simulated traffic signal dashboard that can run headless or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
