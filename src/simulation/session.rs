//! Dashboard session that ties the simulators together
//!
//! A session owns all simulated state for one display. Mounting it starts
//! the signal and vehicle timers; dropping it releases them.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use super::emergency::{EmergencyLog, EmergencyOverride, EmergencySample};
use super::scheduler::{IntervalHandle, Scheduler};
use super::signal::{SignalBoard, SignalTimings};
use super::types::{Direction, SignalColor};
use super::vehicles::VehicleCounts;

/// Period of the signal countdown
pub const SIGNAL_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Period of the vehicle count jitter
pub const VEHICLE_JITTER_PERIOD: Duration = Duration::from_secs(3);

/// Settings a session is mounted with
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub timings: SignalTimings,
    pub signal_period: Duration,
    pub vehicle_period: Duration,
    /// Seed for reproducible vehicle counts
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timings: SignalTimings::default(),
            signal_period: SIGNAL_TICK_PERIOD,
            vehicle_period: VEHICLE_JITTER_PERIOD,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.timings.validate().context("Invalid signal timings")?;
        if self.signal_period.is_zero() || self.vehicle_period.is_zero() {
            bail!("Timer periods must be positive");
        }
        Ok(())
    }
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
    pub elapsed: Duration,
    pub signal_ticks: u32,
    pub frozen_ticks: u32,
    pub transitions: u32,
    pub jitters: u32,
    pub emergencies: u32,
}

/// State mutated by the session timers
pub struct SimState {
    pub signals: SignalBoard,
    pub vehicles: VehicleCounts,
    pub timings: SignalTimings,
    pub emergency: EmergencyOverride,
    pub emergency_log: EmergencyLog,
    /// Session clock as of the current advance
    clock: Duration,
    stats: SessionStats,
    rng: StdRng,
}

impl SimState {
    fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            signals: SignalBoard::initial(),
            vehicles: VehicleCounts::initial(),
            timings: config.timings,
            emergency: EmergencyOverride::new(),
            emergency_log: EmergencyLog::default(),
            clock: Duration::ZERO,
            stats: SessionStats::default(),
            rng,
        }
    }

    /// Count down every signal, unless an override holds them
    fn tick_signals(&mut self) {
        if self.emergency.is_active() {
            self.stats.frozen_ticks += 1;
            return;
        }
        let transitions = self.signals.tick_all(&self.timings);
        self.stats.signal_ticks += 1;
        self.stats.transitions += transitions as u32;
    }

    fn jitter_vehicles(&mut self) {
        self.vehicles.jitter_all(&mut self.rng);
        self.stats.jitters += 1;

        if let Some(priority) = self.emergency.priority() {
            self.emergency_log
                .record(EmergencySample::capture(self.clock, priority, &self.vehicles));
        }
    }
}

/// One mounted dashboard with its running timers
pub struct DashboardSession {
    state: SimState,
    scheduler: Scheduler<SimState>,
    timers: Vec<IntervalHandle>,
    elapsed: Duration,
}

impl DashboardSession {
    /// Build the initial state and start both timers
    pub fn mount(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let mut scheduler = Scheduler::new();
        let signal_timer = scheduler.every(
            "signal-tick",
            config.signal_period,
            |state: &mut SimState| state.tick_signals(),
        )?;

        let vehicle_timer = scheduler.every(
            "vehicle-jitter",
            config.vehicle_period,
            |state: &mut SimState| state.jitter_vehicles(),
        )?;

        debug!(
            "Mounted session: signal every {:?}, vehicles every {:?}, seed {:?}",
            config.signal_period, config.vehicle_period, config.seed
        );

        Ok(Self {
            state: SimState::new(config),
            scheduler,
            timers: vec![signal_timer, vehicle_timer],
            elapsed: Duration::ZERO,
        })
    }

    /// Feed elapsed wall-clock seconds to the timers.
    ///
    /// A zero delta is accepted and changes nothing, since frame-driven
    /// callers can report an empty first frame.
    pub fn advance(&mut self, delta_secs: f32) -> Result<()> {
        let delta = Duration::try_from_secs_f32(delta_secs)
            .with_context(|| format!("Cannot advance session by {} seconds", delta_secs))?;
        self.advance_by(delta);
        Ok(())
    }

    /// Feed an exact amount of elapsed time to the timers
    pub fn advance_by(&mut self, delta: Duration) {
        self.elapsed += delta;
        self.state.clock = self.elapsed;
        self.state.stats.elapsed = self.elapsed;
        self.scheduler.advance(&mut self.state, delta);
    }

    /// Give `direction` a held green and stop every other approach
    pub fn activate_emergency(&mut self, direction: Direction) -> Result<()> {
        let was_active = self.state.emergency.is_active();
        self.state
            .emergency
            .activate(&mut self.state.signals, direction)?;
        if !was_active {
            self.state.stats.emergencies += 1;
            let sample = EmergencySample::capture(self.elapsed, direction, &self.state.vehicles);
            self.state.emergency_log.record(sample);
        }
        Ok(())
    }

    pub fn clear_emergency(&mut self) {
        self.state
            .emergency
            .clear(&mut self.state.signals, &self.state.timings);
    }

    pub fn signals(&self) -> &SignalBoard {
        &self.state.signals
    }

    pub fn vehicles(&self) -> &VehicleCounts {
        &self.state.vehicles
    }

    pub fn timings(&self) -> &SignalTimings {
        &self.state.timings
    }

    pub fn emergency(&self) -> Option<Direction> {
        self.state.emergency.priority()
    }

    pub fn emergency_log(&self) -> &EmergencyLog {
        &self.state.emergency_log
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn stats(&self) -> SessionStats {
        self.state.stats
    }

    /// Timers still running for this session
    pub fn active_timers(&self) -> usize {
        self.timers.iter().filter(|t| !t.is_cancelled()).count()
    }

    /// Tear the session down, releasing its timers
    pub fn unmount(mut self) -> SessionStats {
        for timer in self.timers.drain(..) {
            debug!("Cancelling timer '{}'", timer.label());
            timer.cancel();
        }
        // Releases the cancelled registrations
        self.scheduler.advance(&mut self.state, Duration::ZERO);
        debug_assert_eq!(self.scheduler.active(), 0);

        let stats = self.state.stats;
        info!("=== SESSION COMPLETE ===");
        info!("Elapsed time: {:.2}s", stats.elapsed.as_secs_f64());
        info!("Signal ticks: {}", stats.signal_ticks);
        info!("Frozen ticks: {}", stats.frozen_ticks);
        info!("Color transitions: {}", stats.transitions);
        info!("Vehicle jitters: {}", stats.jitters);
        info!("Emergency overrides: {}", stats.emergencies);
        info!("Vehicles on approach: {}", self.state.vehicles.total());
        stats
    }

    /// Print a summary of the current session state
    pub fn print_summary(&self) {
        println!("=== Signal Dashboard Summary ===");
        println!("Time: {:.2}s", self.elapsed_secs());
        match self.emergency() {
            Some(priority) => println!("Emergency override: {}", priority.bound_label()),
            None => println!("Emergency override: inactive"),
        }
        println!(
            "Green: {}, Yellow: {}, Red: {}",
            self.signals().count_showing(SignalColor::Green),
            self.signals().count_showing(SignalColor::Yellow),
            self.signals().count_showing(SignalColor::Red)
        );
        println!("--- Approaches ---");
        for (direction, state) in self.signals().iter() {
            println!(
                "  {:<5} {:<6} {:>2}s  vehicles={}",
                direction.name(),
                state.color.name(),
                state.remaining_seconds,
                self.vehicles().get(direction)
            );
        }
        println!("Total vehicles: {}", self.vehicles().total());
    }

    /// Draw the intersection as ASCII art
    pub fn draw_map(&self) {
        println!("{}", self.render_map());
    }

    /// ASCII intersection with one lamp per approach
    pub fn render_map(&self) -> String {
        let label = |direction: Direction| {
            let state = self.signals().get(direction);
            format!(
                "{} [{}] {:>2}s ({:>2})",
                &direction.name()[..1],
                state.color.lamp(),
                state.remaining_seconds,
                self.vehicles().get(direction)
            )
        };

        let mut lines = Vec::new();
        lines.push(format!("{:>33}", label(Direction::North)));
        lines.push(format!("{:>21}", "|     |"));
        lines.push(format!("{:>21}", "|     |"));
        lines.push("  --------------+     +--------------".to_string());
        lines.push(format!("  {:<20}{:>16}", label(Direction::West), label(Direction::East)));
        lines.push("  --------------+     +--------------".to_string());
        lines.push(format!("{:>21}", "|     |"));
        lines.push(format!("{:>21}", "|     |"));
        lines.push(format!("{:>33}", label(Direction::South)));
        lines.join("\n")
    }
}

impl Drop for DashboardSession {
    fn drop(&mut self) {
        if !self.timers.is_empty() {
            debug!("Session dropped with {} live timers", self.timers.len());
        }
    }
}
