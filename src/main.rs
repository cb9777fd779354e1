use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::time::Duration;

use smart_signal::simulation::{
    DashboardPage, DashboardSession, Direction, EmergencyPage, MetricsPage, SignalTimings,
    SimConfig, DEFAULT_GREEN_SECONDS, DEFAULT_RED_SECONDS, DEFAULT_YELLOW_SECONDS,
};

/// Headless page to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Page {
    /// Live signal states and vehicle counts
    Live,
    /// Summary cards and monthly overview
    Dashboard,
    /// Emergency override status and congestion history
    Emergency,
    /// Performance metric cards
    Metrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    North,
    South,
    East,
    West,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::North => Direction::North,
            DirectionArg::South => Direction::South,
            DirectionArg::East => Direction::East,
            DirectionArg::West => Direction::West,
        }
    }
}

#[derive(Parser)]
#[command(name = "smart_signal")]
#[command(about = "Simulated smart traffic signal dashboard with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Simulated seconds to run in headless mode
    #[arg(long, default_value = "60")]
    seconds: u32,

    /// Time delta per step in seconds
    #[arg(long, default_value = "1.0")]
    delta: f32,

    /// Seed for reproducible vehicle counts
    #[arg(long)]
    seed: Option<u64>,

    /// Page to render in headless mode
    #[arg(long, value_enum, default_value = "live")]
    page: Page,

    /// Start an emergency override for this approach
    #[arg(long, value_enum)]
    emergency: Option<DirectionArg>,

    /// Seconds into the run at which the emergency override starts
    #[arg(long, default_value = "0")]
    emergency_at: u32,

    /// Red duration in seconds
    #[arg(long, default_value_t = DEFAULT_RED_SECONDS)]
    red: u32,

    /// Green duration in seconds
    #[arg(long, default_value_t = DEFAULT_GREEN_SECONDS)]
    green: u32,

    /// Yellow duration in seconds
    #[arg(long, default_value_t = DEFAULT_YELLOW_SECONDS)]
    yellow: u32,

    /// Sleep between printed frames
    #[arg(long)]
    realtime: bool,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig> {
        Ok(SimConfig {
            timings: SignalTimings::new(self.red, self.green, self.yellow)?,
            seed: self.seed,
            ..SimConfig::default()
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.sim_config()?;

    // Bevy installs its own logger through LogPlugin
    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(config);
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            bail!("UI feature is not enabled. Rebuild with --features ui");
        }
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,smart_signal=info"),
    )
    .init();

    match cli.page {
        Page::Dashboard => {
            print!("{}", DashboardPage);
            Ok(())
        }
        Page::Live | Page::Emergency | Page::Metrics => run_headless(&cli, &config),
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli, config: &SimConfig) -> Result<()> {
    if !cli.delta.is_finite() || cli.delta <= 0.0 {
        bail!("--delta must be a positive number of seconds, got {}", cli.delta);
    }
    let delta = Duration::try_from_secs_f32(cli.delta)
        .with_context(|| format!("--delta {} is out of range", cli.delta))?;

    let emergency = match (cli.page, cli.emergency) {
        (_, Some(direction)) => Some(Direction::from(direction)),
        // The emergency page needs an override to show anything
        (Page::Emergency, None) => Some(Direction::East),
        _ => None,
    };

    println!("Running signal dashboard in headless mode...");
    println!("Seconds: {}, Delta: {}s", cli.seconds, cli.delta);
    println!();

    let mut session = DashboardSession::mount(config)?;

    println!("Initial state:");
    session.print_summary();
    session.draw_map();
    println!();

    let end = Duration::from_secs(u64::from(cli.seconds));
    let emergency_at = Duration::from_secs(u64::from(cli.emergency_at));
    let mut next_frame = Duration::from_secs(1);
    while session.elapsed() < end {
        if let Some(direction) = emergency {
            if session.emergency().is_none() && session.elapsed() >= emergency_at {
                session.activate_emergency(direction)?;
            }
        }

        let step = delta.min(end - session.elapsed());
        session.advance_by(step);

        // Print once per simulated second
        if cli.page == Page::Live && session.elapsed() >= next_frame {
            next_frame = Duration::from_secs(session.elapsed().as_secs() + 1);
            println!("--- After {:.1}s ---", session.elapsed_secs());
            session.print_summary();
            session.draw_map();
            println!();

            if cli.realtime && session.elapsed() < end {
                std::thread::sleep(Duration::from_millis(500));
            }
        }
    }

    match cli.page {
        Page::Emergency => print!("{}", EmergencyPage(&session)),
        Page::Metrics => print!("{}", MetricsPage(&session)),
        _ => {
            println!("=== Final State ===");
            session.print_summary();
            session.draw_map();
        }
    }

    let stats = session.unmount();
    let minutes = stats.elapsed.as_secs_f64().max(1.0) / 60.0;
    info!("Transitions per minute: {:.1}", stats.transitions as f64 / minutes);
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(config: SimConfig) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Smart Signal UI...");
    println!();
    println!("Controls:");
    println!("  N/S/E/W     - Emergency override for that approach");
    println!("  C           - Clear emergency override");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,smart_signal=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Smart Signal - Dashboard".into(),
                        resolution: (960, 540).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(smart_signal::ui::SmartSignalUIPlugin { config })
        .run();
}
