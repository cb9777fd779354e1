//! Standalone signal simulation module
//!
//! This module contains the simulated signal timers, vehicle counts and
//! dashboard data. It runs independently of the Bevy game engine and can be
//! exercised from the console or tests.

mod catalog;
mod emergency;
mod metrics;
mod report;
mod scheduler;
mod session;
mod signal;
mod types;
mod vehicles;

// Re-export public types for external use
pub use catalog::{traffic_peak, MonthlyTraffic, SummaryCard, Trend, MONTHLY_TRAFFIC, SUMMARY_CARDS};
pub use emergency::{EmergencyLog, EmergencyOverride, EmergencySample, EMERGENCY_LOG_CAPACITY};
pub use metrics::{
    live_report, performance_report, queue_reduction, DecisionStats, MetricStatus,
    PerformanceMetric, ResponseStats, BASELINE_QUEUE, GAUGE_BANDS, QUEUE_REDUCTION_BANDS,
};
pub use report::{
    render_dashboard, render_emergency, render_metrics, DashboardPage, EmergencyPage, MetricsPage,
};
pub use scheduler::{IntervalHandle, Scheduler};
pub use session::{
    DashboardSession, SessionStats, SimConfig, SimState, SIGNAL_TICK_PERIOD,
    VEHICLE_JITTER_PERIOD,
};
pub use signal::{
    tick, transition, SignalBoard, SignalTimings, DEFAULT_GREEN_SECONDS, DEFAULT_RED_SECONDS,
    DEFAULT_YELLOW_SECONDS,
};
pub use types::{clamp_to_u32, Direction, DirectionMap, SignalColor, SignalState};
pub use vehicles::{jitter, VehicleCounts, MAX_JITTER};
