//! Plain-text renderings of the dashboard pages for headless mode

use std::fmt;

use super::catalog::{traffic_peak, MONTHLY_TRAFFIC, SUMMARY_CARDS};
use super::metrics::{live_report, DecisionStats, ResponseStats};
use super::session::DashboardSession;

/// Width of the bar used for chart rows
const BAR_WIDTH: u32 = 30;

fn bar(value: u32, max: u32) -> String {
    let filled = if max == 0 { 0 } else { value * BAR_WIDTH / max };
    "#".repeat(filled as usize)
}

/// Summary cards and the monthly overview chart
pub struct DashboardPage;

impl fmt::Display for DashboardPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Dashboard ===")?;
        for card in &SUMMARY_CARDS {
            writeln!(
                f,
                "{:<22} {:>8}  {} {:<6} {}",
                card.title,
                card.value,
                card.trend().arrow(),
                card.change_label(),
                card.description
            )?;
        }

        writeln!(f, "--- Traffic Analysis Overview ---")?;
        let max = traffic_peak().map(|m| m.traffic).unwrap_or(0);
        for month in &MONTHLY_TRAFFIC {
            writeln!(
                f,
                "{} {:>4} {:>3}% {}",
                month.month,
                month.traffic,
                month.efficiency,
                bar(month.traffic, max)
            )?;
        }
        if let Some(peak) = traffic_peak() {
            writeln!(f, "Peak: {} ({} vehicles)", peak.month, peak.traffic)?;
        }
        Ok(())
    }
}

/// Override status and the congestion history gathered while it is held
pub struct EmergencyPage<'a>(pub &'a DashboardSession);

impl fmt::Display for EmergencyPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "=== Emergency Mode ===")?;

        let Some(priority) = session.emergency() else {
            return writeln!(f, "No emergency override active");
        };

        let state = session.signals().get(priority);
        writeln!(f, "Emergency Override Active")?;
        writeln!(
            f,
            "Priority Direction: {} | Signal State: {} | Timer: {}s",
            priority.bound_label(),
            state.color,
            state.remaining_seconds
        )?;

        let log = session.emergency_log();
        let max = log.samples().map(|s| s.total_vehicles).max().unwrap_or(0);
        writeln!(f, "--- Delayed / Total Vehicles ---")?;
        for sample in log.samples() {
            writeln!(
                f,
                "{} {:>3} / {:>3} {}",
                sample.time_label(),
                sample.delayed_vehicles,
                sample.total_vehicles,
                bar(sample.delayed_vehicles, max)
            )?;
        }

        let vehicles = session.vehicles();
        writeln!(
            f,
            "Current Delayed Vehicles: {} (waiting in non-priority directions)",
            vehicles.delayed_excluding(priority)
        )?;
        writeln!(
            f,
            "Current Total Vehicles: {} (total vehicles at intersection)",
            vehicles.total()
        )
    }
}

/// The three performance metric cards, using the session's live queues
pub struct MetricsPage<'a>(pub &'a DashboardSession);

impl fmt::Display for MetricsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Performance Metrics ===")?;
        let report = live_report(
            &DecisionStats::default(),
            self.0.vehicles(),
            &ResponseStats::default(),
        );
        for metric in report {
            writeln!(f, "{} [{}]", metric.title, metric.status)?;
            writeln!(
                f,
                "  {:>6} {:<30} {}",
                metric.value,
                bar(metric.progress.round() as u32, 100),
                metric.details
            )?;
            writeln!(f, "  {}", metric.description)?;
        }
        Ok(())
    }
}

pub fn render_dashboard() -> String {
    DashboardPage.to_string()
}

pub fn render_emergency(session: &DashboardSession) -> String {
    EmergencyPage(session).to_string()
}

pub fn render_metrics(session: &DashboardSession) -> String {
    MetricsPage(session).to_string()
}
