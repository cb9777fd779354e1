//! Performance metrics for the signal controller
//!
//! Three headline figures are reported: how often the automatic controller
//! decides without being overridden, how far queues dropped compared with
//! the pre-automation baseline, and how quickly emergencies get a green.

use std::fmt;

use super::vehicles::VehicleCounts;

/// Average vehicles per approach before automated control
pub const BASELINE_QUEUE: f32 = 20.0;

/// Progress lost per second of emergency response time
const RESPONSE_PENALTY_PER_SECOND: f32 = 3.125;

/// Rating band of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Excellent,
    Good,
    Average,
    Poor,
}

/// Lower bounds for Excellent, Good and Average on gauge-style metrics
pub const GAUGE_BANDS: [f32; 3] = [85.0, 70.0, 50.0];

/// Lower bounds for Excellent, Good and Average on queue reduction
pub const QUEUE_REDUCTION_BANDS: [f32; 3] = [30.0, 20.0, 10.0];

impl MetricStatus {
    /// Band for a 0-100 progress value
    pub fn classify(progress: f32) -> Self {
        Self::classify_with(progress, GAUGE_BANDS)
    }

    /// Band for `value` given descending `[excellent, good, average]` bounds
    pub fn classify_with(value: f32, bands: [f32; 3]) -> Self {
        let [excellent, good, average] = bands;
        if value >= excellent {
            MetricStatus::Excellent
        } else if value >= good {
            MetricStatus::Good
        } else if value >= average {
            MetricStatus::Average
        } else {
            MetricStatus::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Excellent => "EXCELLENT",
            MetricStatus::Good => "GOOD",
            MetricStatus::Average => "AVERAGE",
            MetricStatus::Poor => "POOR",
        }
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single metric card
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetric {
    pub title: &'static str,
    /// Headline value as displayed, e.g. "78%" or "1.6s"
    pub value: String,
    /// Fill of the radial gauge, 0-100
    pub progress: f32,
    pub status: MetricStatus,
    pub details: String,
    pub description: &'static str,
}

impl PerformanceMetric {
    fn new(
        title: &'static str,
        value: String,
        progress: f32,
        details: String,
        description: &'static str,
    ) -> Self {
        let progress = progress.clamp(0.0, 100.0);
        Self {
            title,
            value,
            progress,
            status: MetricStatus::classify(progress),
            details,
            description,
        }
    }

    fn with_status(mut self, status: MetricStatus) -> Self {
        self.status = status;
        self
    }
}

/// Controller decisions made today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionStats {
    pub ai_decisions: u32,
    pub total_decisions: u32,
}

impl Default for DecisionStats {
    fn default() -> Self {
        Self {
            ai_decisions: 156,
            total_decisions: 200,
        }
    }
}

impl DecisionStats {
    /// Share of decisions kept by the controller, as a percentage
    pub fn efficiency(&self) -> f32 {
        if self.total_decisions == 0 {
            return 0.0;
        }
        (self.ai_decisions as f32 * 100.0) / self.total_decisions as f32
    }
}

/// Emergency responses handled today
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseStats {
    pub responses: u32,
    pub average_seconds: f32,
}

impl Default for ResponseStats {
    fn default() -> Self {
        Self {
            responses: 8,
            average_seconds: 1.6,
        }
    }
}

impl ResponseStats {
    pub fn progress(&self) -> f32 {
        (100.0 - self.average_seconds * RESPONSE_PENALTY_PER_SECOND).clamp(0.0, 100.0)
    }
}

/// Queue reduction against [`BASELINE_QUEUE`], as a percentage floored at zero
pub fn queue_reduction(average_queue: f32) -> f32 {
    ((BASELINE_QUEUE - average_queue) / BASELINE_QUEUE * 100.0).max(0.0)
}

/// Build the three metric cards
pub fn performance_report(
    decisions: &DecisionStats,
    average_queue: f32,
    response: &ResponseStats,
) -> Vec<PerformanceMetric> {
    let efficiency = decisions.efficiency();
    let reduction = queue_reduction(average_queue);

    vec![
        PerformanceMetric::new(
            "AI Decision Efficiency",
            format!("{}%", efficiency.floor()),
            efficiency,
            format!(
                "{} AI / {} total decisions today",
                decisions.ai_decisions, decisions.total_decisions
            ),
            "How often AI makes smart decisions vs getting overridden.",
        ),
        PerformanceMetric::new(
            "Queue Reduction Performance",
            format!("{}%", reduction.floor()),
            reduction,
            format!(
                "{:.1} avg vehicles (was {} before AI)",
                average_queue, BASELINE_QUEUE
            ),
            "How well AI reduces vehicle queues compared to before.",
        )
        .with_status(MetricStatus::classify_with(reduction, QUEUE_REDUCTION_BANDS)),
        PerformanceMetric::new(
            "Emergency Response Time",
            format!("{:.1}s", response.average_seconds),
            response.progress(),
            format!("{} emergency responses today", response.responses),
            "How fast the system responds to emergencies.",
        ),
    ]
}

/// Report using the live average queue of `vehicles`
pub fn live_report(
    decisions: &DecisionStats,
    vehicles: &VehicleCounts,
    response: &ResponseStats,
) -> Vec<PerformanceMetric> {
    performance_report(decisions, vehicles.average(), response)
}
