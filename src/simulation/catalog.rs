//! Static dashboard figures
//!
//! The monthly overview and the summary cards are fixed sample data; only
//! the signal and vehicle views are simulated.

/// Direction of a month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(change_percent: f32) -> Self {
        if change_percent > 0.0 {
            Trend::Up
        } else if change_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Trend::Up => '+',
            Trend::Down => '-',
            Trend::Flat => '=',
        }
    }
}

/// One point of the monthly traffic overview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTraffic {
    pub month: &'static str,
    pub traffic: u32,
    /// Efficiency percentage
    pub efficiency: u32,
}

/// Summary card on the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change_percent: f32,
    pub description: &'static str,
}

impl SummaryCard {
    pub fn trend(&self) -> Trend {
        Trend::of(self.change_percent)
    }

    /// Change formatted with an explicit sign, e.g. "+12%" or "-18%"
    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change_percent)
    }
}

pub static MONTHLY_TRAFFIC: [MonthlyTraffic; 6] = [
    MonthlyTraffic { month: "Jan", traffic: 186, efficiency: 80 },
    MonthlyTraffic { month: "Feb", traffic: 305, efficiency: 82 },
    MonthlyTraffic { month: "Mar", traffic: 237, efficiency: 75 },
    MonthlyTraffic { month: "Apr", traffic: 273, efficiency: 88 },
    MonthlyTraffic { month: "May", traffic: 209, efficiency: 91 },
    MonthlyTraffic { month: "Jun", traffic: 214, efficiency: 85 },
];

pub static SUMMARY_CARDS: [SummaryCard; 3] = [
    SummaryCard {
        title: "Active Intersections",
        value: "47",
        change_percent: 12.0,
        description: "Intersections under AI control",
    },
    SummaryCard {
        title: "Average Wait Time",
        value: "2.3 min",
        change_percent: -18.0,
        description: "Reduced from last month",
    },
    SummaryCard {
        title: "System Uptime",
        value: "99.7%",
        change_percent: 0.2,
        description: "Last 30 days",
    },
];

/// Month with the highest traffic volume
pub fn traffic_peak() -> Option<&'static MonthlyTraffic> {
    MONTHLY_TRAFFIC.iter().max_by_key(|m| m.traffic)
}
