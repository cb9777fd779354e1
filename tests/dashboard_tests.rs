//! Dashboard catalog and performance metrics

use smart_signal::simulation::{
    performance_report, queue_reduction, render_dashboard, render_emergency, render_metrics,
    traffic_peak, DashboardPage, DashboardSession, DecisionStats, Direction, EmergencyPage,
    MetricStatus, MetricsPage, ResponseStats, SimConfig, Trend, MONTHLY_TRAFFIC, SUMMARY_CARDS,
};

#[test]
fn test_default_performance_report() {
    let report = performance_report(&DecisionStats::default(), 12.5, &ResponseStats::default());
    assert_eq!(report.len(), 3);

    assert_eq!(report[0].title, "AI Decision Efficiency");
    assert_eq!(report[0].value, "78%");
    assert_eq!(report[0].status, MetricStatus::Good);
    assert_eq!(report[0].details, "156 AI / 200 total decisions today");

    assert_eq!(report[1].value, "37%");
    assert_eq!(report[1].status, MetricStatus::Excellent);
    assert_eq!(report[1].details, "12.5 avg vehicles (was 20 before AI)");

    assert_eq!(report[2].value, "1.6s");
    assert!((report[2].progress - 95.0).abs() < 0.01);
    assert_eq!(report[2].status, MetricStatus::Excellent);
}

#[test]
fn test_metric_edge_cases() {
    let none = DecisionStats {
        ai_decisions: 0,
        total_decisions: 0,
    };
    assert_eq!(none.efficiency(), 0.0);
    assert_eq!(queue_reduction(25.0), 0.0);

    let slow = ResponseStats {
        responses: 1,
        average_seconds: 60.0,
    };
    assert_eq!(slow.progress(), 0.0);
}

#[test]
fn test_status_bands() {
    assert_eq!(MetricStatus::classify(85.0), MetricStatus::Excellent);
    assert_eq!(MetricStatus::classify(84.9), MetricStatus::Good);
    assert_eq!(MetricStatus::classify(50.0), MetricStatus::Average);
    assert_eq!(MetricStatus::classify(49.0), MetricStatus::Poor);
    assert_eq!(MetricStatus::Average.label(), "AVERAGE");
}

#[test]
fn test_summary_cards() {
    assert_eq!(SUMMARY_CARDS[0].trend(), Trend::Up);
    assert_eq!(SUMMARY_CARDS[0].change_label(), "+12%");
    assert_eq!(SUMMARY_CARDS[1].trend(), Trend::Down);
    assert_eq!(SUMMARY_CARDS[1].change_label(), "-18%");
    assert_eq!(SUMMARY_CARDS[2].change_label(), "+0.2%");
    assert_eq!(Trend::of(0.0), Trend::Flat);
}

#[test]
fn test_monthly_overview() {
    assert_eq!(MONTHLY_TRAFFIC.len(), 6);
    let peak = traffic_peak().unwrap();
    assert_eq!(peak.month, "Feb");
    assert_eq!(peak.traffic, 305);
}

#[test]
fn test_rendered_pages() {
    let dashboard = render_dashboard();
    assert!(dashboard.contains("Active Intersections"));
    assert!(dashboard.contains("Peak: Feb (305 vehicles)"));

    let session = DashboardSession::mount(&SimConfig::with_seed(1)).unwrap();
    let metrics = render_metrics(&session);
    assert!(metrics.contains("AI Decision Efficiency [GOOD]"));
    assert!(metrics.contains("Emergency Response Time [EXCELLENT]"));
}

#[test]
fn test_pages_display_like_renderers() {
    let mut session = DashboardSession::mount(&SimConfig::with_seed(1)).unwrap();
    session.activate_emergency(Direction::South).unwrap();

    assert_eq!(DashboardPage.to_string(), render_dashboard());
    assert_eq!(EmergencyPage(&session).to_string(), render_emergency(&session));
    assert_eq!(MetricsPage(&session).to_string(), render_metrics(&session));

    let page = format!("{}", EmergencyPage(&session));
    assert!(page.starts_with("=== Emergency Mode ===\nEmergency Override Active\n"));
    assert!(page.ends_with("(total vehicles at intersection)\n"));
}
