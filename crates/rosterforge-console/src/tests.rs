//! Tests for event formatting.

use super::*;

fn visitor(event: &str) -> EventVisitor {
    EventVisitor {
        event: Some(event.to_string()),
        ..EventVisitor::default()
    }
}

#[test]
fn test_duration_formatting() {
    assert_eq!(format_duration_ms(0), "0ms");
    assert_eq!(format_duration_ms(999), "999ms");
    assert_eq!(format_duration_ms(1500), "1.50s");
    assert_eq!(format_duration_ms(125_000), "2m 5s");
}

#[test]
fn test_solve_start_groups_large_counts() {
    let mut v = visitor("solve_start");
    v.employees = Some(12);
    v.variables = Some(12_345);
    v.backend = Some("microlp".to_string());
    v.time_limit_secs = Some(30);

    let line = format_event(&v);
    assert!(line.contains("12,345"));
    assert!(line.contains("microlp"));
    assert!(line.contains("30"));
}

#[test]
fn test_solve_end_reports_shortages() {
    let mut v = visitor("solve_end");
    v.status = Some("OPTIMAL".to_string());
    v.score = Some("-20000shortage/14assigned/3preference".to_string());
    v.shortages = Some(2);
    v.duration_ms = Some(42);

    let line = format_event(&v);
    assert!(line.contains("OPTIMAL"));
    assert!(line.contains("-20000shortage"));
    assert!(line.contains("42ms"));
    assert!(line.contains("short"));
    assert!(!line.contains("fully staffed"));
}

#[test]
fn test_failed_solve_end_has_no_score() {
    let mut v = visitor("solve_end");
    v.status = Some("INFEASIBLE".to_string());

    let line = format_event(&v);
    assert!(line.contains("INFEASIBLE"));
    assert!(!line.contains("assignments"));
}

#[test]
fn test_unknown_events_are_silent() {
    assert!(format_event(&visitor("roster_stored")).is_empty());
    assert!(format_event(&EventVisitor::default()).is_empty());
}

#[test]
fn test_malformed_score_passes_through() {
    assert!(format_score("not a score").contains("not a score"));
}

#[test]
fn test_score_shortage_colored_by_sign() {
    let short = format_score("-10000shortage/1assigned/0preference");
    assert!(short.contains("\u{1b}[91m-10000shortage"));

    let staffed = format_score("0shortage/3assigned/10preference");
    assert!(staffed.contains("\u{1b}[92m0shortage"));
}
