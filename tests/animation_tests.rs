// Count-up animation: ease-out cubic, formatting, frame sequence

use socdash::animation::*;
use socdash::display::Slot;
use socdash::error::DashboardError;
use std::time::Duration;

const TWO_SECONDS: Duration = Duration::from_millis(2000);

fn reference(start: u64, end: u64, d_ms: u64) -> u64 {
    let p = (d_ms as f64 / 2000.0).min(1.0);
    (start as f64 + (end as f64 - start as f64) * (1.0 - (1.0 - p).powi(3))).floor() as u64
}

#[test]
fn value_matches_ease_out_cubic_formula() {
    for d in (0..=2000).step_by(7) {
        assert_eq!(
            value_at(0, 12_847, Duration::from_millis(d), TWO_SECONDS),
            reference(0, 12_847, d),
            "at {} ms",
            d
        );
    }
}

#[test]
fn value_ends_exactly_at_target() {
    assert_eq!(value_at(0, 12_847, TWO_SECONDS, TWO_SECONDS), 12_847);
    assert_eq!(value_at(0, 7, Duration::from_secs(10), TWO_SECONDS), 7);
    assert_eq!(value_at(0, 12_847, Duration::ZERO, TWO_SECONDS), 0);
}

#[test]
fn value_is_monotonic_and_never_overshoots() {
    let mut prev = 0;
    for d in 0..=2100 {
        let v = value_at(0, 9_999, Duration::from_millis(d), TWO_SECONDS);
        assert!(v >= prev, "dropped from {} to {} at {} ms", prev, v, d);
        assert!(v <= 9_999);
        prev = v;
    }
}

#[test]
fn zero_duration_jumps_to_end() {
    assert_eq!(value_at(0, 42, Duration::ZERO, Duration::ZERO), 42);
}

#[test]
fn ease_out_cubic_clamps_progress() {
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(0.5), 0.875);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn thousands_separators() {
    assert_eq!(with_thousands(0), "0");
    assert_eq!(with_thousands(999), "999");
    assert_eq!(with_thousands(1_000), "1,000");
    assert_eq!(with_thousands(12_847), "12,847");
    assert_eq!(with_thousands(1_234_567), "1,234,567");
}

#[test]
fn parse_display_integer_strips_commas() {
    assert_eq!(parse_display_integer("12,847").unwrap(), 12_847);
    assert_eq!(parse_display_integer("7").unwrap(), 7);
    assert!(matches!(
        parse_display_integer("97.8%"),
        Err(DashboardError::MalformedNumericText(t)) if t == "97.8%"
    ));
    assert!(parse_display_integer("").is_err());
}

#[test]
fn only_integer_metrics_are_animated() {
    let total = CountUpTarget::from_display(Slot::TotalEvents, "12,847").unwrap();
    assert_eq!(total.end, 12_847);
    assert!(total.use_commas);
    let threats = CountUpTarget::from_display(Slot::ActiveThreats, "7").unwrap();
    assert!(!threats.use_commas);
    assert!(CountUpTarget::from_display(Slot::Mttd, "4.2").is_none());
    assert!(CountUpTarget::from_display(Slot::Accuracy, "97.8%").is_none());
}

#[test]
fn frames_keep_separator_formatting_and_finish() {
    let task = CountUpTask::new(
        vec![CountUpTarget::from_display(Slot::TotalEvents, "12,847").unwrap()],
        TWO_SECONDS,
    );
    let (first, done) = task.frame(Duration::ZERO);
    assert!(!done);
    assert_eq!(first, vec![(Slot::TotalEvents, "0".to_string())]);

    let (mid, done) = task.frame(Duration::from_millis(1000));
    assert!(!done);
    assert_eq!(mid[0].1, with_thousands(reference(0, 12_847, 1000)));
    assert!(mid[0].1.contains(','));

    let (last, done) = task.frame(TWO_SECONDS);
    assert!(done);
    assert_eq!(last[0].1, "12,847");
}
