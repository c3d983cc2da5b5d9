// Timeframe lookup and bar widths

use socdash::error::DashboardError;
use socdash::timeframe::*;

#[test]
fn day_distribution_matches_table() {
    let d = distribution_for("24h").unwrap();
    assert_eq!(
        d,
        Distribution {
            critical: 2,
            high: 3,
            medium: 2
        }
    );
    assert_eq!(d.total(), 7);
}

#[test]
fn hour_and_week_distributions() {
    assert_eq!(distribution_for("1h").unwrap().total(), 4);
    let week = distribution_for("7d").unwrap();
    assert_eq!((week.critical, week.high, week.medium), (5, 8, 12));
}

#[test]
fn widths_sum_to_one_hundred_for_every_key() {
    for key in ["1h", "24h", "7d"] {
        let w = distribution_for(key).unwrap().bar_widths();
        let sum = w.critical + w.high + w.medium;
        assert!((sum - 100.0).abs() < 1e-9, "{} sums to {}", key, sum);
        assert!(!w.critical.is_nan() && !w.high.is_nan() && !w.medium.is_nan());
    }
}

#[test]
fn hour_widths_are_proportional() {
    let w = distribution(Timeframe::LastHour).bar_widths();
    assert_eq!(w.critical, 25.0);
    assert_eq!(w.high, 50.0);
    assert_eq!(w.medium, 25.0);
}

#[test]
fn unknown_key_is_rejected() {
    let err = distribution_for("unknown").unwrap_err();
    assert!(matches!(err, DashboardError::UnknownTimeframeKey(ref k) if k == "unknown"));
    assert!(err.to_string().contains("unknown"));
    assert!("30d".parse::<Timeframe>().is_err());
    assert!("".parse::<Timeframe>().is_err());
}

#[test]
fn keys_round_trip_through_display() {
    for tf in [Timeframe::LastHour, Timeframe::LastDay, Timeframe::LastWeek] {
        assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), tf);
    }
    assert_eq!(
        serde_json::to_string(&Timeframe::LastWeek).unwrap(),
        "\"7d\""
    );
}

#[test]
fn width_text_has_two_decimals() {
    assert_eq!(BarWidths::format(100.0 * 2.0 / 7.0), "28.57%");
    assert_eq!(BarWidths::format(25.0), "25.00%");
}
