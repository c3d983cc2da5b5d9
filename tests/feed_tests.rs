// Alert feed bound and ordering

use socdash::feed::*;
use socdash::models::{AlertEntry, Severity};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn alert(n: usize) -> AlertEntry {
    AlertEntry::new(Severity::Medium, format!("alert {}", n), "details", "12:00:00")
}

#[test]
fn seed_feed_is_newest_first() {
    let feed = AlertFeed::default();
    assert_eq!(feed.len(), 7);
    assert_eq!(feed.max_entries(), DEFAULT_MAX_ENTRIES);
    let latest = feed.latest().unwrap();
    assert_eq!(latest.title, "Data Exfiltration Detected");
    assert_eq!(latest.timestamp, "14:32:15");
}

#[test]
fn feed_never_exceeds_bound_and_newest_is_first() {
    let mut feed = AlertFeed::new(10);
    for n in 0..37 {
        feed.push(alert(n));
        assert!(feed.len() <= 10);
        assert_eq!(feed.latest().unwrap().title, format!("alert {}", n));
    }
    assert_eq!(feed.len(), 10);
    let titles: Vec<String> = feed.iter().map(|a| a.title.clone()).collect();
    assert_eq!(titles.first().unwrap(), "alert 36");
    assert_eq!(titles.last().unwrap(), "alert 27");
}

#[test]
fn push_returns_evicted_tail() {
    let mut feed = AlertFeed::with_seed(10, seed_alerts());
    assert!(feed.push(alert(0)).is_none());
    assert!(feed.push(alert(1)).is_none());
    assert!(feed.push(alert(2)).is_none());
    let evicted = feed.push(alert(3)).expect("11th entry evicts the oldest");
    assert_eq!(evicted.title, "Off-Hours File Access");
    assert_eq!(feed.len(), 10);
}

#[test]
fn seed_longer_than_bound_is_trimmed() {
    let feed = AlertFeed::with_seed(3, seed_alerts());
    assert_eq!(feed.len(), 3);
    assert_eq!(feed.latest().unwrap().title, "Data Exfiltration Detected");
}

#[test]
fn choose_template_draws_from_pool() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let t = choose_template(&mut rng);
        assert!(SYNTHETIC_TEMPLATES.contains(&t));
        seen.insert(t.title);
    }
    assert_eq!(seen.len(), SYNTHETIC_TEMPLATES.len());
}

#[test]
fn template_stamp_keeps_template_fields() {
    let entry = ANALYSIS_COMPLETE.stamp("09:15:00");
    assert_eq!(entry.severity, Severity::Critical);
    assert_eq!(entry.title, "Full Analysis Complete");
    assert_eq!(entry.timestamp, "09:15:00");
}
