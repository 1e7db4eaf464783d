use serde_json::json;

use rivalry_monitor::compare::{compare_overall, StatComparison, StatKind};
use rivalry_monitor::snapshot::Snapshot;

const EPS: f64 = 1e-9;

#[test]
fn comparison_splits_shares_and_difference() {
    let stat = StatComparison::new(StatKind::TotalReach, 15_000_000.0, 5_000_000.0);
    assert!(stat.a_leads);
    assert_eq!(stat.entity_a_display, "1.5Cr");
    assert_eq!(stat.entity_b_display, "50.0L");
    assert!((stat.entity_a_share - 0.75).abs() < EPS);
    assert!((stat.entity_b_share - 0.25).abs() < EPS);
    let pct = stat.relative_difference_pct.expect("b is non-zero");
    assert!((pct - 200.0).abs() < EPS);
}

#[test]
fn zero_totals_have_no_split() {
    let stat = StatComparison::new(StatKind::PostsToday, 0.0, 0.0);
    assert!(!stat.a_leads);
    assert_eq!(stat.entity_a_share, 0.0);
    assert_eq!(stat.entity_b_share, 0.0);
    assert!(stat.relative_difference_pct.is_none());
}

#[test]
fn overall_stats_default_missing_values() {
    let snapshot = Snapshot::from_json(
        &json!({
            "overallStats": {
                "entityA": { "totalReach": 250000, "postsToday": 12 },
                "entityB": null
            }
        })
        .to_string(),
    )
    .expect("snapshot should parse");

    let stats = compare_overall(&snapshot);
    assert_eq!(stats.len(), StatKind::ALL.len());
    assert_eq!(stats[0].kind, StatKind::TotalReach);
    assert_eq!(stats[0].entity_a_display, "2.5L");
    assert_eq!(stats[0].entity_b, 0.0);
    assert!(stats[0].a_leads);
    assert_eq!(stats[1].entity_a, 0.0);
    assert_eq!(stats[3].kind.label(), "Posts Today");
    assert_eq!(stats[3].entity_a_display, "12");
}
