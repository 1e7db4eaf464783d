use serde::Serialize;

use crate::format::format_regional;
use crate::snapshot::{EntityTotals, Snapshot};
use crate::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    TotalReach,
    TotalEngagement,
    TotalFollowers,
    PostsToday,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::TotalReach,
        StatKind::TotalEngagement,
        StatKind::TotalFollowers,
        StatKind::PostsToday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::TotalReach => "Total Reach",
            StatKind::TotalEngagement => "Total Engagement",
            StatKind::TotalFollowers => "Total Followers",
            StatKind::PostsToday => "Posts Today",
        }
    }

    fn value(self, totals: &EntityTotals) -> Option<f64> {
        match self {
            StatKind::TotalReach => totals.total_reach,
            StatKind::TotalEngagement => totals.total_engagement,
            StatKind::TotalFollowers => totals.total_followers,
            StatKind::PostsToday => totals.posts_today,
        }
    }
}

/// Head-to-head view of one overall statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatComparison {
    pub kind: StatKind,
    pub entity_a: f64,
    pub entity_b: f64,
    pub entity_a_display: String,
    pub entity_b_display: String,
    pub a_leads: bool,
    /// `(a - b) / b` as a percentage; undefined when `b` is zero.
    pub relative_difference_pct: Option<f64>,
    pub entity_a_share: f64,
    pub entity_b_share: f64,
}

impl StatComparison {
    pub fn new(kind: StatKind, entity_a: f64, entity_b: f64) -> Self {
        let total = entity_a + entity_b;
        let (entity_a_share, entity_b_share) = if total > 0.0 {
            (entity_a / total, entity_b / total)
        } else {
            (0.0, 0.0)
        };
        let relative_difference_pct = if entity_b != 0.0 {
            Some((entity_a - entity_b) / entity_b * 100.0)
        } else {
            None
        };

        Self {
            kind,
            entity_a,
            entity_b,
            entity_a_display: format_regional(entity_a),
            entity_b_display: format_regional(entity_b),
            a_leads: entity_a > entity_b,
            relative_difference_pct,
            entity_a_share,
            entity_b_share,
        }
    }
}

pub fn compare_overall(snapshot: &Snapshot) -> Vec<StatComparison> {
    let stat = |kind: StatKind, entity: Entity| -> f64 {
        snapshot
            .overall_stats
            .as_ref()
            .and_then(|stats| stats.for_entity(entity))
            .and_then(|totals| kind.value(totals))
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    };

    StatKind::ALL
        .iter()
        .map(|kind| StatComparison::new(*kind, stat(*kind, Entity::A), stat(*kind, Entity::B)))
        .collect()
}
