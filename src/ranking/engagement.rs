use crate::normalize::PostMetrics;

/// Engagement is likes + comments + shares. Reach and views are display-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementScorer;

impl EngagementScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, metrics: &PostMetrics) -> u64 {
        metrics
            .likes
            .saturating_add(metrics.comments)
            .saturating_add(metrics.shares)
    }
}
