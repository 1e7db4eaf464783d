use serde::Serialize;

use crate::normalize::{normalize_feed, Post};
use crate::ranking::EngagementScorer;
use crate::snapshot::Snapshot;
use crate::{Entity, Platform};

pub const TOP_CONTENT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPost {
    pub post: Post,
    pub score: u64,
}

impl RankedPost {
    pub fn new(post: Post, score: u64) -> Self {
        Self { post, score }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedList {
    pub posts: Vec<RankedPost>,
}

impl RankedList {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn total_engagement(&self) -> u64 {
        self.posts
            .iter()
            .fold(0u64, |total, ranked| total.saturating_add(ranked.score))
    }

    pub fn scores(&self) -> Vec<u64> {
        self.posts.iter().map(|ranked| ranked.score).collect()
    }
}

#[derive(Debug, Clone)]
pub struct TopContentRanker {
    scorer: EngagementScorer,
    limit: usize,
}

impl Default for TopContentRanker {
    fn default() -> Self {
        Self::new(EngagementScorer::new(), TOP_CONTENT_LIMIT)
    }
}

impl TopContentRanker {
    pub fn new(scorer: EngagementScorer, limit: usize) -> Self {
        Self { scorer, limit }
    }

    /// Ranks `pool` by engagement, keeping the input order between equal scores.
    pub fn rank(&self, pool: Vec<Post>) -> RankedList {
        let mut candidates: Vec<RankedPost> = pool
            .into_iter()
            .map(|post| {
                let score = self.scorer.score(&post.metrics);
                RankedPost::new(post, score)
            })
            .collect();

        // `sort_by` is stable, which is what keeps ties in pool order.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates.truncate(self.limit);

        RankedList { posts: candidates }
    }
}

/// One entity's posts across every platform, in [`Platform::ALL`] order.
pub fn collect_pool(snapshot: &Snapshot, entity: Entity) -> Vec<Post> {
    Platform::ALL
        .iter()
        .flat_map(|platform| normalize_feed(snapshot, *platform, entity))
        .collect()
}

pub fn top_content(snapshot: &Snapshot, entity: Entity) -> RankedList {
    TopContentRanker::default().rank(collect_pool(snapshot, entity))
}
