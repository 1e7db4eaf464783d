use serde::Serialize;

use crate::snapshot::{EntityScores, ScoreSource, Snapshot};
use crate::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    pub raw_score: f64,
    pub share_of_voice: f64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Leader {
    EntityA,
    EntityB,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub leader: Leader,
    /// `raw_score(A) - raw_score(B)`.
    pub difference: f64,
}

impl Standing {
    pub fn from_scores(entity_a: f64, entity_b: f64) -> Self {
        let difference = entity_a - entity_b;
        let leader = if difference > 0.0 {
            Leader::EntityA
        } else if difference < 0.0 {
            Leader::EntityB
        } else {
            Leader::Tie
        };
        Self { leader, difference }
    }

    pub fn margin(&self) -> f64 {
        self.difference.abs()
    }

    /// A margin that rounds to zero at one decimal reads as a tie.
    pub fn headline(&self, entity_a: &str, entity_b: &str) -> String {
        let margin = (self.margin() * 10.0).round() / 10.0;
        let leader = match self.leader {
            Leader::EntityA if margin > 0.0 => entity_a,
            Leader::EntityB if margin > 0.0 => entity_b,
            _ => return "Both entities have equal sentiment".to_string(),
        };
        format!("{} is leading with +{}% positive sentiment", leader, margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScores {
    pub entity_a: ScoreSet,
    pub entity_b: ScoreSet,
    pub standing: Standing,
}

impl ResolvedScores {
    pub fn for_entity(&self, entity: Entity) -> &ScoreSet {
        match entity {
            Entity::A => &self.entity_a,
            Entity::B => &self.entity_b,
        }
    }
}

/// Two-level precedence chain: detailed source first, aggregate second, then zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreResolver<'a> {
    detailed: Option<&'a ScoreSource>,
    aggregate: Option<&'a ScoreSource>,
}

impl<'a> ScoreResolver<'a> {
    pub fn new(detailed: Option<&'a ScoreSource>, aggregate: Option<&'a ScoreSource>) -> Self {
        Self {
            detailed,
            aggregate,
        }
    }

    pub fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        Self::new(snapshot.sentiment_battle.as_ref(), snapshot.sentiment.as_ref())
    }

    pub fn resolve_entity(&self, entity: Entity) -> ScoreSet {
        ScoreSet {
            raw_score: self.metric(entity, |scores| scores.score),
            share_of_voice: self.metric(entity, |scores| scores.share_of_voice),
            engagement_rate: self.metric(entity, |scores| scores.avg_engagement_rate),
        }
    }

    pub fn resolve(&self) -> ResolvedScores {
        let entity_a = self.resolve_entity(Entity::A);
        let entity_b = self.resolve_entity(Entity::B);
        ResolvedScores {
            entity_a,
            entity_b,
            standing: Standing::from_scores(entity_a.raw_score, entity_b.raw_score),
        }
    }

    // Each metric walks the chain on its own, so one entity may mix sources.
    fn metric(&self, entity: Entity, field: impl Fn(&EntityScores) -> Option<f64>) -> f64 {
        [self.detailed, self.aggregate]
            .into_iter()
            .flatten()
            .find_map(|source| source.for_entity(entity).and_then(&field))
            .unwrap_or(0.0)
    }
}

pub fn resolve_scores(snapshot: &Snapshot) -> ResolvedScores {
    ScoreResolver::from_snapshot(snapshot).resolve()
}

