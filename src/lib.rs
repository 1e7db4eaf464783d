pub mod compare;
pub mod config;
pub mod format;
pub mod normalize;
pub mod ranking;
pub mod scores;
pub mod snapshot;
pub mod store;
pub mod synthetic;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::compare::{compare_overall, StatComparison};
use crate::config::DashboardConfig;
use crate::ranking::{top_content, RankedList};
use crate::scores::{resolve_scores, ResolvedScores};
use crate::snapshot::Snapshot;
use crate::vocabulary::{aggregate_vocabulary, Vocabulary};

pub use crate::format::{
    format_compact, format_float, format_percent, format_regional, growth_indicator,
    GrowthIndicator,
};

/// One of the two compared entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    A,
    B,
}

impl Entity {
    pub const BOTH: [Entity; 2] = [Entity::A, Entity::B];
}

/// Affiliation of a content item or term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Party {
    EntityA,
    EntityB,
    #[default]
    General,
}

impl Party {
    /// Parses an upstream party discriminant; anything unrecognised is `General`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Party::General;
        };
        match tag.trim().to_lowercase().as_str() {
            "entitya" | "entity_a" | "a" => Party::EntityA,
            "entityb" | "entity_b" | "b" => Party::EntityB,
            _ => Party::General,
        }
    }

    pub fn entity(self) -> Option<Entity> {
        match self {
            Party::EntityA => Some(Entity::A),
            Party::EntityB => Some(Entity::B),
            Party::General => None,
        }
    }

    pub fn is_partisan(self) -> bool {
        self.entity().is_some()
    }
}

impl From<Entity> for Party {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::A => Party::EntityA,
            Entity::B => Party::EntityB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Facebook,
    Youtube,
}

impl Platform {
    /// Pool order for ranking; ties between equal scores keep this order.
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Youtube,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Youtube => "youtube",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "twitter" | "x" => Some(Platform::Twitter),
            "instagram" | "ig" => Some(Platform::Instagram),
            "facebook" | "fb" => Some(Platform::Facebook),
            "youtube" | "yt" => Some(Platform::Youtube),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopContent {
    pub entity_a: RankedList,
    pub entity_b: RankedList,
}

impl TopContent {
    pub fn for_entity(&self, entity: Entity) -> &RankedList {
        match entity {
            Entity::A => &self.entity_a,
            Entity::B => &self.entity_b,
        }
    }
}

/// Everything the presentation layer renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub top_content: TopContent,
    pub vocabulary: Vocabulary,
    pub scores: ResolvedScores,
    pub stats: Vec<StatComparison>,
}

pub fn derive_dashboard(snapshot: &Snapshot, config: &DashboardConfig) -> DashboardView {
    let top_content = TopContent {
        entity_a: top_content(snapshot, Entity::A),
        entity_b: top_content(snapshot, Entity::B),
    };
    let vocabulary = aggregate_vocabulary(snapshot, &config.vocabulary);
    let scores = resolve_scores(snapshot);
    let stats = compare_overall(snapshot);

    tracing::debug!(
        top_a = top_content.entity_a.len(),
        top_b = top_content.entity_b.len(),
        terms = vocabulary.len(),
        leader = ?scores.standing.leader,
        difference = scores.standing.difference,
        "derived dashboard view"
    );

    DashboardView {
        top_content,
        vocabulary,
        scores,
        stats,
    }
}

pub(crate) fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
