//! Merges hashtag counters, related search queries and breakout topics into
//! one weighted vocabulary for the trending-topics cloud.
//!
//! Sources are visited in a fixed precedence order and the first source to
//! mention a term owns it; later mentions are dropped, never summed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::snapshot::{RawBreakoutTopic, RawHashtag, RawRelatedQuery, Snapshot};
use crate::{Entity, Party};

pub const MIN_FONT_SIZE: f64 = 14.0;
pub const MAX_FONT_SIZE: f64 = 34.0;
pub const MIN_OPACITY: f64 = 0.5;
pub const MAX_OPACITY: f64 = 1.0;

const DEFAULT_HASHTAG_WEIGHT: f64 = 50.0;
const DEFAULT_QUERY_WEIGHT: f64 = 50.0;
const DEFAULT_BREAKOUT_WEIGHT: f64 = 80.0;

/// How many leading items of each source list are considered; `0` means no cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub hashtag_limit: usize,
    pub query_limit: usize,
    pub breakout_limit: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            hashtag_limit: 0,
            query_limit: 5,
            breakout_limit: 5,
        }
    }
}

impl VocabularyConfig {
    pub fn unlimited() -> Self {
        Self {
            hashtag_limit: 0,
            query_limit: 0,
            breakout_limit: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    Hashtag,
    RelatedQuery,
    BreakoutTopic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFrequencyEntry {
    pub text: String,
    pub weight: f64,
    pub party: Party,
    pub source_kind: SourceKind,
    /// Position of `weight` within the vocabulary's range, in `[0, 1]`.
    pub position: f64,
    pub font_size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub entries: Vec<WordFrequencyEntry>,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl Vocabulary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, text: &str) -> Option<&WordFrequencyEntry> {
        let key = dedup_key(text)?;
        self.entries
            .iter()
            .find(|entry| entry.text.to_lowercase() == key)
    }
}

/// Borrowed view of the four term sources of one snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermSources<'a> {
    pub hashtags: &'a [RawHashtag],
    pub entity_a_queries: &'a [RawRelatedQuery],
    pub entity_b_queries: &'a [RawRelatedQuery],
    pub breakout: &'a [RawBreakoutTopic],
}

impl<'a> TermSources<'a> {
    pub fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        Self {
            hashtags: &snapshot.trending_hashtags,
            entity_a_queries: snapshot.google_trends.queries.for_entity(Entity::A),
            entity_b_queries: snapshot.google_trends.queries.for_entity(Entity::B),
            breakout: &snapshot.google_trends.breakout,
        }
    }
}

struct TermCandidate {
    text: String,
    weight: f64,
    party: Party,
    source_kind: SourceKind,
}

#[derive(Debug, Clone, Default)]
pub struct FrequencyAggregator {
    config: VocabularyConfig,
}

impl FrequencyAggregator {
    pub fn new(config: VocabularyConfig) -> Self {
        Self { config }
    }

    pub fn aggregate(&self, sources: &TermSources<'_>) -> Vocabulary {
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<TermCandidate> = Vec::new();

        let mut offer = |raw: Option<&str>, weight: f64, party: Party, source_kind: SourceKind| {
            let Some(text) = raw.and_then(display_text) else {
                return;
            };
            if seen.insert(text.to_lowercase()) {
                candidates.push(TermCandidate {
                    text,
                    weight,
                    party,
                    source_kind,
                });
            }
        };

        for tag in limited(sources.hashtags, self.config.hashtag_limit) {
            offer(
                tag.tag.as_deref(),
                magnitude(&[tag.count, tag.engagement], DEFAULT_HASHTAG_WEIGHT),
                Party::from_tag(tag.party.as_deref()),
                SourceKind::Hashtag,
            );
        }

        let query_sources = [
            (sources.entity_a_queries, Entity::A),
            (sources.entity_b_queries, Entity::B),
        ];
        for (queries, entity) in query_sources {
            for query in limited(queries, self.config.query_limit) {
                offer(
                    query.query.as_deref(),
                    magnitude(&[query.interest], DEFAULT_QUERY_WEIGHT),
                    Party::from(entity),
                    SourceKind::RelatedQuery,
                );
            }
        }

        for topic in limited(sources.breakout, self.config.breakout_limit) {
            let text = non_blank(topic.topic.as_deref()).or_else(|| non_blank(topic.query.as_deref()));
            offer(
                text,
                magnitude(&[topic.interest], DEFAULT_BREAKOUT_WEIGHT),
                Party::from_tag(topic.party.as_deref()),
                SourceKind::BreakoutTopic,
            );
        }

        scale(candidates)
    }
}

pub fn aggregate_vocabulary(snapshot: &Snapshot, config: &VocabularyConfig) -> Vocabulary {
    FrequencyAggregator::new(config.clone()).aggregate(&TermSources::from_snapshot(snapshot))
}

/// Lowercased dedup key: trimmed, one leading `#` removed.
pub fn dedup_key(raw: &str) -> Option<String> {
    display_text(raw).map(|text| text.to_lowercase())
}

fn display_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let text = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

// A zero or missing magnitude falls through to the next field, then the default.
fn magnitude(fields: &[Option<f64>], default: f64) -> f64 {
    fields
        .iter()
        .flatten()
        .copied()
        .find(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(default)
}

fn limited<T>(items: &[T], limit: usize) -> &[T] {
    if limit > 0 && limit < items.len() {
        &items[..limit]
    } else {
        items
    }
}

fn scale(candidates: Vec<TermCandidate>) -> Vocabulary {
    if candidates.is_empty() {
        return Vocabulary::default();
    }

    let min_weight = candidates
        .iter()
        .map(|candidate| candidate.weight)
        .fold(f64::INFINITY, f64::min);
    let max_weight = candidates
        .iter()
        .map(|candidate| candidate.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = max_weight - min_weight;

    let entries = candidates
        .into_iter()
        .map(|candidate| {
            let position = if span > 0.0 {
                (candidate.weight - min_weight) / span
            } else {
                0.5
            };
            WordFrequencyEntry {
                text: candidate.text,
                weight: candidate.weight,
                party: candidate.party,
                source_kind: candidate.source_kind,
                position,
                font_size: lerp(MIN_FONT_SIZE, MAX_FONT_SIZE, position),
                opacity: lerp(MIN_OPACITY, MAX_OPACITY, position),
            }
        })
        .collect();

    Vocabulary {
        entries,
        min_weight,
        max_weight,
    }
}

fn lerp(low: f64, high: f64, position: f64) -> f64 {
    low + (high - low) * position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_strips_one_leading_hash() {
        assert_eq!(display_text("  #Jagan "), Some("Jagan".to_string()));
        assert_eq!(display_text("##double"), Some("#double".to_string()));
        assert_eq!(display_text("  # "), None);
        assert_eq!(display_text("mid#hash"), Some("mid#hash".to_string()));
    }

    #[test]
    fn magnitude_skips_zero_fields() {
        assert_eq!(magnitude(&[Some(0.0), Some(12.0)], 50.0), 12.0);
        assert_eq!(magnitude(&[None, None], 50.0), 50.0);
        assert_eq!(magnitude(&[Some(7.0), Some(12.0)], 50.0), 7.0);
    }

    #[test]
    fn limited_caps_slices() {
        let items = [1, 2, 3];
        assert_eq!(limited(&items, 2), &[1, 2]);
        assert_eq!(limited(&items, 5), &[1, 2, 3]);
        assert_eq!(limited(&items, 0), &[1, 2, 3]);
    }
}
