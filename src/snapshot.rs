//! Raw snapshot shapes as delivered by the fetch collaborator.
//!
//! Every field is optional: upstream sources populate them unevenly, and an
//! explicit `null` is treated the same as an absent key. A field of the wrong
//! type is dropped on its own instead of failing the whole document; ids may
//! arrive as numbers and counters as numeric strings. Nothing here interprets
//! the data; see [`crate::normalize`] for the canonical forms.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Entity;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, deserialize_with = "or_default")]
    pub twitter: PlatformFeeds<TwitterFeed>,
    #[serde(default, deserialize_with = "or_default")]
    pub instagram: PlatformFeeds<InstagramFeed>,
    #[serde(default, deserialize_with = "or_default")]
    pub facebook: PlatformFeeds<FacebookFeed>,
    #[serde(default, deserialize_with = "or_default")]
    pub youtube: PlatformFeeds<YoutubeFeed>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub trending_hashtags: Vec<RawHashtag>,
    #[serde(default, deserialize_with = "or_default")]
    pub google_trends: GoogleTrends,
    /// Detailed per-entity scores; first in the resolution chain.
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment_battle: Option<ScoreSource>,
    /// Aggregate per-entity scores; consulted when the detailed source lacks a field.
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment: Option<ScoreSource>,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_stats: Option<OverallStats>,
}

impl Snapshot {
    pub fn from_json(payload: &str) -> Result<Self, String> {
        if payload.trim().is_empty() {
            return Err("snapshot document is empty".to_string());
        }
        serde_json::from_str(payload).map_err(|err| format!("failed to parse snapshot: {}", err))
    }
}

/// One platform's content, split by which entity's feed it was fetched for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "F: DeserializeOwned"))]
pub struct PlatformFeeds<F> {
    #[serde(default, deserialize_with = "lenient")]
    pub entity_a: Option<F>,
    #[serde(default, deserialize_with = "lenient")]
    pub entity_b: Option<F>,
    #[serde(default, deserialize_with = "lenient")]
    pub trending: Option<F>,
}

impl<F> Default for PlatformFeeds<F> {
    fn default() -> Self {
        Self {
            entity_a: None,
            entity_b: None,
            trending: None,
        }
    }
}

impl<F> PlatformFeeds<F> {
    pub fn feed(&self, entity: Entity) -> Option<&F> {
        match entity {
            Entity::A => self.entity_a.as_ref(),
            Entity::B => self.entity_b.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwitterFeed {
    #[serde(default, deserialize_with = "lenient_list")]
    pub tweets: Vec<RawTweet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstagramFeed {
    #[serde(default, deserialize_with = "lenient_list")]
    pub posts: Vec<RawInstagramPost>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacebookFeed {
    #[serde(default, deserialize_with = "lenient_list")]
    pub posts: Vec<RawFacebookPost>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoutubeFeed {
    #[serde(default, deserialize_with = "lenient_list")]
    pub videos: Vec<RawYoutubeVideo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTweet {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_ago: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub engagement: Option<TweetEngagement>,
    #[serde(default, deserialize_with = "lenient")]
    pub media: Option<Vec<TweetMedia>>,
    #[serde(default, deserialize_with = "lenient")]
    pub media_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<TweetUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetEngagement {
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub replies: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub retweets: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub views: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetMedia {
    #[serde(default, deserialize_with = "lenient", rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetUser {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstagramPost {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_ago: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub views: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub media_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub owner: Option<InstagramOwner>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstagramOwner {
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFacebookPost {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_ago: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reactions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shares: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub views: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub has_media: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<FacebookAuthor>,
}

/// Facebook feeds deliver the author either as a bare name or as a profile object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacebookAuthor {
    Name(String),
    Profile {
        name: Option<String>,
        #[serde(rename = "profilePic")]
        profile_pic: Option<String>,
    },
}

impl FacebookAuthor {
    pub fn name(&self) -> Option<&str> {
        match self {
            FacebookAuthor::Name(name) => Some(name.as_str()),
            FacebookAuthor::Profile { name, .. } => name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawYoutubeVideo {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time_ago: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub views: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub channel: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHashtag {
    #[serde(default, deserialize_with = "lenient")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub engagement: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub party: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleTrends {
    #[serde(default, deserialize_with = "or_default")]
    pub queries: RelatedQueries,
    #[serde(default, deserialize_with = "lenient_list")]
    pub breakout: Vec<RawBreakoutTopic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedQueries {
    #[serde(default, deserialize_with = "lenient_list")]
    pub entity_a: Vec<RawRelatedQuery>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub entity_b: Vec<RawRelatedQuery>,
}

impl RelatedQueries {
    pub fn for_entity(&self, entity: Entity) -> &[RawRelatedQuery] {
        match entity {
            Entity::A => &self.entity_a,
            Entity::B => &self.entity_b,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRelatedQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub interest: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBreakoutTopic {
    #[serde(default, deserialize_with = "lenient")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub interest: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub party: Option<String>,
}

/// One upstream score object covering both entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSource {
    #[serde(default, deserialize_with = "lenient")]
    pub entity_a: Option<EntityScores>,
    #[serde(default, deserialize_with = "lenient")]
    pub entity_b: Option<EntityScores>,
}

impl ScoreSource {
    pub fn for_entity(&self, entity: Entity) -> Option<&EntityScores> {
        match entity {
            Entity::A => self.entity_a.as_ref(),
            Entity::B => self.entity_b.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityScores {
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub share_of_voice: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    #[serde(default, deserialize_with = "lenient")]
    pub entity_a: Option<EntityTotals>,
    #[serde(default, deserialize_with = "lenient")]
    pub entity_b: Option<EntityTotals>,
}

impl OverallStats {
    pub fn for_entity(&self, entity: Entity) -> Option<&EntityTotals> {
        match entity {
            Entity::A => self.entity_a.as_ref(),
            Entity::B => self.entity_b.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTotals {
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_reach: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_engagement: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_followers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub posts_today: Option<f64>,
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(parse_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(parse_value(Value::deserialize(deserializer)?))
}

// Malformed elements are skipped; the rest of the list survives.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(parse_value).collect()),
        _ => Ok(Vec::new()),
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|value| value.is_finite()))
}

fn parse_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(error = %err, "dropping malformed snapshot field");
            None
        }
    }
}
