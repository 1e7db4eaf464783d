use serde::{Deserialize, Serialize};

use crate::snapshot::{RawFacebookPost, RawInstagramPost, RawTweet, RawYoutubeVideo, Snapshot};
use crate::{stable_hash64, Entity, Party, Platform};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetrics {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub reach: u64,
    pub views: u64,
}

/// Platform-independent content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub platform: Platform,
    pub party: Party,
    pub id: String,
    pub text: String,
    pub author: String,
    pub has_media: bool,
    pub media_url: String,
    pub relative_time: String,
    pub metrics: PostMetrics,
    pub url: String,
}

impl Post {
    /// Globally unique key; `id` alone is only unique within one platform feed.
    pub fn key(&self) -> String {
        format!("{}_{}", self.platform.label(), self.id)
    }
}

/// A raw record tagged with the platform it came from.
#[derive(Debug, Clone, Copy)]
pub enum RawPost<'a> {
    Tweet(&'a RawTweet),
    InstagramPost(&'a RawInstagramPost),
    FacebookPost(&'a RawFacebookPost),
    YoutubeVideo(&'a RawYoutubeVideo),
}

impl RawPost<'_> {
    pub fn platform(&self) -> Platform {
        match self {
            RawPost::Tweet(_) => Platform::Twitter,
            RawPost::InstagramPost(_) => Platform::Instagram,
            RawPost::FacebookPost(_) => Platform::Facebook,
            RawPost::YoutubeVideo(_) => Platform::Youtube,
        }
    }

    pub fn normalize(self) -> Post {
        match self {
            RawPost::Tweet(tweet) => normalize_tweet(tweet),
            RawPost::InstagramPost(post) => normalize_instagram(post),
            RawPost::FacebookPost(post) => normalize_facebook(post),
            RawPost::YoutubeVideo(video) => normalize_youtube(video),
        }
    }
}

pub fn normalize_tweet(tweet: &RawTweet) -> Post {
    let engagement = tweet.engagement.clone().unwrap_or_default();
    let views = count(engagement.views);
    let first_media = tweet.media.as_ref().and_then(|media| media.first());
    let media_url = first_media
        .and_then(|media| media.url.clone().or_else(|| media.preview_image_url.clone()))
        .or_else(|| non_empty(&tweet.media_url))
        .or_else(|| non_empty(&tweet.thumbnail))
        .unwrap_or_default();
    let has_media = tweet.media.as_ref().is_some_and(|media| !media.is_empty())
        || non_empty(&tweet.media_url).is_some()
        || non_empty(&tweet.thumbnail).is_some();
    let text = text_of(&tweet.text);

    Post {
        platform: Platform::Twitter,
        party: Party::from_tag(tweet.party.as_deref()),
        id: post_id(&tweet.id, &text),
        author: tweet
            .user
            .as_ref()
            .and_then(|user| user.name.clone())
            .unwrap_or_default(),
        text,
        has_media,
        media_url,
        relative_time: text_of(&tweet.time_ago),
        metrics: PostMetrics {
            likes: count(engagement.likes),
            comments: count(engagement.replies),
            shares: count(engagement.retweets),
            reach: views,
            views,
        },
        url: text_of(&tweet.url),
    }
}

pub fn normalize_instagram(post: &RawInstagramPost) -> Post {
    let likes = count(post.likes);
    let comments = count(post.comments);
    let thumbnail = non_empty(&post.thumbnail);
    let text = text_of(&post.caption);

    Post {
        platform: Platform::Instagram,
        party: Party::from_tag(post.party.as_deref()),
        id: post_id(&post.id, &text),
        author: post
            .owner
            .as_ref()
            .and_then(|owner| owner.username.clone())
            .unwrap_or_default(),
        text,
        has_media: thumbnail.is_some(),
        media_url: thumbnail.unwrap_or_default(),
        relative_time: text_of(&post.time_ago),
        metrics: PostMetrics {
            likes,
            comments,
            shares: 0,
            reach: likes.saturating_add(comments),
            views: count(post.views),
        },
        url: text_of(&post.url),
    }
}

pub fn normalize_facebook(post: &RawFacebookPost) -> Post {
    // Pages report reactions; older payloads only carry plain likes.
    let likes = match count(post.reactions) {
        0 => count(post.likes),
        reactions => reactions,
    };
    let comments = count(post.comments);
    let shares = count(post.shares);
    let media_url = non_empty(&post.image_url)
        .or_else(|| non_empty(&post.thumbnail))
        .or_else(|| non_empty(&post.video_url));
    let has_media = post.has_media.unwrap_or(false) || media_url.is_some();
    let text = text_of(&post.message);

    Post {
        platform: Platform::Facebook,
        party: Party::from_tag(post.party.as_deref()),
        id: post_id(&post.id, &text),
        author: post
            .author
            .as_ref()
            .and_then(|author| author.name())
            .unwrap_or_default()
            .to_string(),
        text,
        has_media,
        media_url: media_url.unwrap_or_default(),
        relative_time: text_of(&post.time_ago),
        metrics: PostMetrics {
            likes,
            comments,
            shares,
            reach: likes.saturating_add(comments).saturating_add(shares),
            views: count(post.views),
        },
        url: text_of(&post.url),
    }
}

pub fn normalize_youtube(video: &RawYoutubeVideo) -> Post {
    let views = count(video.views);
    let thumbnail = non_empty(&video.thumbnail);
    let text = text_of(&video.title);

    Post {
        platform: Platform::Youtube,
        party: Party::from_tag(video.party.as_deref()),
        id: post_id(&video.id, &text),
        author: text_of(&video.channel),
        text,
        has_media: thumbnail.is_some(),
        media_url: thumbnail.unwrap_or_default(),
        relative_time: non_empty(&video.time_ago)
            .or_else(|| non_empty(&video.published_at))
            .unwrap_or_default(),
        metrics: PostMetrics {
            likes: count(video.likes),
            comments: count(video.comments),
            shares: 0,
            reach: views,
            views,
        },
        url: text_of(&video.url),
    }
}

/// Raw records of one entity's feed on one platform, in feed order.
pub fn raw_posts(snapshot: &Snapshot, platform: Platform, entity: Entity) -> Vec<RawPost<'_>> {
    match platform {
        Platform::Twitter => snapshot
            .twitter
            .feed(entity)
            .map(|feed| feed.tweets.iter().map(RawPost::Tweet).collect())
            .unwrap_or_default(),
        Platform::Instagram => snapshot
            .instagram
            .feed(entity)
            .map(|feed| feed.posts.iter().map(RawPost::InstagramPost).collect())
            .unwrap_or_default(),
        Platform::Facebook => snapshot
            .facebook
            .feed(entity)
            .map(|feed| feed.posts.iter().map(RawPost::FacebookPost).collect())
            .unwrap_or_default(),
        Platform::Youtube => snapshot
            .youtube
            .feed(entity)
            .map(|feed| feed.videos.iter().map(RawPost::YoutubeVideo).collect())
            .unwrap_or_default(),
    }
}

/// Canonical posts of one entity's feed on one platform.
pub fn normalize_feed(snapshot: &Snapshot, platform: Platform, entity: Entity) -> Vec<Post> {
    raw_posts(snapshot, platform, entity)
        .into_iter()
        .map(RawPost::normalize)
        .collect()
}

/// Every canonical post of one platform: entity A, entity B, then trending.
pub fn normalize_platform(snapshot: &Snapshot, platform: Platform) -> Vec<Post> {
    let mut posts = normalize_feed(snapshot, platform, Entity::A);
    posts.extend(normalize_feed(snapshot, platform, Entity::B));
    let trending: Vec<Post> = match platform {
        Platform::Twitter => snapshot
            .twitter
            .trending
            .iter()
            .flat_map(|feed| feed.tweets.iter().map(normalize_tweet))
            .collect(),
        Platform::Instagram => snapshot
            .instagram
            .trending
            .iter()
            .flat_map(|feed| feed.posts.iter().map(normalize_instagram))
            .collect(),
        Platform::Facebook => snapshot
            .facebook
            .trending
            .iter()
            .flat_map(|feed| feed.posts.iter().map(normalize_facebook))
            .collect(),
        Platform::Youtube => snapshot
            .youtube
            .trending
            .iter()
            .flat_map(|feed| feed.videos.iter().map(normalize_youtube))
            .collect(),
    };
    posts.extend(trending);
    posts
}

/// Coerces an upstream numeric field into a non-negative count.
pub fn count(value: Option<f64>) -> u64 {
    match value {
        Some(value) if value.is_finite() && value > 0.0 => value.round() as u64,
        _ => 0,
    }
}

fn post_id(id: &Option<String>, text: &str) -> String {
    non_empty(id).unwrap_or_else(|| format!("post_{:x}", stable_hash64(text)))
}

fn text_of(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|value| !value.trim().is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_clamps_malformed_values() {
        assert_eq!(count(None), 0);
        assert_eq!(count(Some(-4.0)), 0);
        assert_eq!(count(Some(f64::NAN)), 0);
        assert_eq!(count(Some(12.6)), 13);
    }

    #[test]
    fn missing_id_is_derived_from_text() {
        let first = post_id(&None, "same text");
        let second = post_id(&Some("  ".to_string()), "same text");
        assert!(first.starts_with("post_"));
        assert_eq!(first, second);
        assert_eq!(post_id(&Some("42".to_string()), "same text"), "42");
    }
}
