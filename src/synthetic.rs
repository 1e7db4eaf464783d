use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::snapshot::{
    EntityScores, EntityTotals, FacebookAuthor, FacebookFeed, GoogleTrends, InstagramFeed,
    InstagramOwner, OverallStats, PlatformFeeds, RawBreakoutTopic, RawFacebookPost, RawHashtag,
    RawInstagramPost, RawRelatedQuery, RawTweet, RawYoutubeVideo, RelatedQueries, ScoreSource,
    Snapshot, TweetEngagement, TweetUser, TwitterFeed, YoutubeFeed,
};
use crate::Entity;

const POSTS_PER_FEED: usize = 4;

const TOPICS: [&str; 10] = [
    "Welfare",
    "Jobs",
    "Farmers",
    "Roads",
    "Education",
    "Healthcare",
    "Capital",
    "Water",
    "Housing",
    "Youth",
];

const TIMES: [&str; 5] = ["5m ago", "22m ago", "1h ago", "3h ago", "1d ago"];

/// Deterministic snapshot for demos; the same seed always yields the same document.
pub fn generate_synthetic_snapshot(seed: u64) -> Snapshot {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut twitter = PlatformFeeds::default();
    let mut instagram = PlatformFeeds::default();
    let mut facebook = PlatformFeeds::default();
    let mut youtube = PlatformFeeds::default();
    for entity in Entity::BOTH {
        let twitter_feed = Some(TwitterFeed {
            tweets: (0..POSTS_PER_FEED)
                .map(|idx| sample_tweet(&mut rng, entity, idx))
                .collect(),
        });
        let instagram_feed = Some(InstagramFeed {
            posts: (0..POSTS_PER_FEED)
                .map(|idx| sample_instagram(&mut rng, entity, idx))
                .collect(),
        });
        let facebook_feed = Some(FacebookFeed {
            posts: (0..POSTS_PER_FEED)
                .map(|idx| sample_facebook(&mut rng, entity, idx))
                .collect(),
        });
        let youtube_feed = Some(YoutubeFeed {
            videos: (0..POSTS_PER_FEED)
                .map(|idx| sample_youtube(&mut rng, entity, idx))
                .collect(),
        });
        match entity {
            Entity::A => {
                twitter.entity_a = twitter_feed;
                instagram.entity_a = instagram_feed;
                facebook.entity_a = facebook_feed;
                youtube.entity_a = youtube_feed;
            }
            Entity::B => {
                twitter.entity_b = twitter_feed;
                instagram.entity_b = instagram_feed;
                facebook.entity_b = facebook_feed;
                youtube.entity_b = youtube_feed;
            }
        }
    }

    let trending_hashtags = (0..6)
        .map(|_| RawHashtag {
            tag: Some(format!("#{}", pick(&mut rng, &TOPICS))),
            count: Some(rng.gen_range(20..2_000) as f64),
            engagement: None,
            party: Some(sample_party(&mut rng).to_string()),
        })
        .collect();

    let google_trends = GoogleTrends {
        queries: RelatedQueries {
            entity_a: sample_queries(&mut rng, "entity a"),
            entity_b: sample_queries(&mut rng, "entity b"),
        },
        breakout: (0..3)
            .map(|_| RawBreakoutTopic {
                topic: Some(format!("{} scheme", pick(&mut rng, &TOPICS))),
                query: None,
                interest: Some(rng.gen_range(60..=100) as f64),
                party: Some(sample_party(&mut rng).to_string()),
            })
            .collect(),
    };

    let detailed_a = rng.gen_range(35.0..75.0);
    let detailed_b = 100.0 - detailed_a;
    let sentiment_battle = Some(ScoreSource {
        entity_a: Some(EntityScores {
            score: Some(round1(detailed_a)),
            share_of_voice: None,
            avg_engagement_rate: Some(round1(rng.gen_range(1.0..6.0))),
        }),
        entity_b: Some(EntityScores {
            score: Some(round1(detailed_b)),
            share_of_voice: None,
            avg_engagement_rate: Some(round1(rng.gen_range(1.0..6.0))),
        }),
    });
    let voice_a = rng.gen_range(30.0..70.0);
    let sentiment = Some(ScoreSource {
        entity_a: Some(EntityScores {
            score: Some(round1(rng.gen_range(30.0..70.0))),
            share_of_voice: Some(round1(voice_a)),
            avg_engagement_rate: None,
        }),
        entity_b: Some(EntityScores {
            score: Some(round1(rng.gen_range(30.0..70.0))),
            share_of_voice: Some(round1(100.0 - voice_a)),
            avg_engagement_rate: None,
        }),
    });

    let overall_stats = Some(OverallStats {
        entity_a: Some(sample_totals(&mut rng)),
        entity_b: Some(sample_totals(&mut rng)),
    });

    Snapshot {
        twitter,
        instagram,
        facebook,
        youtube,
        trending_hashtags,
        google_trends,
        sentiment_battle,
        sentiment,
        overall_stats,
    }
}

fn sample_tweet(rng: &mut StdRng, entity: Entity, idx: usize) -> RawTweet {
    RawTweet {
        id: Some(format!("tw_{}_{}", tag(entity), idx)),
        text: Some(format!("{} update #{}", pick(rng, &TOPICS), idx + 1)),
        party: Some(party_tag(entity).to_string()),
        url: Some(format!("https://x.com/status/{}", rng.gen_range(1_000_000..9_999_999))),
        time_ago: Some(pick(rng, &TIMES).to_string()),
        engagement: Some(TweetEngagement {
            likes: Some(rng.gen_range(0..5_000) as f64),
            replies: Some(rng.gen_range(0..400) as f64),
            retweets: Some(rng.gen_range(0..1_200) as f64),
            views: Some(rng.gen_range(1_000..250_000) as f64),
        }),
        media: None,
        media_url: (rng.gen::<f64>() < 0.4).then(|| "https://img.example/tw.jpg".to_string()),
        thumbnail: None,
        user: Some(TweetUser {
            name: Some(format!("{} desk", tag(entity))),
            avatar: None,
            verified: Some(rng.gen::<f64>() < 0.5),
        }),
    }
}

fn sample_instagram(rng: &mut StdRng, entity: Entity, idx: usize) -> RawInstagramPost {
    RawInstagramPost {
        id: Some(format!("ig_{}_{}", tag(entity), idx)),
        caption: Some(format!("On the ground: {}", pick(rng, &TOPICS))),
        party: Some(party_tag(entity).to_string()),
        url: None,
        time_ago: Some(pick(rng, &TIMES).to_string()),
        likes: Some(rng.gen_range(0..8_000) as f64),
        comments: Some(rng.gen_range(0..600) as f64),
        views: (rng.gen::<f64>() < 0.5).then(|| rng.gen_range(1_000..90_000) as f64),
        thumbnail: Some("https://img.example/ig.jpg".to_string()),
        media_type: Some("image".to_string()),
        owner: Some(InstagramOwner {
            username: Some(format!("{}_official", tag(entity))),
        }),
    }
}

fn sample_facebook(rng: &mut StdRng, entity: Entity, idx: usize) -> RawFacebookPost {
    let reactions = if rng.gen::<f64>() < 0.7 {
        Some(rng.gen_range(0..6_000) as f64)
    } else {
        None
    };
    RawFacebookPost {
        id: Some(format!("fb_{}_{}", tag(entity), idx)),
        message: Some(format!("{} rally highlights", pick(rng, &TOPICS))),
        party: Some(party_tag(entity).to_string()),
        url: None,
        time_ago: Some(pick(rng, &TIMES).to_string()),
        reactions,
        likes: Some(rng.gen_range(0..3_000) as f64),
        comments: Some(rng.gen_range(0..500) as f64),
        shares: Some(rng.gen_range(0..900) as f64),
        views: None,
        has_media: Some(rng.gen::<f64>() < 0.5),
        image_url: None,
        video_url: None,
        thumbnail: None,
        author: Some(FacebookAuthor::Name(format!("{} page", tag(entity)))),
    }
}

fn sample_youtube(rng: &mut StdRng, entity: Entity, idx: usize) -> RawYoutubeVideo {
    RawYoutubeVideo {
        id: Some(format!("yt_{}_{}", tag(entity), idx)),
        title: Some(format!("Speech on {}", pick(rng, &TOPICS))),
        party: Some(party_tag(entity).to_string()),
        url: None,
        time_ago: None,
        published_at: Some(pick(rng, &TIMES).to_string()),
        likes: Some(rng.gen_range(0..20_000) as f64),
        comments: Some(rng.gen_range(0..1_500) as f64),
        views: Some(rng.gen_range(5_000..900_000) as f64),
        thumbnail: Some("https://img.example/yt.jpg".to_string()),
        channel: Some(format!("{} tv", tag(entity))),
        duration: None,
    }
}

fn sample_queries(rng: &mut StdRng, prefix: &str) -> Vec<RawRelatedQuery> {
    (0..6)
        .map(|_| RawRelatedQuery {
            query: Some(format!("{} {}", prefix, pick(rng, &TOPICS).to_lowercase())),
            interest: Some(rng.gen_range(0..=100) as f64),
        })
        .collect()
}

fn sample_totals(rng: &mut StdRng) -> EntityTotals {
    EntityTotals {
        total_reach: Some(rng.gen_range(100_000..40_000_000) as f64),
        total_engagement: Some(rng.gen_range(5_000..2_000_000) as f64),
        total_followers: Some(rng.gen_range(50_000..12_000_000) as f64),
        posts_today: Some(rng.gen_range(0..120) as f64),
    }
}

fn sample_party(rng: &mut StdRng) -> &'static str {
    match rng.gen_range(0..3) {
        0 => "entityA",
        1 => "entityB",
        _ => "general",
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn tag(entity: Entity) -> &'static str {
    match entity {
        Entity::A => "a",
        Entity::B => "b",
    }
}

fn party_tag(entity: Entity) -> &'static str {
    match entity {
        Entity::A => "entityA",
        Entity::B => "entityB",
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
