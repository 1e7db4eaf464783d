use serde_json::json;

use rivalry_monitor::normalize::{Post, PostMetrics};
use rivalry_monitor::ranking::{
    collect_pool, top_content, EngagementScorer, TopContentRanker, TOP_CONTENT_LIMIT,
};
use rivalry_monitor::snapshot::Snapshot;
use rivalry_monitor::{Entity, Party, Platform};

fn post(id: &str, platform: Platform, likes: u64) -> Post {
    Post {
        platform,
        party: Party::General,
        id: id.to_string(),
        text: String::new(),
        author: String::new(),
        has_media: false,
        media_url: String::new(),
        relative_time: String::new(),
        metrics: PostMetrics {
            likes,
            ..PostMetrics::default()
        },
        url: String::new(),
    }
}

fn ids(list: &rivalry_monitor::ranking::RankedList) -> Vec<&str> {
    list.posts.iter().map(|ranked| ranked.post.id.as_str()).collect()
}

#[test]
fn engagement_ignores_reach_and_views() {
    let scorer = EngagementScorer::new();
    let metrics = PostMetrics {
        likes: 10,
        comments: 5,
        shares: 2,
        reach: 1_000,
        views: 50_000,
    };
    assert_eq!(scorer.score(&metrics), 17);

    let saturated = PostMetrics {
        likes: u64::MAX,
        comments: 1,
        ..PostMetrics::default()
    };
    assert_eq!(scorer.score(&saturated), u64::MAX);
}

#[test]
fn ranks_descending_by_engagement() {
    let ranker = TopContentRanker::default();
    let pool = vec![
        post("a", Platform::Twitter, 10),
        post("b", Platform::Twitter, 50),
        post("c", Platform::Twitter, 30),
    ];
    let ranked = ranker.rank(pool);
    assert_eq!(ranked.scores(), vec![50, 30, 10]);
    assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    assert_eq!(ranked.total_engagement(), 90);
}

#[test]
fn keeps_only_the_top_three() {
    let ranker = TopContentRanker::default();
    let pool = (0..6)
        .map(|idx| post(&format!("p{}", idx), Platform::Facebook, idx * 10))
        .collect();
    let ranked = ranker.rank(pool);
    assert_eq!(ranked.len(), TOP_CONTENT_LIMIT);
    assert_eq!(ranked.scores(), vec![50, 40, 30]);
}

#[test]
fn small_and_empty_pools() {
    let ranker = TopContentRanker::default();
    let ranked = ranker.rank(vec![
        post("x", Platform::Youtube, 1),
        post("y", Platform::Youtube, 2),
    ]);
    assert_eq!(ids(&ranked), vec!["y", "x"]);

    assert!(ranker.rank(Vec::new()).is_empty());
}

#[test]
fn ties_keep_pool_order() {
    let ranker = TopContentRanker::new(EngagementScorer::new(), 4);
    let ranked = ranker.rank(vec![
        post("tw", Platform::Twitter, 7),
        post("ig", Platform::Instagram, 7),
        post("fb", Platform::Facebook, 9),
        post("yt", Platform::Youtube, 7),
    ]);
    assert_eq!(ids(&ranked), vec!["fb", "tw", "ig", "yt"]);
}

#[test]
fn pool_follows_platform_order_for_one_entity() {
    let snapshot = Snapshot::from_json(
        &json!({
            "youtube": { "entityA": { "videos": [{ "id": "yt1", "likes": 5 }] } },
            "facebook": { "entityA": { "posts": [{ "id": "fb1", "likes": 5 }] } },
            "twitter": {
                "entityA": { "tweets": [{ "id": "tw1", "engagement": { "likes": 5 } }] },
                "entityB": { "tweets": [{ "id": "tw2", "engagement": { "likes": 500 } }] }
            },
            "instagram": { "entityA": { "posts": [{ "id": "ig1", "likes": 5 }] } }
        })
        .to_string(),
    )
    .expect("snapshot should parse");

    let pool: Vec<String> = collect_pool(&snapshot, Entity::A)
        .into_iter()
        .map(|post| post.key())
        .collect();
    assert_eq!(
        pool,
        vec!["twitter_tw1", "instagram_ig1", "facebook_fb1", "youtube_yt1"]
    );

    let top = top_content(&snapshot, Entity::A);
    assert_eq!(ids(&top), vec!["tw1", "ig1", "fb1"]);
    assert_eq!(ids(&top_content(&snapshot, Entity::B)), vec!["tw2"]);
}
