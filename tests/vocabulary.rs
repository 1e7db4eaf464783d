use serde_json::json;

use rivalry_monitor::snapshot::{RawBreakoutTopic, RawHashtag, RawRelatedQuery, Snapshot};
use rivalry_monitor::vocabulary::{
    aggregate_vocabulary, dedup_key, FrequencyAggregator, SourceKind, TermSources,
    VocabularyConfig, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use rivalry_monitor::Party;

const EPS: f64 = 1e-9;

fn hashtag(tag: &str, count: Option<f64>) -> RawHashtag {
    RawHashtag {
        tag: Some(tag.to_string()),
        count,
        ..RawHashtag::default()
    }
}

fn query(text: &str, interest: Option<f64>) -> RawRelatedQuery {
    RawRelatedQuery {
        query: Some(text.to_string()),
        interest,
    }
}

#[test]
fn first_source_wins_on_duplicates() {
    let hashtags = vec![hashtag("#Jagan", Some(10.0))];
    let queries = vec![query("Jagan", Some(90.0))];
    let sources = TermSources {
        hashtags: &hashtags,
        entity_a_queries: &queries,
        ..TermSources::default()
    };
    let vocabulary = FrequencyAggregator::default().aggregate(&sources);

    assert_eq!(vocabulary.len(), 1);
    let entry = vocabulary.get("jagan").expect("term should be present");
    assert_eq!(entry.text, "Jagan");
    assert!((entry.weight - 10.0).abs() < EPS);
    assert_eq!(entry.source_kind, SourceKind::Hashtag);
}

#[test]
fn equal_weights_sit_in_the_middle() {
    let hashtags = vec![
        hashtag("one", Some(42.0)),
        hashtag("two", Some(42.0)),
        hashtag("three", Some(42.0)),
    ];
    let sources = TermSources {
        hashtags: &hashtags,
        ..TermSources::default()
    };
    let vocabulary = FrequencyAggregator::default().aggregate(&sources);

    assert_eq!(vocabulary.len(), 3);
    for entry in &vocabulary.entries {
        assert!((entry.position - 0.5).abs() < EPS);
        assert!((entry.font_size - 24.0).abs() < EPS);
        assert!((entry.opacity - 0.75).abs() < EPS);
    }
}

#[test]
fn weights_scale_linearly_between_extremes() {
    let hashtags = vec![
        hashtag("low", Some(10.0)),
        hashtag("mid", Some(20.0)),
        hashtag("high", Some(30.0)),
    ];
    let sources = TermSources {
        hashtags: &hashtags,
        ..TermSources::default()
    };
    let vocabulary = FrequencyAggregator::default().aggregate(&sources);

    assert!((vocabulary.min_weight - 10.0).abs() < EPS);
    assert!((vocabulary.max_weight - 30.0).abs() < EPS);
    let low = vocabulary.get("low").expect("low");
    let mid = vocabulary.get("mid").expect("mid");
    let high = vocabulary.get("high").expect("high");
    assert!((low.font_size - MIN_FONT_SIZE).abs() < EPS);
    assert!((mid.position - 0.5).abs() < EPS);
    assert!((high.font_size - MAX_FONT_SIZE).abs() < EPS);
    assert!((high.opacity - 1.0).abs() < EPS);
}

#[test]
fn no_sources_yield_empty_vocabulary() {
    let vocabulary = FrequencyAggregator::default().aggregate(&TermSources::default());
    assert!(vocabulary.is_empty());
}

#[test]
fn blank_terms_are_skipped() {
    let hashtags = vec![hashtag("  #  ", Some(5.0)), hashtag("", None)];
    let sources = TermSources {
        hashtags: &hashtags,
        ..TermSources::default()
    };
    assert!(FrequencyAggregator::default().aggregate(&sources).is_empty());
}

#[test]
fn missing_magnitudes_use_source_defaults() {
    let hashtags = vec![RawHashtag {
        tag: Some("#Engaged".to_string()),
        count: Some(0.0),
        engagement: Some(33.0),
        party: Some("entityB".to_string()),
    }];
    let queries = vec![query("no interest", None)];
    let breakout = vec![RawBreakoutTopic {
        topic: None,
        query: Some("Spike".to_string()),
        interest: None,
        party: None,
    }];
    let sources = TermSources {
        hashtags: &hashtags,
        entity_b_queries: &queries,
        breakout: &breakout,
        ..TermSources::default()
    };
    let vocabulary = FrequencyAggregator::default().aggregate(&sources);

    let engaged = vocabulary.get("engaged").expect("hashtag");
    assert!((engaged.weight - 33.0).abs() < EPS);
    assert_eq!(engaged.party, Party::EntityB);

    let query = vocabulary.get("no interest").expect("query");
    assert!((query.weight - 50.0).abs() < EPS);
    assert_eq!(query.party, Party::EntityB);
    assert_eq!(query.source_kind, SourceKind::RelatedQuery);

    let spike = vocabulary.get("spike").expect("breakout");
    assert!((spike.weight - 80.0).abs() < EPS);
    assert_eq!(spike.party, Party::General);
    assert_eq!(spike.source_kind, SourceKind::BreakoutTopic);
}

#[test]
fn query_lists_are_capped_by_config() {
    let queries: Vec<RawRelatedQuery> = (0..8)
        .map(|idx| query(&format!("q{}", idx), Some(10.0 + idx as f64)))
        .collect();
    let sources = TermSources {
        entity_a_queries: &queries,
        ..TermSources::default()
    };

    let capped = FrequencyAggregator::new(VocabularyConfig::default()).aggregate(&sources);
    assert_eq!(capped.len(), 5);
    assert!(capped.get("q5").is_none());

    let all = FrequencyAggregator::new(VocabularyConfig::unlimited()).aggregate(&sources);
    assert_eq!(all.len(), 8);
}

#[test]
fn snapshot_sources_follow_precedence() {
    let snapshot = Snapshot::from_json(
        &json!({
            "trendingHashtags": [{ "tag": "#Roads", "count": 120, "party": "entityA" }],
            "googleTrends": {
                "queries": {
                    "entityA": [{ "query": "roads", "interest": 70 }],
                    "entityB": [{ "query": "Jobs", "interest": 40 }]
                },
                "breakout": [{ "topic": "jobs", "interest": 100, "party": "entityA" }]
            }
        })
        .to_string(),
    )
    .expect("snapshot should parse");

    let vocabulary = aggregate_vocabulary(&snapshot, &VocabularyConfig::default());
    let texts: Vec<&str> = vocabulary
        .entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Roads", "Jobs"]);
    assert_eq!(vocabulary.get("jobs").map(|entry| entry.party), Some(Party::EntityB));
}

#[test]
fn dedup_key_normalizes_case_and_hash() {
    assert_eq!(dedup_key(" #YSRCP "), Some("ysrcp".to_string()));
    assert_eq!(dedup_key("#"), None);
}
