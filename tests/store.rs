use rivalry_monitor::config::DashboardConfig;
use rivalry_monitor::snapshot::Snapshot;
use rivalry_monitor::store::{CommitOutcome, SnapshotStore};
use rivalry_monitor::synthetic::generate_synthetic_snapshot;

#[tokio::test]
async fn empty_store_has_no_view() {
    let store = SnapshotStore::new();
    assert!(store.current().await.is_none());
}

#[tokio::test]
async fn tickets_increase_monotonically() {
    let store = SnapshotStore::new();
    let first = store.begin_refresh().await;
    let second = store.begin_refresh().await;
    assert!(second > first);
    assert_eq!(second.sequence(), first.sequence() + 1);
}

#[tokio::test]
async fn commit_swaps_in_snapshot_and_view() {
    let store = SnapshotStore::new();
    let config = DashboardConfig::default();
    let ticket = store.begin_refresh().await;

    let outcome = store
        .commit(ticket, generate_synthetic_snapshot(3), &config)
        .await;
    assert_eq!(outcome, CommitOutcome::Applied);

    let loaded = store.current().await.expect("snapshot committed");
    assert_eq!(loaded.ticket, ticket);
    assert_eq!(loaded.view.top_content.entity_a.len(), 3);
    assert!(loaded.committed_at_ms > 0);
}

#[tokio::test]
async fn late_commit_of_older_refresh_is_discarded() {
    let store = SnapshotStore::new();
    let config = DashboardConfig::default();
    let older = store.begin_refresh().await;
    let newer = store.begin_refresh().await;

    let newer_outcome = store
        .commit(newer, generate_synthetic_snapshot(11), &config)
        .await;
    let older_outcome = store.commit(older, Snapshot::default(), &config).await;

    assert_eq!(newer_outcome, CommitOutcome::Applied);
    assert_eq!(older_outcome, CommitOutcome::Superseded);
    let loaded = store.current().await.expect("snapshot committed");
    assert_eq!(loaded.ticket, newer);
    assert!(!loaded.view.vocabulary.is_empty());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_view() {
    let store = SnapshotStore::new();
    let config = DashboardConfig::default();
    let first = store.begin_refresh().await;
    store
        .commit(first, generate_synthetic_snapshot(5), &config)
        .await;

    // A refresh that never commits leaves the committed view untouched.
    let _abandoned = store.begin_refresh().await;
    let loaded = store.current().await.expect("snapshot committed");
    assert_eq!(loaded.ticket, first);
}
