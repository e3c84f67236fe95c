//! Integration tests for the shared worker pool.

mod helpers;

use std::time::Duration;

use futures::future::join_all;

use keystone_core::status::HasStatus;
use keystone_worker::WorkerPool;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_concurrent_writers() {
    let (pool, store) = helpers::attached();

    let handles = (0..200).map(|i| store.put_spawn(&pool, format!("key-{i}"), i.to_string()));
    let outcomes = join_all(handles).await;

    assert!(outcomes.into_iter().all(|outcome| outcome.unwrap()));
    assert_eq!(store.len(), 200);

    let stats = pool.stats();
    assert_eq!(stats.submitted, 200);
    assert_eq!(stats.completed, 200);
    assert_eq!(stats.aborted, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_futures_resolve_for_every_outcome() {
    let (pool, store) = helpers::attached();

    let outcomes = tokio::time::timeout(Duration::from_secs(10), async {
        let ok = store.put_spawn(&pool, "k".into(), "v".into()).await.unwrap();
        let err = store.get_spawn(&pool, "nope".into()).await.unwrap();
        let panicked = store.explode_spawn(&pool, "bug".into()).await.unwrap();
        (ok, err, panicked)
    })
    .await
    .expect("a status future never resolved");

    assert_eq!(outcomes, (true, false, false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_work_after_shutdown_fails_fast() {
    let (pool, store) = helpers::attached();
    assert!(pool.shutdown_within(Duration::from_secs(5)).await);

    assert!(!store.put_spawn(&pool, "k".into(), "v".into()).await.unwrap());

    let outer = store.get_spawn_with(&pool, "k".into(), |_| {});
    assert!(outer.is_status_bad());
    assert!(outer.get_value().is_none());
    assert_eq!(pool.stats().rejected, 2);
}

#[test]
fn test_owned_pool_from_synchronous_caller() {
    let pool = WorkerPool::new(&helpers::worker_config(2)).unwrap();
    let store = std::sync::Arc::new(helpers::KeyStore::default());

    assert!(store.init_spawn(&pool).wait().unwrap());
    assert!(!store.init_spawn(&pool).wait().unwrap());

    let outer = store.put_spawn_with(&pool, "k".into(), "v".into(), |result| {
        assert!(result.is_status_good());
    });
    outer.into_value().expect("handle").wait().unwrap();
    assert_eq!(store.get("k".into()).unwrap(), "v");

    assert!(pool.shutdown_blocking());
}
