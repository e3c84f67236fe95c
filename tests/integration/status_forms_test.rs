//! Integration tests for the four calling forms generated by `status_forms!`.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use keystone_core::status::{HasStatus, Status, StatusResult};

#[test]
fn test_result_scenario_good_with_message() {
    let mut result = StatusResult::<i32>::new();
    result.set_to_good_status_with_value(42, "ok");
    assert_eq!(*result.get_value(), 42);
    assert_eq!(result.get_status(), Status::Good);
    assert_eq!(result.get_message(), "ok");
}

#[test]
fn test_safety_classification() {
    let mut result = StatusResult::<()>::new();
    for status in [Status::Good, Status::Info, Status::Debug] {
        result.set_status(status);
        assert!(result.is_status_safe());
        assert!(!result.is_status_unsafe());
    }
    for status in [Status::Bad, Status::Warning, Status::Error] {
        result.set_status(status);
        assert!(result.is_status_unsafe());
        assert!(!result.is_status_safe());
    }
}

#[test]
fn test_form_a_and_b() {
    let store = helpers::KeyStore::default();

    assert!(store.init_checked());
    assert!(!store.init_checked());

    let mut init = StatusResult::new();
    store.init_into(&mut init);
    assert!(init.is_status_bad());
    assert_eq!(init.get_message(), "already initialized");

    let mut put = StatusResult::new();
    store.put_into(&mut put, "region".to_string(), "eu".to_string());
    assert!(put.is_status_good());
    assert_eq!(put.get_value(), &None);

    let mut got = StatusResult::new();
    store.get_into(&mut got, "region".to_string());
    assert_eq!(got.get_value(), "eu");

    store.get_into(&mut got, "missing".to_string());
    assert!(got.is_status_bad());
    assert_eq!(got.get_message(), "no entry for 'missing'");
}

#[test]
fn test_form_b_reused_result_drops_old_failure_text() {
    let store = helpers::KeyStore::default();
    let mut got = StatusResult::new();

    store.get_into(&mut got, "late".to_string());
    assert!(got.is_status_bad());

    store.put("late".into(), "arrived".into()).unwrap();
    store.get_into(&mut got, "late".to_string());
    assert!(got.is_status_good());
    assert_eq!(got.get_value(), "arrived");
    assert_eq!(got.get_message(), "");
}

#[test]
fn test_form_b_contains_panics() {
    let store = helpers::KeyStore::default();
    let mut result = StatusResult::new();
    store.explode_into(&mut result, "corrupt header".to_string());

    assert!(result.is_status_exception());
    assert!(!result.get_message().is_empty());
    assert_eq!(result.get_message(), "corrupt header");
    assert!(!store.explode_checked("again".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_form_c() {
    let (pool, store) = helpers::attached();

    assert!(store.put_spawn(&pool, "a".into(), "1".into()).await.unwrap());
    assert!(!store.put_spawn(&pool, String::new(), "1".into()).await.unwrap());
    assert!(!store.explode_spawn(&pool, "worker bug".into()).await.unwrap());
    assert_eq!(store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_form_d_callback_observed_after_resolution() {
    let (pool, store) = helpers::attached();
    store.put("present".into(), "yes".into()).unwrap();

    for (key, expected_safe) in [("present", true), ("absent", false)] {
        let recorded = Arc::new(AtomicBool::new(!expected_safe));
        let sink = Arc::clone(&recorded);

        let outer = store.get_spawn_with(&pool, key.to_string(), move |result| {
            sink.store(result.is_status_safe(), Ordering::SeqCst);
        });
        assert!(outer.is_status_good());

        outer.into_value().expect("handle").await.unwrap();
        assert_eq!(recorded.load(Ordering::SeqCst), expected_safe);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_form_d_reports_exception_to_callback() {
    let (pool, store) = helpers::attached();
    let (tx, rx) = std::sync::mpsc::channel();

    let outer = store.explode_spawn_with(&pool, "disk vanished".into(), move |result| {
        tx.send(result).unwrap();
    });
    outer.into_value().expect("handle").await.unwrap();

    let result = rx.recv().unwrap();
    assert_eq!(result.get_status(), Status::Exception);
    assert_eq!(result.get_message(), "disk vanished");
    assert_eq!(*result.get_value(), 0);
}
