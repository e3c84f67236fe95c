//! Integration tests for configuration, logging and explicit service wiring.

mod helpers;

use std::io::Write;
use std::sync::Arc;

use keystone_core::config::AppConfig;
use keystone_core::logging::init_logging;
use keystone_core::registry::ServiceRegistry;
use keystone_worker::WorkerPool;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_configured_pool_and_registry() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[worker]\nmax_concurrency = 3\nthread_name = \"wired\"\n\n[logging]\nlevel = \"debug\""
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    let _ = init_logging(&config.logging).unwrap();

    let pool = WorkerPool::current(&config.worker).unwrap();
    assert_eq!(pool.name(), "wired");
    assert_eq!(pool.stats().capacity, Some(3));

    let registry = ServiceRegistry::new();
    registry
        .register(Arc::new(helpers::KeyStore::default()))
        .unwrap();

    let store = registry.require::<helpers::KeyStore>().unwrap();
    assert!(store.put_spawn(&pool, "wired".into(), "yes".into()).await.unwrap());

    let same = registry.require::<helpers::KeyStore>().unwrap();
    assert!(Arc::ptr_eq(&store, &same));
    assert_eq!(same.get("wired".into()).unwrap(), "yes");
}

#[test]
fn test_default_config_without_file() {
    let config = AppConfig::load(None).unwrap();
    assert!(config.validate().is_ok());
    assert!(!config.worker.thread_name.is_empty());
}
