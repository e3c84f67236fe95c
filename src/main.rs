//! Keystone demo: wires a worker pool and a sample component explicitly and
//! drives every status form once.

mod inventory;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;

use keystone_core::config::AppConfig;
use keystone_core::logging::init_logging;
use keystone_core::registry::ServiceRegistry;
use keystone_core::status::{HasStatus, StatusResult};
use keystone_worker::WorkerPool;

use crate::inventory::Inventory;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "keystone-demo", version, about = "Exercise the Keystone status forms")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of concurrent restock jobs to schedule.
    #[arg(short, long, default_value_t = 16)]
    jobs: u32,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config, cli.jobs).await {
        tracing::error!("Demo failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig, jobs: u32) -> anyhow::Result<()> {
    tracing::info!("Starting keystone-demo v{}", env!("CARGO_PKG_VERSION"));

    // ── Wiring ───────────────────────────────────────────────────
    let registry = ServiceRegistry::new();
    registry.register(Arc::new(Inventory::default()))?;
    let pool = WorkerPool::current(&config.worker)?;
    let inventory = registry.require::<Inventory>()?;

    // ── Form A ───────────────────────────────────────────────────
    let ok = inventory.restock_checked("bolts".to_string(), 10);
    tracing::info!("Form A restock succeeded: {}", ok);

    // ── Form B ───────────────────────────────────────────────────
    let mut taken = StatusResult::new();
    inventory.take_into(&mut taken, "bolts".to_string(), 25);
    taken.log("take");

    // ── Form C ───────────────────────────────────────────────────
    let handles: Vec<_> = (0..jobs)
        .map(|_| inventory.restock_spawn(&pool, "nuts".to_string(), 5))
        .collect();
    let mut succeeded = 0;
    for handle in handles {
        if handle.await? {
            succeeded += 1;
        }
    }
    tracing::info!("Form C: {}/{} restock jobs succeeded", succeeded, jobs);

    // ── Form D ───────────────────────────────────────────────────
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scheduled = inventory.count_spawn_with(&pool, "nuts".to_string(), move |result| {
        let _ = tx.send(result);
    });
    scheduled.log("count_spawn_with");
    if let Some(handle) = scheduled.into_value() {
        handle.await?;
        if let Some(result) = rx.recv().await {
            tracing::info!(
                "Form D: count of 'nuts' is {} (status {})",
                result.get_value(),
                result.get_status()
            );
        }
    }

    tracing::info!("Pool stats: {:?}", pool.stats());
    pool.shutdown().await;
    Ok(())
}
