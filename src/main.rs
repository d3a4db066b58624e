use utxo_ledger::{
    batch::EpochEngine,
    config::Config,
    loader,
    scheduler::{Scheduler, create_policy},
    state::SharedLedger,
    validation::TransactionValidator,
};
use tracing::{info, warn, Level};

/// The main entry point for the ledger replay tool.
///
/// Loads the configuration, builds the registry from the genesis file,
/// then seals one epoch per configured epoch file and logs each report.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());
    let config = Config::load(&config_path)?;

    let level: Level = config.logging.level.parse()?;
    tracing_subscriber::fmt().with_max_level(level).init();
    info!("Ledger starting with config: {:?}", config);

    let genesis = loader::load_genesis(&config.ledger.genesis_path)?;
    info!(
        "Genesis loaded: {} spendable outputs, total value {}",
        genesis.len(),
        genesis.total_value()
    );

    let engine = EpochEngine::new(
        TransactionValidator::new(&genesis),
        Scheduler::new(create_policy(config.scheduling.policy_type)),
    );
    let ledger = SharedLedger::new(engine);

    for path in &config.ledger.epoch_files {
        let candidates = loader::load_epoch(path)?;
        for tx in candidates {
            ledger.submit(tx).await;
        }

        let report = ledger.seal_epoch().await;
        if report.accepted.is_empty() && report.submitted > 0 {
            warn!("Epoch #{} from {} accepted nothing", report.epoch, path.display());
        }
        info!("{}", serde_json::to_string(&report.accepted_hashes())?);
    }

    let snapshot = ledger.snapshot().await;
    info!(
        "Final state: {} spendable outputs, total value {}",
        snapshot.len(),
        snapshot.total_value()
    );
    println!("{}", serde_json::to_string_pretty(&snapshot.entries())?);

    Ok(())
}
