//! ledgerbank entry point
//!
//! Boot order: config, logging, database pool, migrations, HTTP gateway.

use anyhow::Context;

use ledgerbank::config::AppConfig;
use ledgerbank::db::Database;
use ledgerbank::ledger::LedgerStore;
use ledgerbank::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&config);

    tracing::info!("starting ledgerbank in {} mode", env);

    let db = Database::connect(&config.postgres_url, config.db_max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;

    sqlx::migrate!()
        .run(db.pool())
        .await
        .context("failed to run migrations")?;

    let store = LedgerStore::new(db.pool().clone(), config.tx_deadline());

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, store).await;

    Ok(())
}
