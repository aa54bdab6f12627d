use kiosk_server_lib::api::config::Config;
use kiosk_server_lib::api::server;
use kiosk_server_lib::data::database::Database;
use kiosk_server_lib::services::seed_service::SeedService;
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Logs go to stdout; `RUST_LOG` overrides the default `info` level.
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = Config::from_env()?;

    let db = Database::connect(&config.database_url, config.db_max_connections)?;
    db.run_migrations().await?;

    let seed = SeedService::new(db.clone());
    seed.ensure_admin(&config.admin_password).await?;
    if config.seed_menu {
        seed.seed_menu().await?;
    }

    server::start(config, db).await?;

    Ok(())
}
