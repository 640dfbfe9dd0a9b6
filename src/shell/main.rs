use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use shift_checkins::shared::infrastructure::clock::SystemClock;
use shift_checkins::shared::infrastructure::roster::Roster;
use shift_checkins::shared::infrastructure::roster::in_memory::InMemoryRoster;
use shift_checkins::shared::infrastructure::sqlite::SqliteStore;
use shift_checkins::shell::config::Config;
use shift_checkins::shell::http::app;
use shift_checkins::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store = Arc::new(SqliteStore::open(&config.database_path).await?);
    tracing::info!(path = %config.database_path.display(), "opened database");

    let roster = match &config.roster_path {
        Some(path) => InMemoryRoster::from_json_file(path)?,
        None => {
            tracing::warn!("ROSTER_PATH not set, using the sample roster");
            InMemoryRoster::sample()
        }
    };
    tracing::info!(employees = roster.list().await?.len(), "loaded roster");

    let state = AppState::new(
        store.clone(),
        store,
        Arc::new(roster),
        Arc::new(SystemClock::new(config.utc_offset)),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
