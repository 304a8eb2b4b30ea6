use employee_roster::shell::config::AppConfig;
use employee_roster::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::bootstrap(&config).await?;

    let stats = state.roster.stats().await;
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        signed_in = state.session.is_authenticated().await,
        total = stats.total,
        active = stats.active,
        inactive = stats.inactive,
        "employee roster ready"
    );
    Ok(())
}
