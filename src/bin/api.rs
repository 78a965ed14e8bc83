use anyhow::Context;
use seo_audit::{Analyzer, api, app_state::AppState, config::Config, telemetry};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("seo_audit=info,tower_http=info");

    let config = Config::from_env().context("failed to load configuration")?;

    // lazy so /analyze keeps working while the database is unreachable
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(config.database_url())
        .context("invalid DATABASE_URL")?;

    let analyzer = Analyzer::from_config(&config).context("failed to build http client")?;
    let app = api::router(AppState::new(analyzer, pool));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr()))?;
    info!(addr = config.bind_addr(), "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
