//! Service entry point: explicit wiring from config to router.

use roster_api::routes::probe_routes;
use roster_api::{
    api_routes, ensure_tables, AppConfig, AppState, PgPlayerGateway, PgUserGateway,
    PlayerService, UserService,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roster_api=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!("database connection established");

    ensure_tables(&pool).await?;

    let players = PlayerService::new(Arc::new(PgPlayerGateway::new(pool.clone())));
    let users = UserService::new(Arc::new(PgUserGateway::new(pool.clone())));
    let state = AppState { players, users };

    let app = api_routes(state).merge(probe_routes(pool));

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
