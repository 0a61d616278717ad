use std::sync::Arc;

use anyhow::Result;
use common::{
    database::{DatabaseConfig, health_check, init_pool},
    error::DatabaseError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use meetup_api::{AppState, config::Settings, create_router, repositories::MeetupRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting meetup API service");

    let settings = Settings::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    let meetup_repository = MeetupRepository::new(pool, settings.files_base_url.clone());
    let app_state = AppState::new(Arc::new(meetup_repository), &settings.jwt_secret);

    let app = create_router(app_state);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Meetup API service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
