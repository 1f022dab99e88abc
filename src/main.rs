mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_example_books {
        let inserted = startup::seed_example_books(&db).await?;
        tracing::info!("Seeded {} example books", inserted);
    }

    let app = router::app(AppState::new(db), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
