mod export;
mod llm;
mod model;
mod routes;
mod services;
mod state;
mod storage;

use std::sync::Arc;

use llm::config::LlmConfig;
use llm::openai::OpenAiClient;
use storage::Storage;
use storage::memory::MemoryStorage;
use storage::postgres::PgStorage;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Durable storage: Postgres when configured, otherwise a warning and an
    // in-memory fallback that does not survive restarts.
    let storage: Arc<dyn Storage> = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pg = PgStorage::connect(&database_url)
                .await
                .expect("database init failed");
            tracing::info!("durable storage initialized");
            Arc::new(pg)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set — saved runs and settings will not persist");
            Arc::new(MemoryStorage::new())
        }
    };

    let llm = OpenAiClient::new(LlmConfig::from_env()).expect("completion client build failed");
    tracing::info!(model = llm.model(), "completion client initialized");

    let state = state::AppState::new(storage, Arc::new(llm));
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "casegen listening");
    axum::serve(listener, app).await.expect("server failed");
}
