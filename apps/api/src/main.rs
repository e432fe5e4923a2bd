mod config;
mod document;
mod errors;
mod llm_client;
mod models;
mod preview;
mod routes;
mod session;
mod state;
mod storage;
mod suggestion;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::EditorSession;
use crate::state::AppState;
use crate::storage::{build_kv_store, PersistenceStore};
use crate::suggestion::gateway::LlmSuggestionGateway;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Studio API v{}", env!("CARGO_PKG_VERSION"));

    // Storage backend, then the last saved resume (defaults on first run)
    let kv = build_kv_store(&config).await?;
    let store = PersistenceStore::new(kv);
    let (document, order) = store.load().await;
    info!("Resume loaded ({} sections in order)", order.ids().len());

    // Suggestion gateway over the LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        session: Arc::new(Mutex::new(EditorSession::new(document, order))),
        store,
        gateway: Arc::new(LlmSuggestionGateway(llm)),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
