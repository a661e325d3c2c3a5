mod config;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod prompts;
mod render;
mod routes;
mod session;
mod sheet;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pipeline::{PageTextExtractor, PdfExtractBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{file_store::FileStore, redis_store::RedisStore, CvStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waddy API v{}", env!("CARGO_PKG_VERSION"));

    // Storage: Redis when configured (synchronized area), files otherwise.
    let store: Arc<dyn CvStore> = match &config.redis_url {
        Some(url) => {
            info!("Using Redis storage");
            Arc::new(RedisStore::new(url)?)
        }
        None => {
            info!("REDIS_URL not set, using file storage in {}", config.data_dir);
            Arc::new(FileStore::new(&config.data_dir))
        }
    };

    let extractor: Arc<dyn PageTextExtractor> = Arc::new(PdfExtractBackend);

    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set; pipelines need a key saved via settings");
    }
    if config.sheet_app_url.is_none() {
        info!("SHEET_APP_URL not set; spreadsheet logging disabled");
    }

    let port = config.port;
    let state = AppState::new(config, store, extractor);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default `EnvFilter` directive when `RUST_LOG` is unset. Tracing targets
/// use the crate name (underscores), not the hyphenated package name; a
/// `waddy-api=info` directive would match nothing.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}
