mod assessment;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::criteria::CriterionKey;
use crate::assessment::rules::RuleSet;
use crate::assessment::validator::{EvidenceExtractor, LlmEvidenceExtractor};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting O-1A assessment API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the criterion rule table. A malformed table must stop the
    // service here, not surface per request.
    let rules = Arc::new(RuleSet::compiled().context("criterion rule table failed to compile")?);
    info!(
        "Rule set compiled ({} of {} criteria rule-covered)",
        CriterionKey::RULE_BASED.len(),
        CriterionKey::ALL.len()
    );

    // Initialize the LLM-backed evidence extractor
    let llm = LlmClient::new(
        config.llm_api_url.clone(),
        config.llm_model.clone(),
        config.llm_api_key.clone(),
    );
    info!("LLM evidence extractor initialized (model: {})", llm.model());
    let extractor: Arc<dyn EvidenceExtractor> = Arc::new(LlmEvidenceExtractor::new(llm));

    // Build app state
    let state = AppState {
        config: config.clone(),
        rules,
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
