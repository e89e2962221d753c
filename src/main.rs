//! Store Audit Server
//!
//! Serves the three-step audit form and the JSON scoring API.
//!
//! Usage:
//!   cargo run --bin store_audit
//!
//! Environment:
//!   PORT / AUDIT_PORT     - Server port (default: 5000)
//!   AUDIT_HOST            - Server host (default: 127.0.0.1)
//!   AUDIT_DEBUG           - Verbose logging (default: off)
//!   AUDIT_QUESTIONS_FILE  - JSON question list (default: built-in set)
//!   RUST_LOG              - Log filter, overrides AUDIT_DEBUG

use std::sync::Arc;
use store_audit::utils::constants::{APP_NAME, APP_VERSION};
use store_audit::{create_router, AppState, AuditStats, ServerConfig};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if config.debug { "debug" } else { "info" }));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let questions = match config.load_questions() {
        Ok(questions) => questions,
        Err(err) => {
            error!(code = err.code_str(), config = err.code.is_config(), "{}", err.message);
            return Err(err.into());
        }
    };

    let stats = Arc::new(AuditStats::new());
    let stats_for_shutdown = stats.clone();

    let state = Arc::new(AppState::new(questions, stats));
    let question_count = state.scorer.questions().len();
    let max_score = state.scorer.questions().max_score();

    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("{} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!(questions = question_count, max_score, debug = config.debug, "Question set ready");
    info!("Endpoints:");
    info!("  GET  /              - Entry form");
    info!("  POST /audit         - Question list for a store");
    info!("  POST /submit        - Score and result page");
    info!("  GET  /v1/questions  - Question set (JSON)");
    info!("  POST /v1/score      - Score answers (JSON)");
    info!("  GET  /v1/stats      - Audit statistics");
    info!("  GET  /v1/health     - Health check");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Shutdown signal received");
    info!("Final stats: {}", stats_for_shutdown.get_stats().summary());
    info!("{} shutdown complete", APP_NAME);

    Ok(())
}
