//! HTTP gateway
//!
//! Thin axum surface over the ledger: account CRUD, the transfer endpoint
//! and a health probe. All request validation lives here; the ledger core
//! below assumes validated inputs.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ledger::LedgerStore;
use openapi::ApiDoc;
use state::AppState;

/// Build the API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v1/accounts",
            post(handlers::create_account).get(handlers::list_accounts),
        )
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/api/v1/transfers", post(handlers::create_transfer))
        .route("/api/v1/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

/// Bind and serve the gateway until the process exits
pub async fn run_server(host: &str, port: u16, store: LedgerStore) {
    let state = Arc::new(AppState::new(store));
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: failed to bind to {}: {}", addr, e);
            eprintln!("Hint: port {} may already be in use", port);
            std::process::exit(1);
        }
    };

    tracing::info!("gateway listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: server error: {}", e);
        std::process::exit(1);
    }
}
