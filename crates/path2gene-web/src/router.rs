//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::handlers::{
    csv::export_csv,
    index::{index_page, index_submit},
    pathway::pathway_genes,
    search::search_pathway,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/",                   get(index_page).post(index_submit))
        .route("/search/{fragment}",  get(search_pathway))
        // Pathway tokens may themselves contain '/'
        .route("/path/{*pathway}",    get(pathway_genes))
        .route("/csv/{*pathway}",     get(export_csv))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
