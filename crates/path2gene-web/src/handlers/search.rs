//! Pathway search results.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::Uri,
    response::Html,
};
use minijinja::context;
use path2gene_sparql::core_pathways;
use std::net::SocketAddr;

use crate::error::WebError;
use crate::handlers::{log_request, PathwayLink};
use crate::state::SharedState;

/// GET /search/{fragment}
pub async fn search_pathway(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    uri: Uri,
    Path(fragment): Path<String>,
) -> Result<Html<String>, WebError> {
    log_request(addr, &uri);

    let pathways = state.repo.search_pathways(&fragment).await;
    let endpoint_failed = pathways.is_none();
    let pathways = pathways.unwrap_or_default();

    let core: Vec<PathwayLink> = core_pathways(&pathways).iter()
        .map(|p| PathwayLink::new(p))
        .collect();
    let data: Vec<PathwayLink> = pathways.iter()
        .map(|p| PathwayLink::new(p))
        .collect();

    let page = state.templates.get_template("search.html")?.render(context! {
        search => fragment,
        data,
        core,
        endpoint_failed,
    })?;
    Ok(Html(page))
}
