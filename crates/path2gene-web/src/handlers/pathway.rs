//! Gene list for one pathway token.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::Uri,
    response::Html,
};
use minijinja::context;
use serde::Serialize;
use std::net::SocketAddr;

use crate::error::WebError;
use crate::handlers::{href, log_request};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
struct GeneRow<'a> {
    id: &'a str,
    description: &'a str,
    pathway: &'a str,
}

/// GET /path/{*pathway}: a trailing `*` selects the regex lookup.
pub async fn pathway_genes(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    uri: Uri,
    Path(pathway): Path<String>,
) -> Result<Html<String>, WebError> {
    log_request(addr, &uri);

    let genes = state.repo.genes_for_token(&pathway).await;
    let endpoint_failed = genes.is_none();
    let genes = genes.unwrap_or_default();

    let rows: Vec<GeneRow<'_>> = genes.iter()
        .map(|(id, record)| GeneRow {
            id,
            description: &record.description,
            pathway: &record.pathway,
        })
        .collect();

    let page = state.templates.get_template("output.html")?.render(context! {
        csv_href => href("/csv", &pathway),
        pathway,
        genes => rows,
        endpoint_failed,
    })?;
    Ok(Html(page))
}
