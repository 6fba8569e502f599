//! CSV export of a pathway's genes.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{header, Uri},
    response::{IntoResponse, Response},
};
use path2gene_common::GeneReport;
use std::net::SocketAddr;
use tracing::warn;

use crate::error::WebError;
use crate::handlers::log_request;
use crate::state::SharedState;

pub const CSV_HEADER: &str = "Gene ID, Gene description, Pathway";
pub const CSV_CONTENT_TYPE: &str = "application/excel";

/// Header line followed by one quoted-as-needed row per gene, by gene ID.
pub fn render_csv(genes: &GeneReport) -> Result<String, WebError> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for (id, record) in genes {
        writer.write_record([id.as_str(), record.description.as_str(), record.pathway.as_str()])?;
    }
    let rows = writer.into_inner().map_err(|e| WebError::Csv(e.into_error().into()))?;

    let mut body = String::with_capacity(CSV_HEADER.len() + 1 + rows.len());
    body.push_str(CSV_HEADER);
    body.push('\n');
    body.push_str(&String::from_utf8_lossy(&rows));
    Ok(body)
}

/// Download name derived from the pathway token.
pub fn csv_filename(pathway: &str) -> String {
    let stem: String = pathway
        .trim_end_matches('*')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "path2gene.csv".to_string()
    } else {
        format!("{}.csv", stem)
    }
}

/// GET /csv/{*pathway}
pub async fn export_csv(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    uri: Uri,
    Path(pathway): Path<String>,
) -> Result<Response, WebError> {
    log_request(addr, &uri);

    let genes = match state.repo.genes_for_token(&pathway).await {
        Some(genes) => genes,
        None => {
            warn!(pathway = %pathway, "gene lookup gave no answer, exporting header only");
            GeneReport::new()
        }
    };
    let body = render_csv(&genes)?;
    let disposition = format!("attachment; filename=\"{}\"", csv_filename(&pathway));

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ).into_response())
}
