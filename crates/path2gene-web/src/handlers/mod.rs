//! HTTP handlers for all web routes.

pub mod csv;
pub mod index;
pub mod pathway;
pub mod search;

use std::net::SocketAddr;

use axum::http::Uri;
use serde::Serialize;

/// Access log line, one per handled request.
pub(crate) fn log_request(remote_addr: SocketAddr, uri: &Uri) {
    tracing::info!(remote_addr = %remote_addr, url = %uri, "path2gene request");
}

/// `prefix/<token>` with the token percent-encoded as one path segment.
pub fn href(prefix: &str, token: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(token))
}

/// A pathway rendered as a link to its gene page and CSV export.
#[derive(Debug, Serialize)]
pub struct PathwayLink {
    pub label: String,
    pub href: String,
    pub csv_href: String,
}

impl PathwayLink {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href("/path", label),
            csv_href: href("/csv", label),
        }
    }
}
