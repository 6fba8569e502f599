//! SPARQL endpoint client.
//!
//! Sends the query text plus the fixed Virtuoso-style form parameters in a
//! single POST. No retries and no client-side timeout: a slow endpoint
//! blocks the request until the transport gives up.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::results::SparqlResults;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SparqlError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Response is not SPARQL-results JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

// ── Output format ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    #[default]
    Json,
    RdfXml,
}

impl ResultFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ResultFormat::Json => "application/json",
            ResultFormat::RdfXml => "application/rdf+xml",
        }
    }
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Anything that can answer a SELECT query. `None` means the endpoint gave
/// no usable answer, as opposed to an answer with zero rows.
#[async_trait]
pub trait SparqlEndpoint: Send + Sync {
    async fn select(&self, query: &str) -> Option<SparqlResults>;
}

// ── HTTP client ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SparqlClient {
    endpoint: String,
    client: reqwest::Client,
}

impl SparqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client: reqwest::Client::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Form parameters sent with every query.
    pub fn form_params<'a>(query: &'a str, format: ResultFormat) -> [(&'static str, &'a str); 8] {
        [
            ("default-graph", ""),
            ("should-sponge", "soft"),
            ("query", query),
            ("debug", "off"),
            ("timeout", ""),
            ("format", format.mime()),
            ("save", "display"),
            ("fname", ""),
        ]
    }

    /// Run `query` and return the raw response body in the requested format.
    #[instrument(skip(self, query), fields(endpoint = %self.endpoint))]
    pub async fn raw_query(&self, query: &str, format: ResultFormat) -> Result<String, SparqlError> {
        let resp = self.client
            .post(&self.endpoint)
            .form(&Self::form_params(query, format))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SparqlError::Status { status: status.as_u16(), body });
        }
        Ok(body)
    }

    /// Run `query` asking for JSON and decode the result set.
    pub async fn try_query(&self, query: &str) -> Result<SparqlResults, SparqlError> {
        let body = self.raw_query(query, ResultFormat::Json).await?;
        let results: SparqlResults = serde_json::from_str(&body)?;
        debug!(rows = results.bindings().len(), "SPARQL query answered");
        Ok(results)
    }

    /// Like [`try_query`](Self::try_query) but any failure degrades to `None`.
    pub async fn query(&self, query: &str) -> Option<SparqlResults> {
        match self.try_query(query).await {
            Ok(results) => Some(results),
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "SPARQL query failed, treating as no result");
                None
            }
        }
    }
}

#[async_trait]
impl SparqlEndpoint for SparqlClient {
    async fn select(&self, query: &str) -> Option<SparqlResults> {
        self.query(query).await
    }
}
