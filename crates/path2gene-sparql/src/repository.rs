//! Pathway and gene lookups used by the web front-end.

use std::collections::BTreeSet;
use std::sync::Arc;

use path2gene_common::{GeneReport, GraphSet};
use tracing::{info, instrument};

use crate::client::SparqlEndpoint;
use crate::flatten::{flatten_gene_matches, flatten_pathway_matches};
use crate::queries;

/// Suffix marking a pathway token as "regex match" instead of exact text.
pub const WILDCARD: char = '*';

/// How a `/path/...` or `/csv/...` token is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneLookup {
    /// Token ended in `*`: case-insensitive regex on the remainder.
    Fuzzy(String),
    /// Anything else: exact pathway description.
    Exact(String),
}

impl GeneLookup {
    /// Strips exactly one trailing `*`.
    pub fn from_token(token: &str) -> Self {
        match token.strip_suffix(WILDCARD) {
            Some(fragment) => GeneLookup::Fuzzy(fragment.to_string()),
            None => GeneLookup::Exact(token.to_string()),
        }
    }
}

/// Shorter "core" pathway names for a list of matches: text before the first
/// `;`, trimmed and suffixed with `*`. Deduplicated, ascending.
pub fn core_pathways(matches: &[String]) -> Vec<String> {
    matches.iter()
        .map(|path| {
            let core = path.split(';').next().unwrap_or_default().trim();
            format!("{}{}", core, WILDCARD)
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Clone)]
pub struct PathwayRepository {
    endpoint: Arc<dyn SparqlEndpoint>,
    graphs: GraphSet,
}

impl PathwayRepository {
    pub fn new(endpoint: Arc<dyn SparqlEndpoint>, graphs: GraphSet) -> Self {
        Self { endpoint, graphs }
    }

    pub fn graphs(&self) -> &GraphSet {
        &self.graphs
    }

    /// Pathway descriptions matching `fragment`. `None` when the endpoint
    /// gave no usable answer.
    #[instrument(skip(self))]
    pub async fn search_pathways(&self, fragment: &str) -> Option<Vec<String>> {
        let query = queries::search_pathways(&self.graphs, fragment);
        let results = self.endpoint.select(&query).await;
        let pathways = flatten_pathway_matches(results.as_ref());
        if let Some(ref found) = pathways {
            info!(count = found.len(), "pathway search finished");
        }
        pathways
    }

    #[instrument(skip(self))]
    pub async fn genes(&self, lookup: &GeneLookup) -> Option<GeneReport> {
        let (query, label) = match lookup {
            GeneLookup::Fuzzy(fragment) => {
                (queries::genes_for_pathway_fuzzy(&self.graphs, fragment), None)
            }
            GeneLookup::Exact(pathway) => {
                (queries::genes_for_pathway_exact(&self.graphs, pathway), Some(pathway.as_str()))
            }
        };
        let results = self.endpoint.select(&query).await;
        let genes = flatten_gene_matches(results.as_ref(), label);
        if let Some(ref found) = genes {
            info!(count = found.len(), "gene lookup finished");
        }
        genes
    }

    /// Dispatch a raw route token to the fuzzy or exact gene query.
    pub async fn genes_for_token(&self, token: &str) -> Option<GeneReport> {
        self.genes(&GeneLookup::from_token(token)).await
    }
}
