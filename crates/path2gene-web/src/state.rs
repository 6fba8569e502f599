//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use path2gene_common::Config;
use path2gene_sparql::{PathwayRepository, SparqlClient, SparqlEndpoint};

use crate::templates;

/// Shared state injected into every Axum handler. Read-only after startup.
pub struct AppState {
    pub config: Arc<Config>,
    pub repo: PathwayRepository,
    pub templates: Environment<'static>,
}

impl AppState {
    /// State backed by the configured HTTP SPARQL endpoint.
    pub fn new(config: Config) -> Result<Self, minijinja::Error> {
        let endpoint = Arc::new(SparqlClient::new(config.path2gene.sparql_server.clone()));
        Self::with_endpoint(config, endpoint)
    }

    pub fn with_endpoint(
        config: Config,
        endpoint: Arc<dyn SparqlEndpoint>,
    ) -> Result<Self, minijinja::Error> {
        let repo = PathwayRepository::new(endpoint, config.graph.clone());
        Ok(Self {
            config: Arc::new(config),
            repo,
            templates: templates::environment()?,
        })
    }
}

pub type SharedState = Arc<AppState>;
