//! path2gene-sparql — SPARQL access to the tomato annotation store.
//!
//!   client       form-encoded POST to the endpoint, SPARQL-results-JSON decode
//!   escape       literal / IRI escaping for values embedded in query text
//!   queries      the three SELECT templates (pathway search, fuzzy and exact gene lookup)
//!   flatten      bindings → pathway list / gene report
//!   repository   composes the above for the web layer

pub mod client;
pub mod escape;
pub mod flatten;
pub mod queries;
pub mod repository;
pub mod results;

pub use client::{ResultFormat, SparqlClient, SparqlEndpoint, SparqlError};
pub use repository::{core_pathways, GeneLookup, PathwayRepository};
pub use results::{Binding, RdfTerm, SparqlResults};
