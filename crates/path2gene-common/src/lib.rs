//! path2gene-common — configuration, errors and result types shared by the
//! SPARQL layer and the web front-end.

pub mod error;
pub mod config;
pub mod entities;

// Re-export commonly used types
pub use config::{Config, GraphSet, ServerConfig};
pub use entities::{GeneRecord, GeneReport};
pub use error::ConfigError;
