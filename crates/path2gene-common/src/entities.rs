//! Per-request result types. Nothing here outlives a single response.

use serde::Serialize;
use std::collections::BTreeMap;

/// Description and matched pathway for one gene feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneRecord {
    pub description: String,
    pub pathway: String,
}

impl GeneRecord {
    pub fn new(description: impl Into<String>, pathway: impl Into<String>) -> Self {
        Self { description: description.into(), pathway: pathway.into() }
    }
}

/// Gene feature name → record. Keyed by a `BTreeMap` so iteration is
/// already in ascending identifier order for rendering and CSV export.
pub type GeneReport = BTreeMap<String, GeneRecord>;
