//! SPARQL 1.1 Query Results JSON Format.

use serde::Deserialize;
use std::collections::HashMap;

/// One row: selected variable name → bound term. Unbound variables are absent.
pub type Binding = HashMap<String, RdfTerm>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: Head,
    pub results: ResultSet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RdfTerm {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
}

impl SparqlResults {
    pub fn bindings(&self) -> &[Binding] {
        &self.results.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    /// Value of `var` in `row`, if bound.
    pub fn value<'a>(row: &'a Binding, var: &str) -> Option<&'a str> {
        row.get(var).map(|term| term.value.as_str())
    }
}
