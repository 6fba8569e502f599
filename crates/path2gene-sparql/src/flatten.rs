//! Reshape SPARQL bindings into the lists and maps the pages render.
//!
//! Both flatteners keep absent (`None`: the endpoint gave no usable answer)
//! distinct from empty (the query matched zero rows).

use path2gene_common::{GeneRecord, GeneReport};
use tracing::debug;

use crate::results::SparqlResults;

/// `pathdesc` of every row, in response order.
pub fn flatten_pathway_matches(results: Option<&SparqlResults>) -> Option<Vec<String>> {
    let results = results?;
    let pathways = results.bindings().iter()
        .filter_map(|row| {
            let value = SparqlResults::value(row, "pathdesc");
            if value.is_none() {
                debug!("binding without ?pathdesc skipped");
            }
            value.map(String::from)
        })
        .collect();
    Some(pathways)
}

/// Gene → (description, pathway).
///
/// With `pathway_label` set (exact lookup) every record gets that label;
/// otherwise each row's own `pathdesc` is used. When one gene appears in
/// several rows the last row wins.
pub fn flatten_gene_matches(
    results: Option<&SparqlResults>,
    pathway_label: Option<&str>,
) -> Option<GeneReport> {
    let results = results?;
    let mut genes = GeneReport::new();
    for row in results.bindings() {
        let gene = SparqlResults::value(row, "gene");
        let desc = SparqlResults::value(row, "desc");
        let pathway = pathway_label.or_else(|| SparqlResults::value(row, "pathdesc"));

        let (Some(gene), Some(desc), Some(pathway)) = (gene, desc, pathway) else {
            debug!(?row, "incomplete gene binding skipped");
            continue;
        };

        if let Some(previous) = genes.insert(gene.to_string(), GeneRecord::new(desc, pathway)) {
            debug!(gene, dropped_pathway = %previous.pathway, kept_pathway = pathway,
                "gene matched several pathways, keeping the last");
        }
    }
    Some(genes)
}
