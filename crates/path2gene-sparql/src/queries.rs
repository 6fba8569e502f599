//! SELECT templates against the uniprot and ITAG annotation graphs.

use path2gene_common::GraphSet;

use crate::escape::{escape_iri, escape_literal};

const PREFIXES: &str = "\
    PREFIX gene:<http://pbr.wur.nl/GENE#>
    PREFIX rdfs:<http://www.w3.org/2000/01/rdf-schema#>
    PREFIX uniprot:<http://purl.uniprot.org/core/>";

/// Distinct pathway descriptions in the uniprot graph whose text matches
/// `fragment` as a case-insensitive regex, ascending.
pub fn search_pathways(graphs: &GraphSet, fragment: &str) -> String {
    format!(
        r#"{prefixes}
    SELECT DISTINCT ?pathdesc
    FROM <{uniprot}>
    WHERE {{
        ?prot uniprot:annotation ?annot .
        ?annot rdfs:seeAlso ?url .
        ?annot rdfs:comment ?pathdesc .
        FILTER (
            regex(?pathdesc, "{search}", "i")
        )
    }} ORDER BY ASC(?pathdesc)
"#,
        prefixes = PREFIXES,
        uniprot = escape_iri(&graphs.uniprot),
        search = escape_literal(fragment),
    )
}

/// Genes annotated with any pathway matching `fragment` (case-insensitive
/// regex), with their description and the matched pathway, by gene.
pub fn genes_for_pathway_fuzzy(graphs: &GraphSet, fragment: &str) -> String {
    format!(
        r#"{prefixes}
    SELECT DISTINCT ?gene ?desc ?pathdesc
    FROM <{itag}>
    FROM <{uniprot}>
    WHERE {{
        ?geneobj gene:Protein ?prot .
        ?geneobj gene:Description ?desc .
        ?geneobj gene:FeatureName ?gene .
        ?prot uniprot:annotation ?annot .
        ?annot rdfs:seeAlso ?url .
        ?annot rdfs:comment ?pathdesc .
        FILTER (
            regex(?pathdesc, "{search}", "i")
        )
    }} ORDER BY ASC(?gene)
"#,
        prefixes = PREFIXES,
        itag = escape_iri(&graphs.itag),
        uniprot = escape_iri(&graphs.uniprot),
        search = escape_literal(fragment),
    )
}

/// Genes annotated with exactly `pathway`. Rows carry no pathway column.
pub fn genes_for_pathway_exact(graphs: &GraphSet, pathway: &str) -> String {
    format!(
        r#"{prefixes}
    SELECT DISTINCT ?gene ?desc
    FROM <{itag}>
    FROM <{uniprot}>
    WHERE {{
        ?geneobj gene:Protein ?prot .
        ?geneobj gene:Description ?desc .
        ?geneobj gene:FeatureName ?gene .
        ?prot uniprot:annotation ?annot .
        ?annot rdfs:seeAlso ?url .
        ?annot rdfs:comment "{search}" .
    }} ORDER BY ASC(?gene)
"#,
        prefixes = PREFIXES,
        itag = escape_iri(&graphs.itag),
        uniprot = escape_iri(&graphs.uniprot),
        search = escape_literal(pathway),
    )
}
