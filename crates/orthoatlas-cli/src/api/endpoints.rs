//! API endpoint URL builders
//!
//! Helper functions to construct Ensembl and Protein Atlas URLs. Base URLs
//! are expected without a trailing slash (see [`crate::config::Config`]).

/// Build the homology-by-symbol URL
///
/// Requests cDNA orthologues of `symbol` in the target species. The symbol is
/// percent-encoded since it lands in the path.
pub fn homology_url(
    base_url: &str,
    source_species: &str,
    symbol: &str,
    target_species: &str,
    target_taxon: u32,
) -> String {
    format!(
        "{}/homology/symbol/{}/{}?sequence=cdna&target_taxon={}&target_species={}&type=orthologues&content-type=application/json",
        base_url,
        source_species,
        urlencoding::encode(symbol),
        target_taxon,
        target_species
    )
}

/// Build the batch symbol lookup URL
pub fn lookup_symbol_url(base_url: &str, species: &str) -> String {
    format!("{}/lookup/symbol/{}", base_url, species)
}

/// Build the Protein Atlas entry URL for a gene
pub fn atlas_entry_url(base_url: &str, gene_id: &str) -> String {
    format!("{}/{}.xml", base_url, urlencoding::encode(gene_id))
}
