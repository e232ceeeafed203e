//! Shared fixtures for orthoatlas integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TP53_HUMAN_ID: &str = "ENSG00000141510";

/// Homology response naming the given human targets
pub fn homology_response(target_ids: &[&str]) -> Value {
    if target_ids.is_empty() {
        return json!({ "data": [] });
    }

    let homologies: Vec<Value> = target_ids
        .iter()
        .map(|id| {
            json!({
                "type": "ortholog_one2one",
                "target": { "id": id, "species": "homo_sapiens", "taxon_id": 9606 },
                "source": { "id": "ENSSSCG00000017940", "species": "sus_scrofa" }
            })
        })
        .collect();

    json!({ "data": [{ "id": "ENSSSCG00000017940", "homologies": homologies }] })
}

/// Protein Atlas entry with a consensus tissue list
pub fn atlas_entry_xml(name: &str, tissues: &[&str]) -> String {
    let tissue_xml: String = tissues
        .iter()
        .map(|t| format!("<tissue>{}</tissue>", t))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<proteinAtlas schemaVersion="5.3">
  <entry version="23.0">
    <name>{name}</name>
    <rnaExpression assayType="consensusTissue" technology="RNAseq">
      <rnaSpecificity specificity="Tissue enhanced">{tissue_xml}</rnaSpecificity>
    </rnaExpression>
    <rnaExpression assayType="immuneCell" technology="RNAseq">
      <rnaSpecificity specificity="Low immune cell specificity"/>
    </rnaExpression>
    <cellTypeExpression source="singleCellType">
      <cellTypeSpecificity><cellType>Hepatocytes</cellType></cellTypeSpecificity>
      <cellTypeExpressionCluster>Liver - Metabolism</cellTypeExpressionCluster>
    </cellTypeExpression>
  </entry>
</proteinAtlas>"#
    )
}

/// Mount a homology response for one pig symbol
pub async fn mount_homology(server: &MockServer, symbol: &str, target_ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/homology/symbol/Sus_scrofa/{}", symbol)))
        .respond_with(ResponseTemplate::new(200).set_body_json(homology_response(target_ids)))
        .mount(server)
        .await;
}

/// Mount a Protein Atlas entry for one human gene id
pub async fn mount_atlas_entry(server: &MockServer, gene_id: &str, name: &str, tissues: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/{}.xml", gene_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(atlas_entry_xml(name, tissues), "application/xml"),
        )
        .mount(server)
        .await;
}

/// Write a symbol file into a fresh temp dir
pub fn symbol_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("genes.txt");
    std::fs::write(&path, contents).expect("Failed to write symbol file");
    (dir, path)
}
