//! Protein Atlas entry parsing
//!
//! Turns an HPA gene XML document into an [`ExpressionRecord`]. Extraction is
//! best effort: missing elements become empty values. Of the `rnaExpression`
//! elements only three assay types are read, and when an assay appears more
//! than once the last occurrence wins.

use orthoatlas_common::types::{AssayType, ExpressionRecord};
use serde::Deserialize;
use tracing::debug;

/// Document root (`<proteinAtlas>`)
#[derive(Debug, Default, Deserialize)]
struct ProteinAtlas {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

/// One gene entry
///
/// Elements that should appear once are still collected as lists so a
/// repeated element merges instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
struct Entry {
    #[serde(rename = "name", default)]
    names: Vec<TextNode>,
    #[serde(rename = "rnaExpression", default)]
    rna_expressions: Vec<RnaExpression>,
    #[serde(rename = "cellTypeExpression", default)]
    cell_type_expressions: Vec<CellTypeExpression>,
}

/// Element whose text is the only thing we need; attributes are ignored
#[derive(Debug, Default, Deserialize)]
struct TextNode {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct RnaExpression {
    #[serde(rename = "@assayType", default)]
    assay_type: String,
    #[serde(rename = "rnaSpecificity", default)]
    specificities: Vec<RnaSpecificity>,
}

#[derive(Debug, Default, Deserialize)]
struct RnaSpecificity {
    #[serde(rename = "@specificity", default)]
    specificity: Option<String>,
    #[serde(rename = "tissue", default)]
    tissues: Vec<TextNode>,
}

#[derive(Debug, Default, Deserialize)]
struct CellTypeExpression {
    #[serde(rename = "cellTypeSpecificity", default)]
    specificities: Vec<CellTypeSpecificity>,
    #[serde(rename = "cellTypeExpressionCluster", default)]
    clusters: Vec<TextNode>,
}

#[derive(Debug, Default, Deserialize)]
struct CellTypeSpecificity {
    #[serde(rename = "cellType", default)]
    cell_types: Vec<TextNode>,
}

fn text(node: TextNode) -> String {
    node.value.trim().to_string()
}

fn texts(nodes: Vec<TextNode>) -> Vec<String> {
    nodes.into_iter().map(text).collect()
}

impl RnaExpression {
    /// Fold repeated `rnaSpecificity` children into one: the last
    /// `specificity` attribute wins, tissue lists concatenate.
    fn merged_specificity(self) -> (String, Vec<String>) {
        let mut specificity = String::new();
        let mut tissues = Vec::new();

        for item in self.specificities {
            if let Some(value) = item.specificity {
                specificity = value;
            }
            tissues.extend(texts(item.tissues));
        }

        (specificity, tissues)
    }
}

impl Entry {
    fn into_record(self) -> ExpressionRecord {
        let name = self.names.into_iter().last().map(text).unwrap_or_default();
        let mut record = ExpressionRecord::new(name);

        for expression in self.rna_expressions {
            let Ok(assay) = expression.assay_type.parse::<AssayType>() else {
                continue;
            };
            let (specificity, tissues) = expression.merged_specificity();

            match assay {
                AssayType::ConsensusTissue => record.set_tissues(tissues),
                AssayType::ImmuneCell | AssayType::HumanBrainRegional => {
                    record.set_assay_specificity(assay, specificity)
                },
            }
        }

        // Cell types accumulate across repeated blocks; the cluster is last-wins.
        for cell_expression in self.cell_type_expressions {
            for specificity in cell_expression.specificities {
                record
                    .single_cell_type_specificity
                    .extend(texts(specificity.cell_types));
            }
            if let Some(cluster) = cell_expression.clusters.into_iter().last() {
                record.single_cell_expression_cluster = text(cluster);
            }
        }

        record
    }
}

/// Parse an HPA entry document into an expression record
///
/// When the document holds several entries the first one is used; a document
/// without any entry yields an empty record.
pub fn parse_expression_record(xml: &str) -> Result<ExpressionRecord, quick_xml::DeError> {
    let atlas: ProteinAtlas = quick_xml::de::from_str(xml)?;

    if atlas.entries.len() > 1 {
        debug!(entries = atlas.entries.len(), "Document has several entries, using the first");
    }

    Ok(atlas
        .entries
        .into_iter()
        .next()
        .map(Entry::into_record)
        .unwrap_or_default())
}
