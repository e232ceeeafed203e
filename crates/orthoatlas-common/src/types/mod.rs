//! Domain types for expression reports

use crate::error::OrthoError;

/// Assay tags recognised on Protein Atlas `rnaExpression` elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssayType {
    /// Consensus tissue dataset (HPA + GTEx)
    ConsensusTissue,
    /// Immune cell dataset
    ImmuneCell,
    /// Regional human brain dataset
    HumanBrainRegional,
}

impl AssayType {
    /// The tag as it appears in the `assayType` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            AssayType::ConsensusTissue => "consensusTissue",
            AssayType::ImmuneCell => "immuneCell",
            AssayType::HumanBrainRegional => "humanBrainRegional",
        }
    }
}

impl std::str::FromStr for AssayType {
    type Err = OrthoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "consensusTissue" => Ok(AssayType::ConsensusTissue),
            "immuneCell" => Ok(AssayType::ImmuneCell),
            "humanBrainRegional" => Ok(AssayType::HumanBrainRegional),
            _ => Err(OrthoError::UnknownAssay(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expression annotations extracted for one human gene
///
/// Every field defaults to empty; an annotation document that lacks a field
/// produces an empty value rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionRecord {
    /// Display name of the entry
    pub name: String,

    /// Tissues from the consensus tissue assay, in document order
    pub consensus_tissue_specificity: Vec<String>,

    /// Cell types from the single cell type dataset, in document order
    pub single_cell_type_specificity: Vec<String>,

    /// Single cell type expression cluster description
    pub single_cell_expression_cluster: String,

    /// Specificity category from the immune cell assay
    pub immune_cell_specificity: String,

    /// Specificity category from the brain regional assay
    pub brain_region_specificity: String,
}

impl ExpressionRecord {
    /// Create an empty record with a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Assign the single-valued specificity of an assay.
    ///
    /// The consensus tissue assay carries a tissue list rather than a single
    /// value, so it is ignored here; see [`ExpressionRecord::set_tissues`].
    pub fn set_assay_specificity(&mut self, assay: AssayType, specificity: impl Into<String>) {
        match assay {
            AssayType::ImmuneCell => self.immune_cell_specificity = specificity.into(),
            AssayType::HumanBrainRegional => self.brain_region_specificity = specificity.into(),
            AssayType::ConsensusTissue => {},
        }
    }

    /// Replace the consensus tissue list
    pub fn set_tissues(&mut self, tissues: Vec<String>) {
        self.consensus_tissue_specificity = tissues;
    }

    /// Tissues joined the way reports print them
    pub fn tissues_joined(&self) -> String {
        self.consensus_tissue_specificity.join(", ")
    }

    /// Cell types joined the way reports print them
    pub fn cell_types_joined(&self) -> String {
        self.single_cell_type_specificity.join(",")
    }
}
