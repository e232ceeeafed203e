//! Ensembl request and response types
//!
//! Only the fields the resolvers read are modelled; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response from the homology endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomologyResponse {
    #[serde(default)]
    pub data: Vec<HomologyData>,
}

/// Homologies of one source gene
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomologyData {
    #[serde(default)]
    pub homologies: Vec<Homology>,
}

/// A single homology relation
#[derive(Debug, Clone, Deserialize)]
pub struct Homology {
    pub target: HomologyTarget,
}

/// The gene on the target side of a homology
#[derive(Debug, Clone, Deserialize)]
pub struct HomologyTarget {
    pub id: String,
}

impl HomologyResponse {
    /// Every target id across all records, in response order
    pub fn target_ids(&self) -> Vec<String> {
        self.data
            .iter()
            .flat_map(|d| d.homologies.iter())
            .map(|h| h.target.id.clone())
            .collect()
    }
}

/// Body of a batch symbol lookup
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    pub symbols: Vec<String>,
}

/// Gene record returned by the symbol lookup endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GeneLookup {
    pub id: String,
}

/// Lookup response keyed by queried symbol; unknown symbols may map to `null`
pub type LookupResponse = HashMap<String, Option<GeneLookup>>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_target_ids_flatten_in_order() {
        let json = r#"{
            "data": [
                {"id": "ENSSSCG00000017957", "homologies": [
                    {"type": "ortholog_one2many", "target": {"id": "ENSG00000000001", "species": "homo_sapiens"}},
                    {"type": "ortholog_one2many", "target": {"id": "ENSG00000000002", "species": "homo_sapiens"}}
                ]},
                {"homologies": []},
                {"homologies": [{"target": {"id": "ENSG00000000003"}}]}
            ]
        }"#;

        let response: HomologyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.target_ids(),
            vec!["ENSG00000000001", "ENSG00000000002", "ENSG00000000003"]
        );
    }

    #[test]
    fn test_empty_data_yields_no_ids() {
        let response: HomologyResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.target_ids().is_empty());

        let response: HomologyResponse = serde_json::from_str("{}").unwrap();
        assert!(response.target_ids().is_empty());
    }

    #[test]
    fn test_missing_target_id_is_decode_error() {
        let json = r#"{"data": [{"homologies": [{"target": {"species": "homo_sapiens"}}]}]}"#;
        assert!(serde_json::from_str::<HomologyResponse>(json).is_err());
    }

    #[test]
    fn test_lookup_response_with_null_entry() {
        let json = r#"{
            "BRCA2": {"id": "ENSG00000139618", "display_name": "BRCA2", "version": 17},
            "NOTAGENE": null
        }"#;

        let response: LookupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response["BRCA2"].as_ref().unwrap().id, "ENSG00000139618");
        assert!(response["NOTAGENE"].is_none());
    }

    #[test]
    fn test_lookup_id_must_be_string() {
        let json = r#"{"BRCA2": {"id": 42}}"#;
        assert!(serde_json::from_str::<LookupResponse>(json).is_err());
    }

    #[test]
    fn test_lookup_request_serialization() {
        let request = LookupRequest {
            symbols: vec!["BRCA2".to_string()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"symbols":["BRCA2"]}"#);
    }
}
