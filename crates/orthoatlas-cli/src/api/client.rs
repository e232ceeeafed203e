//! HTTP clients for Ensembl and the Human Protein Atlas
//!
//! Both clients share one `reqwest::Client`. Every call reads the whole body,
//! checks the status, and decodes it; nothing is retried.

use crate::api::{endpoints, types::*};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::expression;
use orthoatlas_common::types::ExpressionRecord;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Build the shared HTTP client
pub fn build_http_client(config: &Config) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("orthoatlas/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Client for the Ensembl REST API
#[derive(Debug, Clone)]
pub struct EnsemblClient {
    client: Client,
    base_url: String,
    source_species: String,
    target_species: String,
    target_taxon: u32,
    lookup_species: String,
}

impl EnsemblClient {
    /// Create a new Ensembl client
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.ensembl_url.clone(),
            source_species: config.source_species.clone(),
            target_species: config.target_species.clone(),
            target_taxon: config.target_taxon,
            lookup_species: config.lookup_species.clone(),
        }
    }

    /// Human orthologue gene ids for a source-species symbol
    #[instrument(skip(self))]
    pub async fn orthologue_ids(&self, symbol: &str) -> Result<Vec<String>> {
        let url = endpoints::homology_url(
            &self.base_url,
            &self.source_species,
            symbol,
            &self.target_species,
            self.target_taxon,
        );

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: HomologyResponse = serde_json::from_str(&body)?;
        let ids = response.target_ids();

        debug!(count = ids.len(), "Homology lookup returned targets");
        Ok(ids)
    }

    /// Gene id for a symbol in the lookup species, if Ensembl knows it
    #[instrument(skip(self))]
    pub async fn lookup_symbol(&self, symbol: &str) -> Result<Option<String>> {
        let url = endpoints::lookup_symbol_url(&self.base_url, &self.lookup_species);

        let request = LookupRequest {
            symbols: vec![symbol.to_string()],
        };

        let body = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let mut response: LookupResponse = serde_json::from_str(&body)?;
        let id = response.remove(symbol).flatten().map(|gene| gene.id);

        debug!(found = id.is_some(), "Symbol lookup finished");
        Ok(id)
    }
}

/// Client for Human Protein Atlas entry documents
#[derive(Debug, Clone)]
pub struct AtlasClient {
    client: Client,
    base_url: String,
}

impl AtlasClient {
    /// Create a new Protein Atlas client
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.atlas_url.clone(),
        }
    }

    /// Download the raw XML entry for a human gene id
    #[instrument(skip(self))]
    pub async fn fetch_entry_xml(&self, gene_id: &str) -> Result<String> {
        let url = endpoints::atlas_entry_url(&self.base_url, gene_id);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!(bytes = body.len(), "Fetched Protein Atlas entry");
        Ok(body)
    }

    /// Fetch and extract the expression record for a human gene id
    pub async fn fetch_expression(&self, gene_id: &str) -> Result<ExpressionRecord> {
        let xml = self.fetch_entry_xml(gene_id).await?;
        expression::parse_expression_record(&xml)
            .map_err(|source| CliError::xml_parse(gene_id, source))
    }
}
