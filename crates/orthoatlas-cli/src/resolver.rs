//! Ortholog resolution and annotation sources
//!
//! The batch runner talks to these traits so the HTTP clients can be swapped
//! for in-memory fakes in tests.

use crate::api::{AtlasClient, EnsemblClient};
use crate::error::Result;
use async_trait::async_trait;
use clap::ValueEnum;
use orthoatlas_common::types::ExpressionRecord;

/// Maps an input gene symbol to human gene ids
#[async_trait]
pub trait GeneResolver: Send + Sync {
    /// Human gene ids for the symbol, in upstream order; empty when none exist
    async fn resolve(&self, symbol: &str) -> Result<Vec<String>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Supplies expression annotations for human gene ids
#[async_trait]
pub trait AnnotationSource: Send + Sync {
    async fn expression(&self, gene_id: &str) -> Result<ExpressionRecord>;
}

/// Resolution strategy selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
    /// Pig symbol to human orthologues via the Ensembl homology endpoint
    #[default]
    Homology,
    /// Human symbol to human gene id via the Ensembl symbol lookup
    Lookup,
}

impl ResolverKind {
    /// Build the resolver for this strategy
    pub fn build(self, client: EnsemblClient) -> Box<dyn GeneResolver> {
        match self {
            ResolverKind::Homology => Box::new(HomologyResolver::new(client)),
            ResolverKind::Lookup => Box::new(LookupResolver::new(client)),
        }
    }
}

/// Resolves orthologues through `/homology/symbol`
pub struct HomologyResolver {
    client: EnsemblClient,
}

impl HomologyResolver {
    pub fn new(client: EnsemblClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeneResolver for HomologyResolver {
    async fn resolve(&self, symbol: &str) -> Result<Vec<String>> {
        self.client.orthologue_ids(symbol).await
    }

    fn name(&self) -> &'static str {
        "homology"
    }
}

/// Resolves symbols that already name human genes through `/lookup/symbol`
pub struct LookupResolver {
    client: EnsemblClient,
}

impl LookupResolver {
    pub fn new(client: EnsemblClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeneResolver for LookupResolver {
    async fn resolve(&self, symbol: &str) -> Result<Vec<String>> {
        Ok(self.client.lookup_symbol(symbol).await?.into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}

#[async_trait]
impl AnnotationSource for AtlasClient {
    async fn expression(&self, gene_id: &str) -> Result<ExpressionRecord> {
        self.fetch_expression(gene_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::build_http_client;
    use crate::config::Config;

    #[test]
    fn test_resolver_kind_builds_named_resolver() {
        let config = Config::default();
        let client = EnsemblClient::new(build_http_client(&config).unwrap(), &config);

        assert_eq!(ResolverKind::Homology.build(client.clone()).name(), "homology");
        assert_eq!(ResolverKind::Lookup.build(client).name(), "lookup");
    }

    #[test]
    fn test_resolver_kind_parses_from_cli_value() {
        assert_eq!(
            ResolverKind::from_str("lookup", true).unwrap(),
            ResolverKind::Lookup
        );
        assert!(ResolverKind::from_str("orthodb", true).is_err());
    }
}
