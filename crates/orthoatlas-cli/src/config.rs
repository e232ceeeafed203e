//! Configuration management for the orthoatlas CLI
//!
//! Settings come from defaults, then `ORTHOATLAS_*` environment variables,
//! then command-line flags. The binary loads a `.env` file before parsing.

use crate::error::{CliError, Result};
use url::Url;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Ensembl REST base URL.
pub const DEFAULT_ENSEMBL_URL: &str = "https://rest.ensembl.org";

/// Human Protein Atlas base URL.
pub const DEFAULT_ATLAS_URL: &str = "https://www.proteinatlas.org";

/// Species whose symbols are read from the input file.
pub const DEFAULT_SOURCE_SPECIES: &str = "Sus_scrofa";

/// Target species alias sent to the homology endpoint.
pub const DEFAULT_TARGET_SPECIES: &str = "human";

/// NCBI taxon of the target species (Homo sapiens).
pub const DEFAULT_TARGET_TAXON: u32 = 9606;

/// Species path segment for direct symbol lookups.
pub const DEFAULT_LOOKUP_SPECIES: &str = "homo_sapiens";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ensembl REST base URL, without trailing slash
    pub ensembl_url: String,

    /// Protein Atlas base URL, without trailing slash
    pub atlas_url: String,

    /// Source species for homology lookups
    pub source_species: String,

    /// Target species alias for homology lookups
    pub target_species: String,

    /// Target NCBI taxon for homology lookups
    pub target_taxon: u32,

    /// Species for direct symbol lookups
    pub lookup_species: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ensembl_url: DEFAULT_ENSEMBL_URL.to_string(),
            atlas_url: DEFAULT_ATLAS_URL.to_string(),
            source_species: DEFAULT_SOURCE_SPECIES.to_string(),
            target_species: DEFAULT_TARGET_SPECIES.to_string(),
            target_taxon: DEFAULT_TARGET_TAXON,
            lookup_species: DEFAULT_LOOKUP_SPECIES.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from environment variables
    ///
    /// - `ORTHOATLAS_ENSEMBL_URL`
    /// - `ORTHOATLAS_ATLAS_URL`
    /// - `ORTHOATLAS_SOURCE_SPECIES`
    /// - `ORTHOATLAS_TARGET_SPECIES`
    /// - `ORTHOATLAS_TARGET_TAXON`
    /// - `ORTHOATLAS_LOOKUP_SPECIES`
    /// - `ORTHOATLAS_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("ORTHOATLAS_ENSEMBL_URL") {
            config.set_ensembl_url(&url)?;
        }

        if let Ok(url) = std::env::var("ORTHOATLAS_ATLAS_URL") {
            config.set_atlas_url(&url)?;
        }

        if let Ok(species) = std::env::var("ORTHOATLAS_SOURCE_SPECIES") {
            config.source_species = species;
        }

        if let Ok(species) = std::env::var("ORTHOATLAS_TARGET_SPECIES") {
            config.target_species = species;
        }

        if let Ok(taxon) = std::env::var("ORTHOATLAS_TARGET_TAXON") {
            config.target_taxon = taxon.parse().map_err(|_| {
                CliError::config(format!("ORTHOATLAS_TARGET_TAXON must be a number, got '{}'", taxon))
            })?;
        }

        if let Ok(species) = std::env::var("ORTHOATLAS_LOOKUP_SPECIES") {
            config.lookup_species = species;
        }

        if let Ok(secs) = std::env::var("ORTHOATLAS_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse().map_err(|_| {
                CliError::config(format!("ORTHOATLAS_TIMEOUT_SECS must be a number, got '{}'", secs))
            })?;
        }

        Ok(config)
    }

    /// Set the Ensembl base URL
    pub fn set_ensembl_url(&mut self, url: &str) -> Result<()> {
        self.ensembl_url = normalize_base_url(url)?;
        Ok(())
    }

    /// Set the Protein Atlas base URL
    pub fn set_atlas_url(&mut self, url: &str) -> Result<()> {
        self.atlas_url = normalize_base_url(url)?;
        Ok(())
    }
}

/// Validate a base URL and strip trailing slashes so paths can be appended
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|e| CliError::config(format!("invalid base URL '{}': {}", raw, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CliError::config(format!(
            "base URL '{}' must use http or https",
            raw
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
