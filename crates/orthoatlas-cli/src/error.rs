//! Error types for the orthoatlas CLI
//!
//! Every error carries a message an operator can act on. The batch runner
//! decides whether an error ends the run or only skips the current gene.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input symbol file is missing
    #[error("File not found: '{0}'. Pass the gene symbol list with --file <path>.")]
    FileNotFound(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed or returned a non-success status
    #[error("Network request failed: {0}. Check your internet connection and the API base URLs.")]
    Http(#[from] reqwest::Error),

    /// Ensembl returned JSON that does not match the expected shape
    #[error("Failed to parse Ensembl response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Protein Atlas returned XML that could not be decoded
    #[error("Failed to parse Protein Atlas entry for '{gene_id}': {source}")]
    XmlParse {
        gene_id: String,
        #[source]
        source: quick_xml::DeError,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your ORTHOATLAS_* environment variables and flags.")]
    Config(String),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an XML decode error for a gene
    pub fn xml_parse(gene_id: impl Into<String>, source: quick_xml::DeError) -> Self {
        Self::XmlParse {
            gene_id: gene_id.into(),
            source,
        }
    }
}
