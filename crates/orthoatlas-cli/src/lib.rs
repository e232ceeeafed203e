//! Orthoatlas CLI Library
//!
//! Reports human tissue and cell-type expression for pig genes.
//!
//! # Overview
//!
//! For every gene symbol in the input file the CLI:
//!
//! - **Resolves orthologues**: asks the Ensembl homology endpoint for the
//!   human orthologues of the pig symbol (or, with `--resolver lookup`, looks
//!   the symbol up directly as a human gene)
//! - **Fetches annotations**: downloads the Human Protein Atlas entry of each
//!   human gene and extracts its expression specificity fields
//! - **Reports**: prints a verbose block or a tab-separated row per
//!   symbol/orthologue pair, in input order

pub mod api;
pub mod batch;
pub mod config;
pub mod error;
pub mod expression;
pub mod report;
pub mod resolver;
pub mod symbols;

// Re-export commonly used types
pub use batch::{BatchRunner, BatchSummary, ErrorPolicy};
pub use config::Config;
pub use error::{CliError, Result};
pub use report::{OutputMode, ReportWriter};
pub use resolver::ResolverKind;

use clap::Parser;
use std::path::PathBuf;

/// Orthoatlas - human expression profiles for pig genes
#[derive(Parser, Debug)]
#[command(name = "orthoatlas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with one gene symbol per line
    #[arg(long, default_value = "genes.txt")]
    pub file: PathBuf,

    /// Report layout
    #[arg(long, value_enum, default_value_t = OutputMode::Verbose)]
    pub format: OutputMode,

    /// What to do when a lookup fails
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Abort)]
    pub on_error: ErrorPolicy,

    /// How input symbols are mapped to human genes
    #[arg(long, value_enum, default_value_t = ResolverKind::Homology)]
    pub resolver: ResolverKind,

    /// Ensembl REST base URL
    #[arg(long, env = "ORTHOATLAS_ENSEMBL_URL")]
    pub ensembl_url: Option<String>,

    /// Human Protein Atlas base URL
    #[arg(long, env = "ORTHOATLAS_ATLAS_URL")]
    pub atlas_url: Option<String>,

    /// Source species for homology lookups (Ensembl name)
    #[arg(long, env = "ORTHOATLAS_SOURCE_SPECIES")]
    pub species: Option<String>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the CLI reference as Markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Cli {
    /// Merge environment configuration with command-line overrides
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;

        if let Some(ref url) = self.ensembl_url {
            config.set_ensembl_url(url)?;
        }

        if let Some(ref url) = self.atlas_url {
            config.set_atlas_url(url)?;
        }

        if let Some(ref species) = self.species {
            config.source_species = species.clone();
        }

        Ok(config)
    }
}

/// Run a full batch, writing the report to `out`
pub async fn run<W: std::io::Write>(cli: &Cli, out: W) -> Result<BatchSummary> {
    let config = cli.config()?;
    let symbols = symbols::read_symbols(&cli.file)?;

    let http = api::build_http_client(&config)?;
    let resolver = cli.resolver.build(api::EnsemblClient::new(http.clone(), &config));
    let atlas = api::AtlasClient::new(http, &config);

    let mut report = ReportWriter::new(out, cli.format);
    let result = BatchRunner::new(resolver.as_ref(), &atlas, cli.on_error)
        .run(&symbols, &mut report)
        .await;

    // Flush whatever was written, even when the batch aborted
    report.finish()?;
    result
}
