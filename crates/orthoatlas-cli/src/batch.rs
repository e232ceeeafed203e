//! Batch runner
//!
//! Walks the symbol list strictly in order: resolve each symbol, then fetch
//! and report each orthologue in resolver order. One request is in flight at
//! a time, so report order always follows input order.

use crate::error::Result;
use crate::report::ReportWriter;
use crate::resolver::{AnnotationSource, GeneResolver};
use clap::ValueEnum;
use std::io::Write;
use tracing::{debug, info, info_span, warn, Instrument};

/// What to do when a lookup fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failure
    #[default]
    Abort,
    /// Log a warning, skip the failing symbol or orthologue, and continue
    Skip,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Symbols processed
    pub symbols: usize,
    /// Orthologues returned by the resolver
    pub orthologs: usize,
    /// Reports written
    pub reports: usize,
    /// Lookups skipped under [`ErrorPolicy::Skip`]
    pub failures: usize,
}

/// Drives resolution and annotation for a list of symbols
pub struct BatchRunner<'a> {
    resolver: &'a dyn GeneResolver,
    annotations: &'a dyn AnnotationSource,
    policy: ErrorPolicy,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        resolver: &'a dyn GeneResolver,
        annotations: &'a dyn AnnotationSource,
        policy: ErrorPolicy,
    ) -> Self {
        Self {
            resolver,
            annotations,
            policy,
        }
    }

    /// Process every symbol, writing reports as they are produced
    ///
    /// Under [`ErrorPolicy::Abort`] the first lookup error is returned and
    /// reports written before it stay written. Write errors are always fatal.
    pub async fn run<W: Write>(
        &self,
        symbols: &[String],
        report: &mut ReportWriter<W>,
    ) -> Result<BatchSummary> {
        debug!(
            resolver = self.resolver.name(),
            mode = %report.mode(),
            policy = ?self.policy,
            symbols = symbols.len(),
            "Starting batch"
        );

        let mut summary = BatchSummary::default();
        report.begin()?;

        for symbol in symbols {
            summary.symbols += 1;

            let span = info_span!("symbol", symbol = %symbol);
            let gene_ids = match self.resolver.resolve(symbol).instrument(span.clone()).await {
                Ok(ids) => ids,
                Err(e) if self.policy == ErrorPolicy::Skip => {
                    warn!(symbol = %symbol, error = %e, "Ortholog resolution failed, skipping symbol");
                    summary.failures += 1;
                    continue;
                },
                Err(e) => return Err(e),
            };

            if gene_ids.is_empty() {
                info!(symbol = %symbol, "No orthologue found");
                continue;
            }

            summary.orthologs += gene_ids.len();

            for gene_id in &gene_ids {
                let record = match self.annotations.expression(gene_id).instrument(span.clone()).await {
                    Ok(record) => record,
                    Err(e) if self.policy == ErrorPolicy::Skip => {
                        warn!(symbol = %symbol, gene_id = %gene_id, error = %e, "Annotation fetch failed, skipping orthologue");
                        summary.failures += 1;
                        continue;
                    },
                    Err(e) => return Err(e),
                };

                report.write_record(symbol, &record)?;
                summary.reports += 1;
            }
        }

        info!(
            symbols = summary.symbols,
            orthologs = summary.orthologs,
            reports = summary.reports,
            failures = summary.failures,
            "Batch complete"
        );

        Ok(summary)
    }
}
