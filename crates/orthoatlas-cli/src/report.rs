//! Report formatting
//!
//! Two layouts share one writer: a per-gene verbose block and a
//! tab-separated table with a single header line.

use clap::ValueEnum;
use orthoatlas_common::types::ExpressionRecord;
use std::io::{self, Write};

/// Header written once at the top of a tabular report.
///
/// The first two labels are historical: the "Id" column holds the queried
/// symbol and the "Symbol" column holds the entry name. No gene id column is
/// emitted. Kept verbatim so existing consumers of the table keep working.
pub const TABULAR_HEADER: &str = "Id\tSymbol\tTissue Specificity\tSingle cell type specificity\tSingle cell type expression cluster\tImmune cell specificity\tBrain specificity";

/// Report layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// One labelled line per field under the entry name
    #[default]
    Verbose,
    /// One tab-separated row per symbol/orthologue pair
    Tabular,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Verbose => write!(f, "verbose"),
            OutputMode::Tabular => write!(f, "tabular"),
        }
    }
}

/// Render a verbose block, including the trailing newline
pub fn format_verbose(record: &ExpressionRecord) -> String {
    format!(
        "{}\n\
         \tTissue specificity: {}\n\
         \tSingle cell type specificity: {}\n\
         \tSingle cell type expression cluster: {}\n\
         \tImmune cell specificity: {}\n\
         \tBrain specificity: {}\n",
        record.name,
        record.tissues_joined(),
        record.cell_types_joined(),
        record.single_cell_expression_cluster,
        record.immune_cell_specificity,
        record.brain_region_specificity,
    )
}

/// Render a tabular row for the queried symbol, without trailing newline
pub fn format_tabular_row(symbol: &str, record: &ExpressionRecord) -> String {
    [
        symbol,
        record.name.as_str(),
        record.tissues_joined().as_str(),
        record.cell_types_joined().as_str(),
        record.single_cell_expression_cluster.as_str(),
        record.immune_cell_specificity.as_str(),
        record.brain_region_specificity.as_str(),
    ]
    .join("\t")
}

/// Streams report output in the selected layout
pub struct ReportWriter<W: Write> {
    out: W,
    mode: OutputMode,
    header_written: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode,
            header_written: false,
        }
    }

    /// Write the table header; a no-op in verbose mode or when already written
    pub fn begin(&mut self) -> io::Result<()> {
        if self.mode == OutputMode::Tabular && !self.header_written {
            writeln!(self.out, "{}", TABULAR_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Write one report for a symbol/orthologue pair
    pub fn write_record(&mut self, symbol: &str, record: &ExpressionRecord) -> io::Result<()> {
        self.begin()?;

        match self.mode {
            OutputMode::Verbose => self.out.write_all(format_verbose(record).as_bytes())?,
            OutputMode::Tabular => writeln!(self.out, "{}", format_tabular_row(symbol, record))?,
        }

        Ok(())
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn p53() -> ExpressionRecord {
        ExpressionRecord {
            name: "P53_HUMAN".to_string(),
            consensus_tissue_specificity: vec!["liver".to_string(), "spleen".to_string()],
            single_cell_type_specificity: vec!["B-cells".to_string(), "T-cells".to_string()],
            single_cell_expression_cluster: "Immune cells - Cell proliferation".to_string(),
            immune_cell_specificity: "immune cell enhanced".to_string(),
            brain_region_specificity: "low regional specificity".to_string(),
        }
    }

    #[test]
    fn test_format_verbose() {
        let block = format_verbose(&p53());
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(
            lines,
            vec![
                "P53_HUMAN",
                "\tTissue specificity: liver, spleen",
                "\tSingle cell type specificity: B-cells,T-cells",
                "\tSingle cell type expression cluster: Immune cells - Cell proliferation",
                "\tImmune cell specificity: immune cell enhanced",
                "\tBrain specificity: low regional specificity",
            ]
        );
    }

    #[test]
    fn test_format_verbose_empty_fields_keep_labels() {
        let block = format_verbose(&ExpressionRecord::new("EMPTY"));
        assert!(block.contains("\tTissue specificity: \n"));
        assert!(block.contains("\tBrain specificity: \n"));
        assert_eq!(block.lines().count(), 6);
    }

    #[test]
    fn test_format_tabular_row() {
        let row = format_tabular_row("TP53", &p53());
        assert_eq!(
            row,
            "TP53\tP53_HUMAN\tliver, spleen\tB-cells,T-cells\tImmune cells - Cell proliferation\timmune cell enhanced\tlow regional specificity"
        );
        assert_eq!(row.split('\t').count(), TABULAR_HEADER.split('\t').count());
    }

    #[test]
    fn test_tabular_empty_record_keeps_column_count() {
        let row = format_tabular_row("BRCA1", &ExpressionRecord::default());
        assert_eq!(row, "BRCA1\t\t\t\t\t\t");
    }

    #[test]
    fn test_header_written_once() {
        let mut writer = ReportWriter::new(Vec::new(), OutputMode::Tabular);
        writer.begin().unwrap();
        writer.write_record("TP53", &p53()).unwrap();
        writer.write_record("MDM2", &ExpressionRecord::new("MDM2")).unwrap();

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TABULAR_HEADER);
        assert!(lines[1].starts_with("TP53\tP53_HUMAN\t"));
        assert!(lines[2].starts_with("MDM2\tMDM2\t"));
    }

    #[test]
    fn test_verbose_writer_has_no_header() {
        let mut writer = ReportWriter::new(Vec::new(), OutputMode::Verbose);
        writer.begin().unwrap();
        writer.write_record("TP53", &p53()).unwrap();

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(output.starts_with("P53_HUMAN\n"));
        assert!(!output.contains(TABULAR_HEADER));
    }
}
