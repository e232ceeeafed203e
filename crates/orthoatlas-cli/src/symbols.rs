//! Gene symbol input files

use crate::error::{CliError, Result};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read gene symbols, one per line
///
/// Surrounding whitespace is trimmed and blank lines are skipped, so a file
/// with Windows line endings or trailing blank lines reads the same.
pub fn read_symbols(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound(path.display().to_string()),
        _ => CliError::Io(e),
    })?;

    let symbols = parse_symbols(BufReader::new(file))?;
    debug!(path = %path.display(), count = symbols.len(), "Read gene symbols");

    Ok(symbols)
}

/// Parse symbols from any buffered reader
pub fn parse_symbols<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut symbols = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let symbol = line.trim();
        if !symbol.is_empty() {
            symbols.push(symbol.to_string());
        }
    }

    Ok(symbols)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_lines_are_skipped() {
        let symbols = parse_symbols("TP53\n\nBRCA1\n".as_bytes()).unwrap();
        assert_eq!(symbols, vec!["TP53", "BRCA1"]);
    }

    #[test]
    fn test_crlf_and_whitespace_lines() {
        let symbols = parse_symbols("ALB\r\n   \r\n  MYH7 \r\n".as_bytes()).unwrap();
        assert_eq!(symbols, vec!["ALB", "MYH7"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_symbols("".as_bytes()).unwrap().is_empty());
        assert!(parse_symbols("\n\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_symbols_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "TP53\nMDM2\n").unwrap();

        let symbols = read_symbols(file.path()).unwrap();
        assert_eq!(symbols, vec!["TP53", "MDM2"]);
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_symbols(&dir.path().join("genes.txt"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
