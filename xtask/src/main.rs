//! Build automation tasks for orthoatlas
//!
//! Currently generates the Markdown CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for orthoatlas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<orthoatlas_cli::Cli>();

    let content = format!(
        r#"# orthoatlas CLI Reference

Generated from the CLI source code on {}.

## Overview

`orthoatlas` reads pig gene symbols from a file, resolves their human
orthologues through the Ensembl REST API, and prints tissue and cell-type
expression specificity from the Human Protein Atlas for each orthologue.

## Quick Start

```bash
printf 'TP53\nALB\n' > genes.txt

# One block per gene
orthoatlas --file genes.txt

# Tab-separated table, skipping genes whose lookups fail
orthoatlas --file genes.txt --format tabular --on-error skip > expression.tsv

# Input symbols are already human
orthoatlas --file human.txt --resolver lookup
```

## Options

{}

## Environment Variables

- `ORTHOATLAS_ENSEMBL_URL` - Ensembl REST base URL (default: `https://rest.ensembl.org`)
- `ORTHOATLAS_ATLAS_URL` - Protein Atlas base URL (default: `https://www.proteinatlas.org`)
- `ORTHOATLAS_SOURCE_SPECIES` - Source species (default: `Sus_scrofa`)
- `ORTHOATLAS_TARGET_SPECIES`, `ORTHOATLAS_TARGET_TAXON` - Homology target (default: `human`, `9606`)
- `ORTHOATLAS_LOOKUP_SPECIES` - Species for `--resolver lookup` (default: `homo_sapiens`)
- `ORTHOATLAS_TIMEOUT_SECS` - HTTP timeout (default: `60`)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR`, `LOG_FILTER` - Logging on stderr and/or files

## Tabular Header

The header row reads `Id` and `Symbol` over the first two columns, which
hold the queried symbol and the Protein Atlas entry name respectively.

---

*This file is generated. To update, run `cargo run --manifest-path xtask/Cargo.toml -- generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
