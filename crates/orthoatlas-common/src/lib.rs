//! Orthoatlas Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging setup, and error handling for the orthoatlas workspace.
//!
//! # Overview
//!
//! - **Error Handling**: Common error and result types
//! - **Logging**: Tracing subscriber configuration shared by every binary
//! - **Types**: Expression report domain types
//!
//! # Example
//!
//! ```no_run
//! use orthoatlas_common::types::{AssayType, ExpressionRecord};
//!
//! let mut record = ExpressionRecord::new("P53_HUMAN");
//! record.set_assay_specificity(AssayType::ImmuneCell, "immune cell enriched");
//! assert_eq!(record.immune_cell_specificity, "immune cell enriched");
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{OrthoError, Result};
