//! API client module
//!
//! HTTP clients for the Ensembl REST service and the Human Protein Atlas.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{build_http_client, AtlasClient, EnsemblClient};
pub use types::*;
