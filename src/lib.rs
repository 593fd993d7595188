//! CRD Scout Library
//!
//! Discovers Kubernetes CustomResourceDefinition manifests among arbitrary
//! YAML trees and presents them as a typed, ordered collection.

pub mod cli;
pub mod config;
pub mod filter;
pub mod output;

pub use config::{Config, LocationConfig, OutputConfig};
pub use output::OutputFormat;
pub use scout_crd::{
    CrdScanner, CustomResourceDefinition, DiagnosticSink, ScanError, SkipNotice, SkipReason,
    StderrSink,
};
