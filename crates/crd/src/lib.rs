//! CRD (CustomResourceDefinition) discovery and decoding

pub mod diagnostics;
pub mod scanner;
pub mod types;

pub use diagnostics::{DiagnosticSink, SkipNotice, SkipReason, StderrSink};
pub use scanner::{CrdScanner, ScanError};
pub use types::{
    CrdNames, CrdScope, CrdSpec, CrdVersion, CustomResourceDefinition, ObjectMeta, VersionSchema,
};
