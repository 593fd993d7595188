//! Skip-notice reporting for scans
//!
//! Files passed over during a scan are reported through an explicit sink
//! instead of an implicit global stream, so callers can observe skip counts
//! and messages deterministically.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry does not carry the `.yaml` extension.
    Extension,
    /// The content did not decode into the CRD shape.
    NotACrd,
}

/// A per-file notice emitted when the scanner passes over an entry.
///
/// Notices are human-readable diagnostics; they never affect the scan's
/// success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipNotice {
    /// The skipped path
    pub path: PathBuf,

    /// Why it was skipped
    pub reason: SkipReason,
}

impl SkipNotice {
    /// Notice for an entry without the `.yaml` extension
    pub fn extension(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: SkipReason::Extension,
        }
    }

    /// Notice for a `.yaml` file that is not a CRD
    pub fn not_a_crd(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: SkipReason::NotACrd,
        }
    }
}

impl fmt::Display for SkipNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Extension => write!(f, "skipping file {}", self.path.display()),
            SkipReason::NotACrd => write!(f, "skipping non-CRD file: {}", self.path.display()),
        }
    }
}

/// Destination for skip notices.
pub trait DiagnosticSink {
    /// Report a single notice.
    fn notice(&mut self, notice: SkipNotice);
}

/// Sink that writes each notice to standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn notice(&mut self, notice: SkipNotice) {
        eprintln!("{notice}");
    }
}

/// Collecting sink, useful for asserting on skip behavior.
impl DiagnosticSink for Vec<SkipNotice> {
    fn notice(&mut self, notice: SkipNotice) {
        self.push(notice);
    }
}
