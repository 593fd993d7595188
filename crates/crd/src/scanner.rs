//! Recursive CRD discovery over a directory tree

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::diagnostics::{DiagnosticSink, SkipNotice, StderrSink};
use crate::types::CustomResourceDefinition;

/// Errors that abort a scan.
///
/// `ReadFailure` and `WalkFailure` keep the underlying cause inspectable
/// through the error source chain.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("location '{}' does not exist", .0.display())]
    LocationNotFound(PathBuf),

    #[error("failed to read file '{}'", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk the selected folder")]
    WalkFailure(#[source] walkdir::Error),
}

/// Scans a directory tree for CRD manifests.
///
/// The location is fixed at construction. A location pointing at a single
/// file degenerates to a one-entry walk.
pub struct CrdScanner {
    location: PathBuf,
}

impl CrdScanner {
    /// Create a scanner rooted at the given location.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// The configured root location.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Scan, reporting skip notices to standard error.
    pub fn scan(&self) -> Result<Vec<CustomResourceDefinition>, ScanError> {
        self.scan_with(&mut StderrSink)
    }

    /// Walk the location depth-first and decode every qualifying file,
    /// returning the CRDs in visitation order.
    ///
    /// Files without the `.yaml` extension and `.yaml` files that do not
    /// decode into the CRD shape are skipped with a notice to `sink`. A
    /// failed read of a qualifying file or a traversal error aborts the
    /// whole scan; nothing is returned in that case.
    pub fn scan_with(
        &self,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Vec<CustomResourceDefinition>, ScanError> {
        if !self.location.exists() {
            return Err(ScanError::LocationNotFound(self.location.clone()));
        }

        info!("Scanning for CRDs under {:?}", self.location);

        let mut crds = Vec::new();

        for entry in WalkDir::new(&self.location) {
            let entry = entry.map_err(ScanError::WalkFailure)?;

            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();

            // Exactly `.yaml`; `.yml` and case variants do not qualify.
            if path.extension() != Some(OsStr::new("yaml")) {
                sink.notice(SkipNotice::extension(path));
                continue;
            }

            let content = fs::read(path).map_err(|source| ScanError::ReadFailure {
                path: path.to_path_buf(),
                source,
            })?;

            match CustomResourceDefinition::from_slice(&content) {
                Ok(crd) => {
                    debug!("Decoded CRD '{}' from {:?}", crd.name(), path);
                    crds.push(crd);
                }
                Err(err) => {
                    debug!("Skipping {:?}: {:#}", path, err);
                    sink.notice(SkipNotice::not_a_crd(path));
                }
            }
        }

        info!("Found {} CRDs under {:?}", crds.len(), self.location);

        Ok(crds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SkipReason;
    use std::fs;
    use tempfile::TempDir;

    const CRD_YAML: &str = r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: examples.test.com
spec:
  group: test.com
  names:
    kind: Example
    plural: examples
  scope: Namespaced
  versions:
    - name: v1
      served: true
      storage: true
      schema:
        openAPIV3Schema:
          type: object
"#;

    const CONFIG_MAP_YAML: &str = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: app-config
data:
  key: value
"#;

    #[test]
    fn test_missing_location_fails_before_traversal() {
        let scanner = CrdScanner::new("/definitely/not/a/real/path");
        let mut sink: Vec<SkipNotice> = Vec::new();

        let err = scanner.scan_with(&mut sink).unwrap_err();
        assert!(matches!(err, ScanError::LocationNotFound(_)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_non_yaml_files_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("values.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "notes").unwrap();
        fs::write(temp_dir.path().join("README"), "readme").unwrap();
        // `.yml` does not qualify either
        fs::write(temp_dir.path().join("crd.yml"), CRD_YAML).unwrap();

        let scanner = CrdScanner::new(temp_dir.path());
        let mut sink: Vec<SkipNotice> = Vec::new();

        let crds = scanner.scan_with(&mut sink).unwrap();
        assert!(crds.is_empty());
        assert_eq!(sink.len(), 4);
        assert!(sink.iter().all(|n| n.reason == SkipReason::Extension));
    }

    #[test]
    fn test_non_crd_yaml_is_forgiven() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("crd.yaml"), CRD_YAML).unwrap();
        fs::write(temp_dir.path().join("configmap.yaml"), CONFIG_MAP_YAML).unwrap();

        let scanner = CrdScanner::new(temp_dir.path());
        let mut sink: Vec<SkipNotice> = Vec::new();

        let crds = scanner.scan_with(&mut sink).unwrap();
        assert_eq!(crds.len(), 1);
        assert_eq!(crds[0].name(), "examples.test.com");

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].reason, SkipReason::NotACrd);
        assert!(sink[0].path.ends_with("configmap.yaml"));
    }

    #[test]
    fn test_malformed_yaml_is_forgiven() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.yaml"), "{ not yaml: [").unwrap();

        let scanner = CrdScanner::new(temp_dir.path());
        let mut sink: Vec<SkipNotice> = Vec::new();

        let crds = scanner.scan_with(&mut sink).unwrap();
        assert!(crds.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].reason, SkipReason::NotACrd);
    }

    #[test]
    fn test_nested_directories_are_walked() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        fs::write(temp_dir.path().join("one.yaml"), CRD_YAML).unwrap();
        fs::write(nested.join("two.yaml"), CRD_YAML).unwrap();

        let scanner = CrdScanner::new(temp_dir.path());

        let first = scanner.scan_with(&mut Vec::<SkipNotice>::new()).unwrap();
        assert_eq!(first.len(), 2);

        // Re-running over the same tree yields the same collection.
        let second = scanner.scan_with(&mut Vec::<SkipNotice>::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bare_file_location() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("crd.yaml");
        fs::write(&file, CRD_YAML).unwrap();

        let crds = CrdScanner::new(&file).scan_with(&mut Vec::<SkipNotice>::new()).unwrap();
        assert_eq!(crds.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_aborts_the_scan() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("good.yaml"), CRD_YAML).unwrap();

        // A dangling symlink qualifies by extension but cannot be read.
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing-target.yaml"),
            temp_dir.path().join("zz-dangling.yaml"),
        )
        .unwrap();

        let scanner = CrdScanner::new(temp_dir.path());
        let err = scanner.scan_with(&mut Vec::<SkipNotice>::new()).unwrap_err();

        match err {
            ScanError::ReadFailure { path, .. } => {
                assert!(path.ends_with("zz-dangling.yaml"));
            }
            other => panic!("expected ReadFailure, got {other:?}"),
        }
    }
}
