use std::fs;
use tempfile::TempDir;

use crd_scout::cli::commands;

const CRD_YAML: &str = r#"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: widgets.acme.io
spec:
  group: acme.io
  names:
    kind: Widget
    plural: widgets
  versions:
    - name: v1
      served: true
      storage: true
"#;

#[tokio::test]
async fn test_scan_command_with_location() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("widget.yaml"), CRD_YAML).unwrap();

    let location = temp_dir.path().to_string_lossy().to_string();
    let matches = commands::scan::command()
        .try_get_matches_from(["scan", location.as_str()])
        .unwrap();

    assert!(commands::scan::run(&matches).await.is_ok());
}

#[tokio::test]
async fn test_scan_command_with_missing_location() {
    let matches = commands::scan::command()
        .try_get_matches_from(["scan", "/definitely/not/a/real/path"])
        .unwrap();

    let err = commands::scan::run(&matches).await.unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[tokio::test]
async fn test_scan_command_with_bad_output_format() {
    let temp_dir = TempDir::new().unwrap();

    let location = temp_dir.path().to_string_lossy().to_string();
    let matches = commands::scan::command()
        .try_get_matches_from(["scan", location.as_str(), "--output", "xml"])
        .unwrap();

    let err = commands::scan::run(&matches).await.unwrap_err();
    assert!(err.to_string().contains("unknown output format"));
}

#[tokio::test]
async fn test_inspect_command() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("widget.yaml");
    fs::write(&manifest, CRD_YAML).unwrap();

    let manifest = manifest.to_string_lossy().to_string();
    let matches = commands::inspect::command()
        .try_get_matches_from(["inspect", manifest.as_str()])
        .unwrap();

    assert!(commands::inspect::run(&matches).await.is_ok());
}

#[tokio::test]
async fn test_inspect_command_rejects_non_crd() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("configmap.yaml");
    fs::write(
        &manifest,
        "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: cm\n",
    )
    .unwrap();

    let manifest = manifest.to_string_lossy().to_string();
    let matches = commands::inspect::command()
        .try_get_matches_from(["inspect", manifest.as_str()])
        .unwrap();

    assert!(commands::inspect::run(&matches).await.is_err());
}

#[tokio::test]
async fn test_validate_command() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("crd-scout.yaml");
    fs::write(
        &config_path,
        "version: \"1.0\"\nlocations:\n  - name: here\n    path: .\n",
    )
    .unwrap();

    let config_path = config_path.to_string_lossy().to_string();
    let matches = commands::validate::command()
        .try_get_matches_from(["validate", "--config", config_path.as_str()])
        .unwrap();

    assert!(commands::validate::run(&matches).await.is_ok());
}
