//! Configuration management for crd-scout

pub mod config;

pub use config::{Config, LocationConfig, OutputConfig};
