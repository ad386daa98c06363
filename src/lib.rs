//! PackPilot: infrastructure starter pack analysis, configuration, and audit.
//!
//! Reads declarative infrastructure descriptions (YAML/JSON), extracts the
//! declared resources, and produces analysis, per-environment configuration,
//! and audit reports.

pub mod agent;
pub mod analyzer;
pub mod auditor;
pub mod cli;
pub mod config;
pub mod configurator;
pub mod report;

pub use agent::PilotAgent;
pub use config::PilotConfig;
pub use configurator::Environment;
