use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Lifecycle state of a report.
///
/// Not every variant applies to every report: the auditor uses
/// `completed`/`error`, the configurator `success`/`error`, and the
/// transformation pipeline `in_progress`/`completed`/`failed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Completed,
    Success,
    Failed,
    Error,
}

/// Severity of an audit finding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Contribution of one finding to the overall risk score
    pub fn weight(&self) -> u32 {
        match self {
            Severity::High => 10,
            Severity::Medium => 5,
            Severity::Low => 2,
        }
    }
}

/// Classification of a finding or recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Error,
    Warning,
    Security,
    Optimization,
    Compliance,
}

/// Area a finding concerns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Encryption,
    AccessControl,
    Network,
    Secrets,
    Resources,
    Cost,
    Performance,
    Logging,
    Backup,
}

/// A single observation produced by analysis or audit.
///
/// Analyzer findings carry only a kind and message (`error`/`warning`);
/// audit findings additionally carry severity, category, and a suggested
/// remediation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Error,
            severity: None,
            category: None,
            message: message.into(),
            recommendation: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Warning,
            severity: None,
            category: None,
            message: message.into(),
            recommendation: None,
        }
    }
}

/// Priority of a derived recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// A named, typed entry extracted from a starter pack's declared
/// `resources`/`services`/`infrastructure` sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub config: Value,
}

/// Format a file was parsed as
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Yaml,
    Json,
    Unknown,
}

/// Whether an analyzed path was a file or a directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    File,
    Directory,
}
