pub mod resources;

use crate::config::{truthy, PilotConfig};
use crate::report::format::{Finding, FindingKind, PathKind, Resource, SourceFormat};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Resource-count threshold above which consolidation is suggested
const CONSOLIDATION_THRESHOLD: usize = 10;

/// Report produced by [`PackAnalyzer::analyze`].
///
/// A missing path is not an error here: it yields `exists: false` plus an
/// `error`-typed finding, and callers inspect `findings` for severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub path: PathBuf,
    pub exists: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PathKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,
    pub resources: Vec<Resource>,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub files: Vec<FileReport>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            exists: path.exists(),
            kind: None,
            format: None,
            resources: Vec::new(),
            findings: Vec::new(),
            recommendations: Vec::new(),
            files: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// Per-file entry in a directory analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub analysis: FileAnalysis,
}

/// Outcome of analyzing one configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,
    pub resources: Vec<Resource>,
    pub findings: Vec<Finding>,
}

/// A recommendation generated during analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    pub message: String,
}

/// Analyzes starter packs and infrastructure configuration files
pub struct PackAnalyzer {
    config: PilotConfig,
}

impl PackAnalyzer {
    pub fn new(config: PilotConfig) -> Self {
        Self { config }
    }

    /// Analyze a starter pack file or directory.
    pub fn analyze(&self, path: &Path) -> Result<AnalysisReport> {
        info!("Starting analysis of {}", path.display());

        let mut report = AnalysisReport::new(path);

        if !report.exists {
            report
                .findings
                .push(Finding::error(format!("Path does not exist: {}", path.display())));
            return Ok(report);
        }

        if path.is_file() {
            report.kind = Some(PathKind::File);
            let analysis = self.analyze_file(path);
            report.format = analysis.format;
            report.resources = analysis.resources;
            report.findings.extend(analysis.findings);
        } else if path.is_dir() {
            report.kind = Some(PathKind::Directory);
            self.analyze_directory(path, &mut report);
        }

        let recommendations = self.generate_recommendations(&report);
        report.recommendations.extend(recommendations);

        info!(
            "Analysis complete. Found {} resources, {} findings",
            report.resources.len(),
            report.findings.len()
        );
        Ok(report)
    }

    /// Analyze a single configuration file by extension. Parse failures are
    /// downgraded to `error` findings rather than aborting the call.
    fn analyze_file(&self, path: &Path) -> FileAnalysis {
        let mut analysis = FileAnalysis::default();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "yml" | "yaml" => match parse_yaml(path) {
                Ok(document) => {
                    analysis.format = Some(SourceFormat::Yaml);
                    analysis.resources = resources::extract(&document);
                }
                Err(e) => {
                    analysis
                        .findings
                        .push(Finding::error(format!("Failed to parse {}: {e}", path.display())));
                }
            },
            "json" => match parse_json(path) {
                Ok(document) => {
                    analysis.format = Some(SourceFormat::Json);
                    analysis.resources = resources::extract(&document);
                }
                Err(e) => {
                    analysis
                        .findings
                        .push(Finding::error(format!("Failed to parse {}: {e}", path.display())));
                }
            },
            _ => {
                analysis.format = Some(SourceFormat::Unknown);
                analysis.findings.push(Finding::warning(format!(
                    "Unknown file format: {}",
                    path.display()
                )));
            }
        }

        analysis
    }

    /// Recursively analyze every `.yml`/`.yaml`/`.json` file under a
    /// directory, concatenating resources and findings in traversal order.
    fn analyze_directory(&self, dir: &Path, report: &mut AnalysisReport) {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let extension = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default();
            if !matches!(extension, "yml" | "yaml" | "json") {
                continue;
            }

            debug!("Analyzing {}", entry.path().display());
            let analysis = self.analyze_file(entry.path());
            report.resources.extend(analysis.resources.iter().cloned());
            report.findings.extend(analysis.findings.iter().cloned());
            report.files.push(FileReport {
                path: entry.path().to_path_buf(),
                analysis,
            });
        }
    }

    /// Generate domain-aware recommendations from extracted resources.
    fn generate_recommendations(&self, report: &AnalysisReport) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if self.config.is_enabled("analysis.security_checks") {
            recommendations.extend(self.security_recommendations(&report.resources));
        }

        if self.config.is_enabled("analysis.optimization_checks") {
            recommendations.extend(self.optimization_recommendations(&report.resources));
        }

        recommendations
    }

    /// One recommendation per resource whose config lacks a truthy
    /// `encryption` entry. Resources with non-mapping configs are skipped.
    fn security_recommendations(&self, resources: &[Resource]) -> Vec<Recommendation> {
        resources
            .iter()
            .filter(|resource| {
                resource.config.is_mapping()
                    && !resource
                        .config
                        .get("encryption")
                        .map(truthy)
                        .unwrap_or(false)
            })
            .map(|resource| Recommendation {
                kind: FindingKind::Security,
                resource: Some(resource.name.clone()),
                message: "Consider enabling encryption for this resource".to_string(),
            })
            .collect()
    }

    /// A single consolidation suggestion once the pack grows past the
    /// threshold.
    fn optimization_recommendations(&self, resources: &[Resource]) -> Vec<Recommendation> {
        if resources.len() > CONSOLIDATION_THRESHOLD {
            vec![Recommendation {
                kind: FindingKind::Optimization,
                resource: None,
                message: "Consider consolidating resources to reduce complexity".to_string(),
            }]
        } else {
            Vec::new()
        }
    }
}

fn parse_yaml(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn parse_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;
    // Re-express in the YAML value space so extraction has one input type
    Ok(serde_yaml::to_value(document)?)
}
