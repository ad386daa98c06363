pub mod checks;

use crate::config::PilotConfig;
use crate::report::format::{Finding, FindingKind, Priority, Severity, Status};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Risk score ceiling
const MAX_RISK_SCORE: u32 = 100;

/// Report produced by [`SelfAuditor::audit`].
///
/// Unlike the analyzer, a missing path yields `status: error` with a
/// `message` and no findings at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub status: Status,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub security_findings: Vec<Finding>,
    pub optimization_findings: Vec<Finding>,
    pub compliance_findings: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
    pub risk_score: u32,
    pub generated_at: DateTime<Utc>,
}

impl AuditReport {
    fn new(path: &Path) -> Self {
        Self {
            status: Status::Completed,
            path: path.to_path_buf(),
            message: None,
            security_findings: Vec::new(),
            optimization_findings: Vec::new(),
            compliance_findings: Vec::new(),
            recommendations: Vec::new(),
            risk_score: 0,
            generated_at: Utc::now(),
        }
    }
}

/// A prioritized action derived from an audit finding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub action: String,
    pub reason: String,
}

/// Performs self-audits of infrastructure for security, optimization, and
/// compliance posture.
pub struct SelfAuditor {
    config: PilotConfig,
}

impl SelfAuditor {
    pub fn new(config: PilotConfig) -> Self {
        Self { config }
    }

    /// Run the audit check groups against a path.
    ///
    /// Each group is gated by its own configuration flag. The checks
    /// themselves are static advisories (see [`checks`]).
    pub fn audit(&self, path: &Path) -> Result<AuditReport> {
        info!("Starting audit of {}", path.display());

        let mut report = AuditReport::new(path);

        if !path.exists() {
            report.status = Status::Error;
            report.message = Some(format!("Path does not exist: {}", path.display()));
            return Ok(report);
        }

        if self.config.is_enabled("analysis.security_checks") {
            report.security_findings = checks::security();
        }
        if self.config.is_enabled("analysis.optimization_checks") {
            report.optimization_findings = checks::optimization();
        }
        if self.config.is_enabled("analysis.compliance_checks") {
            report.compliance_findings = checks::compliance();
        }

        report.risk_score = risk_score(&report);
        report.recommendations = derive_recommendations(&report);

        info!("Audit complete. Risk score: {}", report.risk_score);
        Ok(report)
    }
}

/// Sum of severity weights over security and compliance findings, capped at
/// 100. Optimization findings do not contribute. A finding without a
/// severity counts as low.
fn risk_score(report: &AuditReport) -> u32 {
    let score: u32 = report
        .security_findings
        .iter()
        .chain(&report.compliance_findings)
        .map(|finding| finding.severity.unwrap_or(Severity::Low).weight())
        .sum();
    score.min(MAX_RISK_SCORE)
}

/// Derive prioritized recommendations from the findings.
///
/// Only high-severity security findings are promoted; medium and low
/// security findings generate no recommendation. Every optimization and
/// compliance finding is promoted at medium priority.
fn derive_recommendations(report: &AuditReport) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for finding in &report.security_findings {
        if finding.severity == Some(Severity::High) {
            recommendations.push(Recommendation {
                priority: Priority::High,
                kind: FindingKind::Security,
                action: finding.recommendation.clone().unwrap_or_default(),
                reason: finding.message.clone(),
            });
        }
    }

    for finding in &report.optimization_findings {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            kind: FindingKind::Optimization,
            action: finding.recommendation.clone().unwrap_or_default(),
            reason: finding.message.clone(),
        });
    }

    for finding in &report.compliance_findings {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            kind: FindingKind::Compliance,
            action: finding.recommendation.clone().unwrap_or_default(),
            reason: finding.message.clone(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;
    use std::fs;

    fn audited_path(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("pack.yml");
        fs::write(&path, "resources: {}\n").unwrap();
        path
    }

    #[test]
    fn missing_path_errors_without_findings() {
        let auditor = SelfAuditor::new(PilotConfig::default());
        let report = auditor.audit(Path::new("/nonexistent/path")).unwrap();

        assert_eq!(report.status, Status::Error);
        assert!(report.message.is_some());
        assert!(report.security_findings.is_empty());
        assert!(report.optimization_findings.is_empty());
        assert!(report.compliance_findings.is_empty());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.risk_score, 0);
    }

    #[test]
    fn default_audit_risk_score_is_40() {
        let dir = tempfile::tempdir().unwrap();
        let auditor = SelfAuditor::new(PilotConfig::default());
        let report = auditor.audit(&audited_path(&dir)).unwrap();

        assert_eq!(report.status, Status::Completed);
        assert_eq!(report.security_findings.len(), 4);
        assert_eq!(report.optimization_findings.len(), 3);
        assert_eq!(report.compliance_findings.len(), 2);
        // security: 2x high (10) + 2x medium (5) = 30; compliance: 2x medium = 10
        assert_eq!(report.risk_score, 40);
    }

    #[test]
    fn optimization_findings_do_not_affect_risk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PilotConfig::default();
        config.set("analysis.security_checks", Value::Bool(false));
        config.set("analysis.compliance_checks", Value::Bool(false));

        let report = SelfAuditor::new(config).audit(&audited_path(&dir)).unwrap();
        assert_eq!(report.optimization_findings.len(), 3);
        assert_eq!(report.risk_score, 0);
    }

    #[test]
    fn disabling_compliance_drops_score_to_30() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PilotConfig::default();
        config.set("analysis.compliance_checks", Value::Bool(false));

        let report = SelfAuditor::new(config).audit(&audited_path(&dir)).unwrap();
        assert_eq!(report.risk_score, 30);
    }

    #[test]
    fn default_audit_yields_seven_recommendations() {
        let dir = tempfile::tempdir().unwrap();
        let report = SelfAuditor::new(PilotConfig::default())
            .audit(&audited_path(&dir))
            .unwrap();

        assert_eq!(report.recommendations.len(), 7);

        let high: Vec<_> = report
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .collect();
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|r| r.kind == FindingKind::Security));

        let medium = report
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::Medium)
            .count();
        assert_eq!(medium, 5);
    }

    #[test]
    fn medium_security_findings_are_not_promoted() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PilotConfig::default();
        config.set("analysis.optimization_checks", Value::Bool(false));
        config.set("analysis.compliance_checks", Value::Bool(false));

        let report = SelfAuditor::new(config).audit(&audited_path(&dir)).unwrap();
        // 4 security findings, only the 2 high ones become recommendations
        assert_eq!(report.recommendations.len(), 2);
    }
}
