use crate::analyzer::{AnalysisReport, PackAnalyzer};
use crate::auditor::{AuditReport, SelfAuditor};
use crate::config::PilotConfig;
use crate::configurator::{AppliedOptimization, AutoConfigurator, ConfigureReport, Environment};
use crate::report::format::Status;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Report produced by [`PilotAgent::optimize`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeReport {
    pub status: Status,
    pub analysis: AnalysisReport,
    pub audit: AuditReport,
    pub optimizations_applied: Vec<AppliedOptimization>,
    pub generated_at: DateTime<Utc>,
}

/// Report produced by [`PilotAgent::transform_starter_pack`].
///
/// Stages that completed before a failure keep their entries; a failed run
/// carries `status: failed` plus the error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformReport {
    pub status: Status,
    pub starter_pack: PathBuf,
    pub target_environment: Environment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigureReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// The orchestrating agent: composes the analyzer, configurator, and auditor
/// into single-call report operations and one end-to-end pipeline.
pub struct PilotAgent {
    config: PilotConfig,
    analyzer: PackAnalyzer,
    configurator: AutoConfigurator,
    auditor: SelfAuditor,
}

impl Default for PilotAgent {
    fn default() -> Self {
        Self::new(PilotConfig::default())
    }
}

impl PilotAgent {
    pub fn new(config: PilotConfig) -> Self {
        let agent = Self {
            analyzer: PackAnalyzer::new(config.clone()),
            configurator: AutoConfigurator::new(config.clone()),
            auditor: SelfAuditor::new(config.clone()),
            config,
        };
        info!("PackPilot agent initialized");
        agent
    }

    /// Analyze a starter pack and assess the declared infrastructure.
    pub fn analyze_infrastructure(&self, path: &Path) -> Result<AnalysisReport> {
        info!("Analyzing infrastructure at {}", path.display());
        self.analyzer.analyze(path)
    }

    /// Auto-configure infrastructure for a target environment.
    pub fn auto_configure(
        &self,
        path: &Path,
        environment: Environment,
    ) -> Result<ConfigureReport> {
        info!("Auto-configuring infrastructure for {environment}");
        self.configurator.configure(path, environment)
    }

    /// Run the security/optimization/compliance self-audit.
    pub fn self_audit(&self, path: &Path) -> Result<AuditReport> {
        info!("Running self-audit on {}", path.display());
        self.auditor.audit(path)
    }

    /// Optimize based on analysis and audit findings. Optimizations are only
    /// applied when `automation.auto_fix` is enabled.
    pub fn optimize(&self, path: &Path) -> Result<OptimizeReport> {
        info!("Optimizing infrastructure at {}", path.display());

        let analysis = self.analyzer.analyze(path)?;
        let audit = self.auditor.audit(path)?;

        let optimizations_applied = if self.config.is_enabled("automation.auto_fix") {
            self.configurator
                .apply_optimizations(path, &audit.recommendations)?
        } else {
            Vec::new()
        };

        Ok(OptimizeReport {
            status: Status::Completed,
            analysis,
            audit,
            optimizations_applied,
            generated_at: Utc::now(),
        })
    }

    /// Run the complete pipeline against one starter pack: analyze,
    /// configure, audit, then optimize when `analysis.optimization_checks`
    /// is enabled.
    ///
    /// One error boundary wraps the whole sequence: a failure in any stage
    /// aborts the remaining ones, sets `status: failed`, and records the
    /// error, keeping whatever stage reports were already produced.
    pub fn transform_starter_pack(
        &self,
        path: &Path,
        environment: Environment,
    ) -> TransformReport {
        info!("Transforming starter pack: {}", path.display());

        let mut report = TransformReport {
            status: Status::InProgress,
            starter_pack: path.to_path_buf(),
            target_environment: environment,
            analysis: None,
            configuration: None,
            audit: None,
            optimization: None,
            error: None,
            generated_at: Utc::now(),
        };

        match self.run_transform(path, environment, &mut report) {
            Ok(()) => {
                report.status = Status::Completed;
                info!("Transformation completed successfully");
            }
            Err(e) => {
                error!("Transformation failed: {e:#}");
                report.status = Status::Failed;
                report.error = Some(format!("{e:#}"));
            }
        }

        report
    }

    fn run_transform(
        &self,
        path: &Path,
        environment: Environment,
        report: &mut TransformReport,
    ) -> Result<()> {
        info!("Step 1: Analyzing starter pack");
        report.analysis = Some(self.analyze_infrastructure(path)?);

        info!("Step 2: Auto-configuring infrastructure");
        report.configuration = Some(self.auto_configure(path, environment)?);

        info!("Step 3: Running self-audit");
        report.audit = Some(self.self_audit(path)?);

        if self.config.is_enabled("analysis.optimization_checks") {
            info!("Step 4: Applying optimizations");
            report.optimization = Some(self.optimize(path)?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;
    use std::fs;
    use std::path::PathBuf;

    fn starter_pack(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("pack.yml");
        fs::write(
            &path,
            r#"
infrastructure:
  compute:
    type: container
    replicas: 2
  database:
    type: postgresql
services:
  web:
    name: web-service
    port: 80
"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn analyze_delegates_to_analyzer() {
        let dir = tempfile::tempdir().unwrap();
        let report = PilotAgent::default()
            .analyze_infrastructure(&starter_pack(&dir))
            .unwrap();
        assert!(report.exists);
        assert_eq!(report.resources.len(), 3);
    }

    #[test]
    fn optimize_with_auto_fix_disabled_applies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = PilotAgent::default().optimize(&starter_pack(&dir)).unwrap();

        assert_eq!(report.status, Status::Completed);
        assert!(report.optimizations_applied.is_empty());
        assert!(!report.audit.recommendations.is_empty());
    }

    #[test]
    fn optimize_with_auto_fix_respects_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PilotConfig::default();
        config.set("automation.auto_fix", Value::Bool(true));
        // dry_run stays at its default of true

        let report = PilotAgent::new(config).optimize(&starter_pack(&dir)).unwrap();
        assert!(report.optimizations_applied.is_empty());
    }

    #[test]
    fn optimize_applies_when_auto_fix_and_not_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PilotConfig::default();
        config.set("automation.auto_fix", Value::Bool(true));
        config.set("automation.dry_run", Value::Bool(false));

        let report = PilotAgent::new(config).optimize(&starter_pack(&dir)).unwrap();
        // the audit always derives exactly three optimization recommendations
        assert_eq!(report.optimizations_applied.len(), 3);
    }

    #[test]
    fn transform_completes_with_all_stage_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = starter_pack(&dir);
        let report = PilotAgent::default().transform_starter_pack(&path, Environment::Dev);

        assert_eq!(report.status, Status::Completed);
        assert_eq!(report.starter_pack, path);
        assert_eq!(report.target_environment, Environment::Dev);
        assert!(report.analysis.is_some());
        assert!(report.configuration.is_some());
        assert!(report.audit.is_some());
        // optimization_checks is enabled by default
        assert!(report.optimization.is_some());
        assert!(report.error.is_none());
    }

    #[test]
    fn transform_skips_optimization_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PilotConfig::default();
        config.set("analysis.optimization_checks", Value::Bool(false));

        let report =
            PilotAgent::new(config).transform_starter_pack(&starter_pack(&dir), Environment::Prod);
        assert_eq!(report.status, Status::Completed);
        assert!(report.optimization.is_none());
    }

    #[test]
    fn transform_on_missing_path_still_completes() {
        // a missing path is reported inside the stage reports, not as a
        // pipeline failure
        let report = PilotAgent::default()
            .transform_starter_pack(Path::new("/nonexistent/path"), Environment::Dev);

        assert_eq!(report.status, Status::Completed);
        assert!(!report.analysis.as_ref().unwrap().exists);
        assert_eq!(
            report.audit.as_ref().unwrap().status,
            Status::Error
        );
    }
}
