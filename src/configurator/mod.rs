use crate::auditor::Recommendation;
use crate::config::PilotConfig;
use crate::report::format::{FindingKind, Status};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Deployment environment a starter pack is configured for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Staging => write!(f, "staging"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

/// Report produced by [`AutoConfigurator::configure`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureReport {
    pub status: Status,
    pub environment: Environment,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub configurations: Vec<ConfigBlock>,
    pub generated_at: DateTime<Utc>,
}

/// One applied configuration block, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum ConfigBlock {
    Environment(EnvironmentProfile),
    AutoScaling(ScalingProfile),
    Security(SecurityProfile),
    Monitoring(MonitoringProfile),
}

/// Environment sizing profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentProfile {
    pub name: String,
    pub instance_type: String,
    pub replicas: u32,
    pub auto_scaling: bool,
    pub monitoring: String,
}

/// Auto-scaling bounds per environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScalingProfile {
    pub enabled: bool,
    pub min_instances: u32,
    pub max_instances: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cpu_utilization: Option<u32>,
}

/// Baseline security settings, identical across environments apart from the
/// security-group rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityProfile {
    pub encryption_at_rest: bool,
    pub encryption_in_transit: bool,
    pub network_isolation: bool,
    pub access_logging: bool,
    pub security_groups: Vec<SecurityGroupRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityGroupRule {
    pub name: String,
    pub protocol: String,
    pub port: u16,
    pub source: String,
}

/// Monitoring and logging profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitoringProfile {
    pub metrics: Vec<String>,
    pub logging_level: String,
    pub retention_days: u32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub alerts: Vec<String>,
}

/// An optimization recommendation that was actually applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedOptimization {
    pub recommendation: Recommendation,
    pub status: String,
}

/// Assembles canned per-environment configuration blocks for a starter pack
pub struct AutoConfigurator {
    config: PilotConfig,
}

impl AutoConfigurator {
    pub fn new(config: PilotConfig) -> Self {
        Self { config }
    }

    /// Produce the configuration blocks for a target environment.
    ///
    /// Fixed order: environment sizing, auto-scaling (only when
    /// `automation.auto_configure` is enabled), security, monitoring.
    pub fn configure(&self, path: &Path, environment: Environment) -> Result<ConfigureReport> {
        info!("Configuring for {environment} environment");

        let mut report = ConfigureReport {
            status: Status::Success,
            environment,
            path: path.to_path_buf(),
            message: None,
            configurations: Vec::new(),
            generated_at: Utc::now(),
        };

        if !path.exists() {
            report.status = Status::Error;
            report.message = Some(format!("Path does not exist: {}", path.display()));
            return Ok(report);
        }

        report
            .configurations
            .push(ConfigBlock::Environment(environment_profile(environment)));

        if self.config.is_enabled("automation.auto_configure") {
            report
                .configurations
                .push(ConfigBlock::AutoScaling(scaling_profile(environment)));
        }

        report
            .configurations
            .push(ConfigBlock::Security(security_profile(environment)));
        report
            .configurations
            .push(ConfigBlock::Monitoring(monitoring_profile(environment)));

        info!("Configuration complete for {environment}");
        Ok(report)
    }

    /// Apply optimization recommendations.
    ///
    /// With `automation.dry_run` enabled nothing is applied regardless of
    /// input. Security and compliance recommendations are skipped; only
    /// optimization-typed ones are marked applied.
    pub fn apply_optimizations(
        &self,
        _path: &Path,
        recommendations: &[Recommendation],
    ) -> Result<Vec<AppliedOptimization>> {
        if self.config.is_enabled("automation.dry_run") {
            info!("Running in dry-run mode, not applying changes");
            return Ok(Vec::new());
        }

        let mut applied = Vec::new();
        for recommendation in recommendations {
            if recommendation.kind == FindingKind::Optimization {
                info!("Applied optimization: {}", recommendation.action);
                applied.push(AppliedOptimization {
                    recommendation: recommendation.clone(),
                    status: "applied".to_string(),
                });
            }
        }

        Ok(applied)
    }
}

fn environment_profile(environment: Environment) -> EnvironmentProfile {
    match environment {
        Environment::Dev => EnvironmentProfile {
            name: "Development Environment".to_string(),
            instance_type: "small".to_string(),
            replicas: 1,
            auto_scaling: false,
            monitoring: "basic".to_string(),
        },
        Environment::Staging => EnvironmentProfile {
            name: "Staging Environment".to_string(),
            instance_type: "medium".to_string(),
            replicas: 2,
            auto_scaling: true,
            monitoring: "standard".to_string(),
        },
        Environment::Prod => EnvironmentProfile {
            name: "Production Environment".to_string(),
            instance_type: "large".to_string(),
            replicas: 3,
            auto_scaling: true,
            monitoring: "comprehensive".to_string(),
        },
    }
}

fn scaling_profile(environment: Environment) -> ScalingProfile {
    match environment {
        Environment::Dev => ScalingProfile {
            enabled: false,
            min_instances: 1,
            max_instances: 1,
            target_cpu_utilization: None,
        },
        Environment::Staging => ScalingProfile {
            enabled: true,
            min_instances: 1,
            max_instances: 3,
            target_cpu_utilization: Some(70),
        },
        Environment::Prod => ScalingProfile {
            enabled: true,
            min_instances: 2,
            max_instances: 10,
            target_cpu_utilization: Some(60),
        },
    }
}

fn security_profile(environment: Environment) -> SecurityProfile {
    SecurityProfile {
        encryption_at_rest: true,
        encryption_in_transit: true,
        network_isolation: true,
        access_logging: true,
        security_groups: security_groups(environment),
    }
}

fn security_groups(environment: Environment) -> Vec<SecurityGroupRule> {
    let mut rules = vec![SecurityGroupRule {
        name: "https".to_string(),
        protocol: "tcp".to_string(),
        port: 443,
        source: "0.0.0.0/0".to_string(),
    }];

    // Development additionally allows plain HTTP
    if environment == Environment::Dev {
        rules.push(SecurityGroupRule {
            name: "http".to_string(),
            protocol: "tcp".to_string(),
            port: 80,
            source: "0.0.0.0/0".to_string(),
        });
    }

    rules
}

fn monitoring_profile(environment: Environment) -> MonitoringProfile {
    match environment {
        Environment::Dev => MonitoringProfile {
            metrics: vec!["cpu".to_string(), "memory".to_string()],
            logging_level: "info".to_string(),
            retention_days: 7,
            alerts: Vec::new(),
        },
        Environment::Staging => MonitoringProfile {
            metrics: vec![
                "cpu".to_string(),
                "memory".to_string(),
                "disk".to_string(),
                "network".to_string(),
            ],
            logging_level: "info".to_string(),
            retention_days: 30,
            alerts: vec!["error_rate".to_string(), "high_cpu".to_string()],
        },
        Environment::Prod => MonitoringProfile {
            metrics: vec![
                "cpu".to_string(),
                "memory".to_string(),
                "disk".to_string(),
                "network".to_string(),
                "requests".to_string(),
            ],
            logging_level: "warning".to_string(),
            retention_days: 90,
            alerts: vec![
                "error_rate".to_string(),
                "high_cpu".to_string(),
                "high_memory".to_string(),
                "low_availability".to_string(),
            ],
        },
    }
}
