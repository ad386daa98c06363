use crate::agent::{OptimizeReport, TransformReport};
use crate::analyzer::AnalysisReport;
use crate::auditor::AuditReport;
use crate::configurator::{ConfigBlock, ConfigureReport};
use crate::report::format::{Finding, FindingKind, PathKind, Priority, Severity, Status};
use colored::Colorize;

/// Terminal formatting constants
const TERMINAL_WIDTH: usize = 80;
const SEPARATOR_WIDTH: usize = 40;

/// Maximum resources/recommendations shown before truncation
const PREVIEW_LIMIT: usize = 5;

/// Console report renderer
pub struct TerminalReporter {
    verbose: bool,
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn print_analysis(&self, report: &AnalysisReport) {
        self.print_header("ANALYSIS RESULTS");

        println!("\n  Path:  {}", report.path.display().to_string().bright_cyan());
        let kind = match report.kind {
            Some(PathKind::File) => "file",
            Some(PathKind::Directory) => "directory",
            None => "unknown",
        };
        println!("  Type:  {kind}");

        if !report.files.is_empty() {
            println!("  Files: {}", report.files.len());
        }

        if !report.resources.is_empty() {
            println!(
                "\n{}",
                format!("📦 Resources found: {}", report.resources.len())
                    .bright_white()
                    .bold()
            );
            println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
            let shown = if self.verbose {
                report.resources.len()
            } else {
                PREVIEW_LIMIT
            };
            for resource in report.resources.iter().take(shown) {
                println!(
                    "  • {} ({})",
                    resource.name.bright_cyan(),
                    resource.kind
                );
            }
            if report.resources.len() > shown {
                println!("  … and {} more", report.resources.len() - shown);
            }
        }

        if !report.findings.is_empty() {
            println!(
                "\n{}",
                format!("🔍 Findings: {}", report.findings.len())
                    .bright_white()
                    .bold()
            );
            println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
            for finding in &report.findings {
                self.print_finding_line(finding);
            }
        }

        if !report.recommendations.is_empty() {
            println!(
                "\n{}",
                format!("💡 Recommendations: {}", report.recommendations.len())
                    .bright_white()
                    .bold()
            );
            println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
            for recommendation in &report.recommendations {
                match &recommendation.resource {
                    Some(resource) => println!(
                        "  • {} — {}",
                        resource.bright_cyan(),
                        recommendation.message
                    ),
                    None => println!("  • {}", recommendation.message),
                }
            }
        }

        self.print_footer();
    }

    pub fn print_configuration(&self, report: &ConfigureReport) {
        self.print_header("CONFIGURATION RESULTS");

        println!("\n  Status:       {}", self.status_colored(report.status));
        println!(
            "  Environment:  {}",
            report.environment.to_string().bright_cyan()
        );

        if let Some(message) = &report.message {
            println!("\n  {}", message.bright_red());
        }

        if !report.configurations.is_empty() {
            println!(
                "\n{}",
                format!("⚙️  Configurations applied: {}", report.configurations.len())
                    .bright_white()
                    .bold()
            );
            println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
            for block in &report.configurations {
                match block {
                    ConfigBlock::Environment(profile) => {
                        println!(
                            "  • environment     {} ({}, {} replica(s))",
                            profile.name.bright_cyan(),
                            profile.instance_type,
                            profile.replicas
                        );
                    }
                    ConfigBlock::AutoScaling(profile) => {
                        println!(
                            "  • auto_scaling    enabled: {}, instances {}–{}",
                            profile.enabled, profile.min_instances, profile.max_instances
                        );
                    }
                    ConfigBlock::Security(profile) => {
                        println!(
                            "  • security        {} security group rule(s)",
                            profile.security_groups.len()
                        );
                    }
                    ConfigBlock::Monitoring(profile) => {
                        println!(
                            "  • monitoring      {} metric(s), retention {} days",
                            profile.metrics.len(),
                            profile.retention_days
                        );
                    }
                }
            }
        }

        self.print_footer();
    }

    pub fn print_audit(&self, report: &AuditReport) {
        self.print_header("AUDIT RESULTS");

        println!("\n  Status:      {}", self.status_colored(report.status));
        let score_colored = if report.risk_score >= 50 {
            report.risk_score.to_string().bright_red().bold()
        } else if report.risk_score >= 25 {
            report.risk_score.to_string().bright_yellow()
        } else {
            report.risk_score.to_string().bright_green()
        };
        println!("  Risk Score:  {score_colored}/100");

        if let Some(message) = &report.message {
            println!("\n  {}", message.bright_red());
        }

        self.print_finding_group("🔒 Security Findings", &report.security_findings);
        self.print_finding_group("📈 Optimization Findings", &report.optimization_findings);
        self.print_finding_group("📋 Compliance Findings", &report.compliance_findings);

        if !report.recommendations.is_empty() {
            println!(
                "\n{}",
                format!("💡 Recommendations: {}", report.recommendations.len())
                    .bright_white()
                    .bold()
            );
            println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
            let shown = if self.verbose {
                report.recommendations.len()
            } else {
                PREVIEW_LIMIT
            };
            for recommendation in report.recommendations.iter().take(shown) {
                let priority = match recommendation.priority {
                    Priority::High => "HIGH".bright_red().bold(),
                    Priority::Medium => "MEDIUM".bright_yellow(),
                };
                println!("  [{priority}] {}", recommendation.action);
            }
            if report.recommendations.len() > shown {
                println!("  … and {} more", report.recommendations.len() - shown);
            }
        }

        self.print_footer();
    }

    pub fn print_optimization(&self, report: &OptimizeReport) {
        self.print_header("OPTIMIZATION RESULTS");

        println!("\n  Status:  {}", self.status_colored(report.status));
        println!(
            "  Risk Score:            {}/100",
            report.audit.risk_score
        );
        println!(
            "  Resources analyzed:    {}",
            report.analysis.resources.len()
        );

        if report.optimizations_applied.is_empty() {
            println!(
                "\n  {}",
                "No optimizations applied (dry-run or auto-fix disabled)".bright_black()
            );
        } else {
            println!(
                "\n{}",
                format!(
                    "✅ Optimizations applied: {}",
                    report.optimizations_applied.len()
                )
                .bright_white()
                .bold()
            );
            println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
            for applied in &report.optimizations_applied {
                println!(
                    "  • {} — {}",
                    applied.recommendation.action,
                    applied.status.bright_green()
                );
            }
        }

        self.print_footer();
    }

    pub fn print_transform(&self, report: &TransformReport) {
        self.print_header("TRANSFORMATION REPORT");

        println!("\n  Status:       {}", self.status_colored(report.status));
        println!(
            "  Starter Pack: {}",
            report.starter_pack.display().to_string().bright_cyan()
        );
        println!(
            "  Environment:  {}",
            report.target_environment.to_string().bright_cyan()
        );

        match report.status {
            Status::Completed => {
                println!();
                if report.analysis.is_some() {
                    println!("  ✓ Analysis completed");
                }
                if report.configuration.is_some() {
                    println!("  ✓ Configuration applied");
                }
                if report.audit.is_some() {
                    println!("  ✓ Security audit completed");
                }
                if report.optimization.is_some() {
                    println!("  ✓ Optimizations evaluated");
                }

                if let Some(audit) = &report.audit {
                    println!("\n  Risk Score:   {}/100", audit.risk_score);
                }
                if let Some(analysis) = &report.analysis {
                    println!("  Resources:    {}", analysis.resources.len());
                }
            }
            Status::Failed => {
                let error = report.error.as_deref().unwrap_or("unknown error");
                println!("\n  ✗ {}", format!("Transformation failed: {error}").bright_red());
            }
            _ => {}
        }

        self.print_footer();
    }

    fn print_finding_group(&self, title: &str, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }

        println!(
            "\n{}",
            format!("{title}: {}", findings.len()).bright_white().bold()
        );
        println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
        for finding in findings {
            self.print_finding_line(finding);
            if self.verbose {
                if let Some(recommendation) = &finding.recommendation {
                    println!("      ↳ {}", recommendation.bright_black());
                }
            }
        }
    }

    fn print_finding_line(&self, finding: &Finding) {
        match finding.severity {
            Some(severity) => {
                let label = match severity {
                    Severity::High => "HIGH".bright_red().bold(),
                    Severity::Medium => "MEDIUM".bright_yellow(),
                    Severity::Low => "LOW".bright_green(),
                };
                println!("  [{label}] {}", finding.message);
            }
            None => {
                let label = format!("{:?}", finding.kind).to_lowercase();
                let label = match finding.kind {
                    FindingKind::Error => label.bright_red(),
                    FindingKind::Warning => label.bright_yellow(),
                    _ => label.bright_blue(),
                };
                println!("  [{label}] {}", finding.message);
            }
        }
    }

    fn status_colored(&self, status: Status) -> colored::ColoredString {
        match status {
            Status::Completed => "completed".bright_green(),
            Status::Success => "success".bright_green(),
            Status::InProgress => "in_progress".bright_yellow(),
            Status::Failed => "failed".bright_red().bold(),
            Status::Error => "error".bright_red().bold(),
        }
    }

    fn print_header(&self, title: &str) {
        println!("\n{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
        println!("{}", title.bright_white().bold());
        println!("{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
    }

    fn print_footer(&self) {
        println!("\n{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
        println!("{}", "Report generated by PackPilot".bright_black());
        println!();
    }
}
