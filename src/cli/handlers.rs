use crate::agent::PilotAgent;
use crate::cli::commands::ReportFormat;
use crate::configurator::Environment;
use crate::report::json;
use crate::report::terminal::TerminalReporter;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn handle_analyze(
    agent: &PilotAgent,
    path: &Path,
    format: ReportFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let report = agent.analyze_infrastructure(path)?;
    match format {
        ReportFormat::Terminal => {
            TerminalReporter::new()
                .with_verbose(verbose)
                .print_analysis(&report);
        }
        ReportFormat::Json => json::emit(&report, output.as_deref())?,
    }
    Ok(())
}

pub fn handle_configure(
    agent: &PilotAgent,
    path: &Path,
    environment: Environment,
    format: ReportFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let report = agent.auto_configure(path, environment)?;
    match format {
        ReportFormat::Terminal => {
            TerminalReporter::new()
                .with_verbose(verbose)
                .print_configuration(&report);
        }
        ReportFormat::Json => json::emit(&report, output.as_deref())?,
    }
    Ok(())
}

pub fn handle_audit(
    agent: &PilotAgent,
    path: &Path,
    format: ReportFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let report = agent.self_audit(path)?;
    match format {
        ReportFormat::Terminal => {
            TerminalReporter::new()
                .with_verbose(verbose)
                .print_audit(&report);
        }
        ReportFormat::Json => json::emit(&report, output.as_deref())?,
    }
    Ok(())
}

pub fn handle_optimize(
    agent: &PilotAgent,
    path: &Path,
    format: ReportFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let report = agent.optimize(path)?;
    match format {
        ReportFormat::Terminal => {
            TerminalReporter::new()
                .with_verbose(verbose)
                .print_optimization(&report);
        }
        ReportFormat::Json => json::emit(&report, output.as_deref())?,
    }
    Ok(())
}

pub fn handle_transform(
    agent: &PilotAgent,
    path: &Path,
    environment: Environment,
    format: ReportFormat,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let report = agent.transform_starter_pack(path, environment);
    match format {
        ReportFormat::Terminal => {
            TerminalReporter::new()
                .with_verbose(verbose)
                .print_transform(&report);
        }
        ReportFormat::Json => json::emit(&report, output.as_deref())?,
    }
    Ok(())
}
