use crate::configurator::Environment;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "packpilot",
    about = "Infrastructure starter pack analysis, configuration, and audit tool",
    version,
    author
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "PACKPILOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for logs
    #[arg(long, default_value = "text", global = true)]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a starter pack or infrastructure configuration
    Analyze {
        /// Starter pack file or directory
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file for JSON reports (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Auto-configure infrastructure for a target environment
    Configure {
        /// Starter pack file or directory
        path: PathBuf,

        /// Target environment
        #[arg(short, long, value_enum, default_value = "dev")]
        environment: Environment,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file for JSON reports (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Audit infrastructure for security, optimization, and compliance
    Audit {
        /// Infrastructure file or directory
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file for JSON reports (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Optimize infrastructure based on analysis and audit findings
    Optimize {
        /// Infrastructure file or directory
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file for JSON reports (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the complete pipeline: analyze, configure, audit, optimize
    Transform {
        /// Starter pack file or directory
        path: PathBuf,

        /// Target environment
        #[arg(short, long, value_enum, default_value = "dev")]
        environment: Environment,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Output file for JSON reports (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
