use anyhow::Result;
use clap::Parser;
use packpilot::cli::commands::{Cli, Commands};
use packpilot::cli::handlers::{
    handle_analyze, handle_audit, handle_configure, handle_optimize, handle_transform,
};
use packpilot::cli::utils::init_logging;
use packpilot::{PilotAgent, PilotConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, &cli.log_format);

    let config = PilotConfig::discover(cli.config.as_deref())?;
    let agent = PilotAgent::new(config);

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
        } => handle_analyze(&agent, &path, format, output, cli.verbose),

        Commands::Configure {
            path,
            environment,
            format,
            output,
        } => handle_configure(&agent, &path, environment, format, output, cli.verbose),

        Commands::Audit {
            path,
            format,
            output,
        } => handle_audit(&agent, &path, format, output, cli.verbose),

        Commands::Optimize {
            path,
            format,
            output,
        } => handle_optimize(&agent, &path, format, output, cli.verbose),

        Commands::Transform {
            path,
            environment,
            format,
            output,
        } => handle_transform(&agent, &path, environment, format, output, cli.verbose),
    }
}
