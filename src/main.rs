use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use walletctl::adapter::inbound::cli::command::Cli;
use walletctl::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use walletctl::adapter::inbound::cli::output::{self, OutputMode};
use walletctl::adapter::inbound::cli::{self, paths};
use walletctl::infrastructure::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(
        OutputMode::from_flags(cli.json, cli.quiet),
        cli.verbose,
        &cli.color,
    );

    let config_path = cli.config.clone().unwrap_or_else(paths::default_config);
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            match ConfigDiagnostic::from_error(&e) {
                Some(diagnostic) => eprintln!("{:?}", miette::Report::new(diagnostic)),
                None => cli::report_error(&e),
            }
            return ExitCode::FAILURE;
        }
    };

    config.init_logging(output::verbosity());
    debug!(config = %config_path.display(), "walletctl starting");

    match cli::dispatch(&cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            debug!(error = %e, kind = ?e.kind(), "Command failed");
            cli::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
