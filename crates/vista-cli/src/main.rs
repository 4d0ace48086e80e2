//! CLI entry point.
//!
//! Command dispatch routes to handlers which delegate to AppCore. Errors are
//! mapped to sysexits-style exit codes through `CliError`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vista_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, presentation};
use vista_core::WatchReport;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = match cli.database {
        Some(path) => CliConfig::with_database(path),
        None => CliConfig::with_defaults()?,
    }
    .json(cli.json);
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Paths => handlers::paths::execute(&ctx.database_path, ctx.json)?,
        Commands::Video { command } => handlers::video::execute(&ctx, command).await?,
        Commands::Watch {
            user,
            video,
            start,
            end,
            complete,
        } => {
            let mut report = WatchReport::new(user, video, start, end);
            if complete {
                report = report.as_completion();
            }
            handlers::watch::execute(&ctx, report).await?;
        }
        Commands::Progress { user, video } => {
            handlers::progress::execute(&ctx, user, video).await?;
        }
        Commands::Intervals { user, video } => {
            handlers::intervals::execute(&ctx, user, video).await?;
        }
        Commands::Config { command } => handlers::config::execute(&ctx, command).await?,
    }

    if cli.verbose {
        presentation::display_stats(&ctx.stats());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();
    if let Ok(env_file) = vista_core::env_file_path() {
        dotenvy::from_path(env_file).ok();
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_err = CliError::classify(&err);
            eprintln!("Error: {cli_err}");
            ExitCode::from(cli_err.exit_code())
        }
    }
}
