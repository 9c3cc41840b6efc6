use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;
mod server;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("quill error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let default_level = if matches!(cli.command, cli::Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    init_tracing(cli.quiet, cli.verbose, default_level)?;

    let flags = cli.global_flags();

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    commands::dispatch(cli.command, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool, default_level: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        default_level
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QUILL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
