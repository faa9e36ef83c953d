use clap::Parser;
use dirsync::config::{Cli, Config};
use dirsync::ui::Reporter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(cli.logging.tracing_level())
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Convert CLI args to Config - this validates both roots immediately
    let config = Config::try_from(cli)?;
    let reporter = Reporter::new(config.verbosity);

    dirsync::commands::sync::run(&config, &reporter)?;

    Ok(())
}
