use anyhow::Context;
use chipgrid::cli::Cli;
use chipgrid::config::Config;
use chipgrid::logging::init_tracing;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(path) = cli.log_file.as_ref().or(config.log.file.as_ref()) {
        init_tracing(path, &config.log.level).context("failed to set up logging")?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting chipgrid");

    chipgrid::ui::run(&config, seed).context("terminal UI failed")?;
    Ok(())
}
