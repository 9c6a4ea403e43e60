use clap::Parser;
use control_panel::cli::Cli;
use env_logger::{Builder, Env, Target};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str()))
        .target(Target::Stdout)
        .init();

    let config = cli.into_config()?;
    log::info!("fixture source: {:?}", config.fixtures.source);

    control_panel::run_gui(config).map_err(|e| anyhow::anyhow!("GUI exited with error: {e}"))
}
