mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (defaults to warn when RUST_LOG is not set)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fcp=warn,fcp_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Replay {
            events,
            config,
            end_state,
            full_combo,
            modified_score,
            max_score,
            highscore,
            live,
            stream_dir,
        } => commands::replay::run(commands::replay::ReplayOptions {
            events: &events,
            config: config.as_deref(),
            end_state: end_state.into(),
            full_combo,
            modified_score,
            max_score,
            highscore,
            live,
            stream_dir: stream_dir.as_deref(),
        }),
        Command::InitConfig { output, force } => commands::init_config::run(&output, force),
    }
}
