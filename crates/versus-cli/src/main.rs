//! Versus CLI - command-line interface for the comparison-page engine.

use clap::Parser;
use versus_cli::commands;
use versus_cli::{Cli, Command, Config, Formatter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let profile = config.get_active_profile()?;
    match cli.command {
        Command::Build(args) => commands::execute_build(args, profile, &formatter)?,
        Command::Check(args) => commands::execute_check(args, profile, &formatter)?,
        Command::Score(args) => commands::execute_score(args, profile, &formatter)?,
        Command::List(args) => commands::execute_list(args, profile, &formatter)?,
    }

    Ok(())
}
