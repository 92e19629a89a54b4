use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prism_lens::{
    catalog::Catalog,
    cli::{execute_command, Cli},
    config::{Config, LogFormat},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "PRISM Lens starting");

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to load transparency catalog");
            return Err(e.into());
        }
    };

    let result = execute_command(cli.command, &catalog, &config);
    if result.exit_code != 0 {
        error!(message = %result.message, "Command failed");
        eprintln!("{}", result.message);
        std::process::exit(result.exit_code);
    }

    println!("{}", result.message);
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
