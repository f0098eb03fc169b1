use anyhow::{Context, Result};
use clap::Parser;
use neo_invoke::FeeEstimator;
use neo_invoke_cli::args::{CliArgs, Command};
use neo_invoke_cli::commands;
use neo_invoke_config::{InvokerConfig, LogFormat, LoggerConfig};
use std::io;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = CliArgs::parse();
    let config = InvokerConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    init_tracing(&config.logger);
    debug!(config = %cli.config.display(), "configuration loaded");

    let estimator = FeeEstimator::from_settings(&config.fees);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Encode {
            registry,
            contract,
            args,
        } => commands::encode(&mut out, &registry, &contract, &args),
        Command::Import { file } => commands::import(&mut out, &file),
        Command::Estimate {
            gas_consumed,
            existing_gas,
        } => commands::estimate(&mut out, &estimator, gas_consumed, existing_gas),
        Command::Interpret {
            result,
            existing_gas,
        } => commands::interpret_result(&mut out, &estimator, &result, existing_gas),
    }
}

fn init_tracing(logger: &LoggerConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logger.level));
    let builder = fmt().with_env_filter(env_filter).with_writer(io::stderr);
    let _ = match logger.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
