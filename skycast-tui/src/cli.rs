use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{Config, provider_from_config};

use crate::tui;

/// City fetched when neither the command line nor the config names one.
pub const DEFAULT_CITY: &str = "Thimphu";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal weather with a 5-day forecast")]
pub struct Cli {
    /// City to look up on startup.
    #[arg(long, short)]
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and an optional default city.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;
                let city = self
                    .city
                    .or(config.default_city)
                    .unwrap_or_else(|| DEFAULT_CITY.to_string());

                tracing::debug!(%city, "starting terminal ui");
                tui::run(provider, city).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let default_city = inquire::Text::new("Default city:")
        .with_default(config.default_city.as_deref().unwrap_or(DEFAULT_CITY))
        .prompt()
        .context("Failed to read default city")?;
    config.default_city = Some(default_city.trim().to_string());

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}
