use anyhow::{Context, anyhow};
use chrono::Local;
use cityweather_core::{Config, CurrentResult, OpenWeatherProvider, Widget, provider_from_config};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "London" or "New York".
        city: Vec<String>,
    },

    /// Prompt for city names until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city } => show(&city.join(" ")).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_widget() -> anyhow::Result<Widget<OpenWeatherProvider>> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;
    let credential = cfg.api_key();
    debug!(endpoint = provider.base_url(), has_key = credential.is_some(), "widget ready");

    Ok(Widget::new(provider, credential))
}

async fn show(city: &str) -> anyhow::Result<()> {
    let mut widget = build_widget()?;
    let today = Local::now().date_naive();

    match widget.lookup(city).await {
        CurrentResult::Failure(failure) => Err(anyhow!(failure.message.clone())),
        result => {
            print!("{}", render::render(result, today));
            Ok(())
        }
    }
}

async fn interactive() -> anyhow::Result<()> {
    let mut widget = build_widget()?;

    loop {
        let input = match Text::new("Enter city name:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        widget.set_query(input);
        let today = Local::now().date_naive();
        let result = widget.submit().await;

        print!("{}", render::render(result, today));
    }

    Ok(())
}
