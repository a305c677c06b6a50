use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::autocompletion::{Autocomplete, Replacement};

use cityweather_core::{Config, LookupSession, OpenWeatherClient, ReportView, RequestStatus};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Lookup {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Prompt for a city with live autocomplete, then show its weather.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Lookup { city } => lookup(&city).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn lookup(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config)?;

    let mut session = LookupSession::new(client);
    session.text_changed(city);
    session.submit().await;

    render(session.state().status());
    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config)?;

    let completer = CityCompleter {
        client: client.clone(),
        handle: tokio::runtime::Handle::current(),
    };

    let picked = inquire::Text::new("City:")
        .with_placeholder("Enter city name")
        .with_autocomplete(completer)
        .prompt()
        .context("Failed to read city")?;

    let mut session = LookupSession::new(client);
    if picked.contains(',') {
        // A picked suggestion carries the composed "name[, state], country".
        session.pick_suggestion(&picked).await;
    } else {
        session.text_changed(&picked);
        session.submit().await;
    }

    render(session.state().status());
    Ok(())
}

fn render(status: &RequestStatus) {
    match status {
        RequestStatus::Success(report) => println!("{}", ReportView::from(report)),
        RequestStatus::Error(message) => println!("Error: {message}"),
        RequestStatus::Loading => println!("Loading weather data..."),
        RequestStatus::Idle => {}
    }
}

/// Geocoding-backed autocomplete for the interactive prompt.
#[derive(Clone)]
struct CityCompleter {
    client: OpenWeatherClient,
    handle: tokio::runtime::Handle,
}

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if input.trim().is_empty() {
            return Ok(Vec::new());
        }

        let client = self.client.clone();
        let query = input.to_string();

        // inquire callbacks are synchronous; hop onto the runtime for the fetch.
        let suggestions = tokio::task::block_in_place(|| {
            self.handle.block_on(async { client.city_suggestions(&query).await })
        });

        match suggestions {
            Ok(items) => Ok(items),
            Err(err) => {
                // Autocomplete is best-effort; degrade to no suggestions.
                tracing::warn!(error = %err, "city suggestion fetch failed");
                Ok(Vec::new())
            }
        }
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion)
    }
}
