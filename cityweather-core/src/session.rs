//! Async glue between the widget state machine and the network.
//!
//! The session owns the state, the HTTP client, and the debounce timer, and
//! executes the [`Command`]s the state machine emits. Each outcome is fed
//! back with the epoch it was issued under, so stale responses are dropped.

use tokio::sync::mpsc;
use tracing::warn;

use crate::{
    client::OpenWeatherClient,
    debounce::Debouncer,
    widget::{Command, Key, WidgetState},
};

pub struct LookupSession {
    state: WidgetState,
    client: OpenWeatherClient,
    debouncer: Debouncer,
    debounce_tx: mpsc::UnboundedSender<String>,
    debounce_rx: mpsc::UnboundedReceiver<String>,
}

impl LookupSession {
    pub fn new(client: OpenWeatherClient) -> Self {
        let (debounce_tx, debounce_rx) = mpsc::unbounded_channel();
        Self {
            state: WidgetState::new(),
            client,
            debouncer: Debouncer::new(),
            debounce_tx,
            debounce_rx,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Keystroke: update the state and (re)schedule the debounced
    /// suggestion fetch with the text as of this keystroke.
    pub fn text_changed(&mut self, value: &str) {
        let captured = self.state.on_text_change(value);
        self.debouncer.schedule(captured, self.debounce_tx.clone());
    }

    /// Await the next debounce fire and run the suggestion fetch it carries.
    pub async fn run_next_debounced(&mut self) {
        if let Some(query) = self.debounce_rx.recv().await {
            self.fetch_suggestions(&query).await;
        }
    }

    /// Run one suggestion fetch for `query`. Failures degrade silently to
    /// "no suggestions".
    pub async fn fetch_suggestions(&mut self, query: &str) {
        if let Some(cmd) = self.state.begin_suggestion_fetch(query) {
            self.run_command(cmd).await;
        }
    }

    pub async fn press_key(&mut self, key: Key) {
        if let Some(cmd) = self.state.on_key(key) {
            self.run_command(cmd).await;
        }
    }

    pub async fn submit(&mut self) {
        if let Some(cmd) = self.state.on_submit() {
            self.run_command(cmd).await;
        }
    }

    pub async fn pick_suggestion(&mut self, suggestion: &str) {
        let cmd = self.state.on_suggestion_pick(suggestion);
        self.run_command(cmd).await;
    }

    async fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::FetchSuggestions { query, epoch } => {
                match self.client.city_suggestions(&query).await {
                    Ok(items) => self.state.apply_suggestions(epoch, items),
                    Err(err) => {
                        // Best-effort feature: never surfaced to the user.
                        warn!(error = %err, query, "city suggestion fetch failed");
                        self.state.apply_suggestions(epoch, Vec::new());
                    }
                }
            }
            Command::FetchWeather { city, epoch } => {
                let result = self.client.current_weather(&city).await;
                self.state.apply_weather(epoch, result);
            }
        }
    }
}
