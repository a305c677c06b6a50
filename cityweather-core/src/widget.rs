//! The lookup widget's state machine.
//!
//! Pure transitions only: every user event mutates the state and may return a
//! [`Command`] for the embedding runtime to execute. No IO happens here, so
//! the whole interaction model is testable without a network or a screen.

use crate::{
    error::LookupError,
    model::WeatherReport,
    suggest,
};

/// Sentinel for "no suggestion highlighted".
const NO_SELECTION: isize = -1;

/// Highlight value set when a weather fetch starts. Not a valid index into
/// the (just cleared) suggestion list; it is reset as soon as suggestions
/// change. Kept for parity with the widget's long-standing behavior.
const FETCH_START_HIGHLIGHT: isize = 2;

/// Lifecycle of the weather fetch. The variants are mutually exclusive;
/// starting a fetch replaces any prior error or result wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(WeatherReport),
}

/// Keys the widget reacts to. Everything else maps to `Other` and passes
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Other,
}

/// An effect the embedding runtime must perform. Each carries the epoch it
/// was issued under; outcomes are applied only while still the latest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchSuggestions { query: String, epoch: u64 },
    FetchWeather { city: String, epoch: u64 },
}

/// State of the lookup widget: query text, suggestion list, keyboard
/// highlight, and the weather request lifecycle.
#[derive(Debug)]
pub struct WidgetState {
    query: String,
    suggestions: Vec<String>,
    /// Highlighted suggestion index in `[-1, suggestions.len() - 1]`,
    /// `-1` meaning none.
    selection: isize,
    status: RequestStatus,
    suggestion_epoch: u64,
    weather_epoch: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            selection: NO_SELECTION,
            status: RequestStatus::Idle,
            suggestion_epoch: 0,
            weather_epoch: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Raw highlight value, `-1` when nothing is highlighted.
    pub fn selection_index(&self) -> isize {
        self.selection
    }

    /// The highlighted suggestion, when the highlight points at one.
    pub fn highlighted(&self) -> Option<&str> {
        usize::try_from(self.selection)
            .ok()
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Keystroke into the input: stores the new text and resets the
    /// highlight. Returns the text captured now; the caller must schedule
    /// the debounced suggestion fetch with exactly this value, not re-read
    /// the field when the timer fires.
    pub fn on_text_change(&mut self, value: &str) -> String {
        self.query = value.to_string();
        self.selection = NO_SELECTION;
        value.to_string()
    }

    /// Keyboard navigation over the suggestion list.
    pub fn on_key(&mut self, key: Key) -> Option<Command> {
        if self.suggestions.is_empty() {
            return match key {
                Key::Enter => self.on_submit(),
                _ => None,
            };
        }

        let count = self.suggestions.len() as isize;
        match key {
            Key::ArrowDown => {
                self.selection = (self.selection + 1).rem_euclid(count);
                None
            }
            Key::ArrowUp => {
                self.selection = (self.selection - 1).rem_euclid(count);
                None
            }
            Key::Enter => match self.highlighted().map(str::to_owned) {
                Some(suggestion) => Some(self.on_suggestion_pick(&suggestion)),
                None => self.on_submit(),
            },
            Key::Escape => {
                self.suggestions.clear();
                self.selection = NO_SELECTION;
                None
            }
            Key::Other => None,
        }
    }

    /// Explicit submit. A trimmed non-empty query starts a weather fetch;
    /// an empty one reports the inline error without any network call.
    pub fn on_submit(&mut self) -> Option<Command> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.status = RequestStatus::Error(LookupError::EmptyCity.to_string());
            return None;
        }

        let city = trimmed.to_string();
        Some(self.begin_weather_fetch(city))
    }

    /// Pointer or Enter pick of a suggestion: the query becomes the city
    /// name (text before the first comma) and a weather fetch starts for it.
    pub fn on_suggestion_pick(&mut self, suggestion: &str) -> Command {
        let city = suggest::city_of(suggestion).to_string();
        self.query = city.clone();
        self.suggestions.clear();
        self.selection = NO_SELECTION;
        self.begin_weather_fetch(city)
    }

    /// Debounced suggestion query arriving from the timer. An empty trimmed
    /// query clears the list without touching the network.
    pub fn begin_suggestion_fetch(&mut self, query: &str) -> Option<Command> {
        if query.trim().is_empty() {
            self.suggestions.clear();
            self.selection = NO_SELECTION;
            return None;
        }

        self.suggestion_epoch += 1;
        Some(Command::FetchSuggestions {
            query: query.to_string(),
            epoch: self.suggestion_epoch,
        })
    }

    /// Replace the suggestion set. Ignored when a newer suggestion fetch has
    /// been issued since `epoch`, so a slow stale response cannot clobber a
    /// fresher one.
    pub fn apply_suggestions(&mut self, epoch: u64, items: Vec<String>) {
        if epoch != self.suggestion_epoch {
            return;
        }
        self.suggestions = items;
        self.selection = NO_SELECTION;
    }

    /// Resolve the weather fetch issued under `epoch`. Stale outcomes are
    /// dropped; the live one always ends Loading, on success and failure
    /// alike.
    pub fn apply_weather(&mut self, epoch: u64, result: Result<WeatherReport, LookupError>) {
        if epoch != self.weather_epoch {
            return;
        }
        self.status = match result {
            Ok(report) => RequestStatus::Success(report),
            Err(err) => RequestStatus::Error(err.to_string()),
        };
    }

    fn begin_weather_fetch(&mut self, city: String) -> Command {
        self.suggestions.clear();
        self.selection = FETCH_START_HIGHLIGHT;
        self.status = RequestStatus::Loading;
        self.weather_epoch += 1;
        Command::FetchWeather {
            city,
            epoch: self.weather_epoch,
        }
    }
}
