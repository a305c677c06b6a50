//! Core library for the `cityweather` lookup widget.
//!
//! This crate defines:
//! - Configuration handling (API key, endpoint base URLs)
//! - The HTTP client for the weather and geocoding endpoints
//! - The widget state machine: debounced autocomplete, keyboard
//!   navigation, submit, and the weather request lifecycle
//! - Pure projection of fetched weather into display fields
//!
//! It is used by `cityweather-cli`, but can also be reused by other
//! binaries or services.

pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod model;
pub mod session;
pub mod suggest;
pub mod view;
pub mod widget;

pub use client::OpenWeatherClient;
pub use config::Config;
pub use error::LookupError;
pub use model::{Condition, GeoPlace, WeatherReport};
pub use session::LookupSession;
pub use view::ReportView;
pub use widget::{Command, Key, RequestStatus, WidgetState};
