use serde::{Deserialize, Serialize};

/// One weather condition entry (the provider returns a list; only the first
/// is displayed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    /// Provider icon code, e.g. "04d". Absent icons render no image URL.
    pub icon: Option<String>,
}

/// Current weather for a resolved city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub country: String,
    /// First condition entry, if the provider returned any.
    pub condition: Option<Condition>,
    pub temp_c: f64,
    pub humidity_pct: u8,
    pub wind_mps: f64,
}

/// One geocoding match for an autocomplete query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub state: Option<String>,
    pub country: String,
}
