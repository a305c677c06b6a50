//! Composition of geocoding matches into autocomplete display strings.

use std::collections::HashSet;

use crate::model::GeoPlace;

/// Compose the display string for one geocoding match: `name[, state], country`.
pub fn compose(place: &GeoPlace) -> String {
    let mut suggestion = place.name.clone();
    if let Some(state) = &place.state {
        suggestion.push_str(", ");
        suggestion.push_str(state);
    }
    suggestion.push_str(", ");
    suggestion.push_str(&place.country);
    suggestion
}

/// Compose all matches, dropping exact-duplicate strings while preserving
/// first-seen order.
pub fn compose_all(places: &[GeoPlace]) -> Vec<String> {
    let mut seen = HashSet::new();
    places
        .iter()
        .map(compose)
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// The city name a picked suggestion resolves to: the portion before the
/// first comma, trimmed.
pub fn city_of(suggestion: &str) -> &str {
    suggestion.split(',').next().unwrap_or(suggestion).trim()
}
