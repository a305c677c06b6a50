//! Pure projection of a weather report into display fields.

use std::fmt;

use crate::model::WeatherReport;

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Image URL for a provider icon code, or an empty string when the code is
/// empty.
pub fn icon_url(icon_code: &str) -> String {
    if icon_code.is_empty() {
        return String::new();
    }
    format!("{ICON_URL_BASE}/{icon_code}@2x.png")
}

/// Display fields for a fetched weather report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    /// `"{name}, {country}"`.
    pub title: String,
    /// Icon image URL; empty when the report carries no icon code.
    pub icon_url: String,
    /// First condition's text, or `None` when the condition block is omitted.
    pub description: Option<String>,
    /// Temperature rounded to the nearest integer, °C.
    pub temp_c: i64,
    /// Humidity, verbatim %.
    pub humidity_pct: u8,
    /// Wind speed converted from m/s and rounded, km/h.
    pub wind_kmh: i64,
}

impl From<&WeatherReport> for ReportView {
    fn from(report: &WeatherReport) -> Self {
        Self {
            title: format!("{}, {}", report.name, report.country),
            icon_url: report
                .condition
                .as_ref()
                .and_then(|c| c.icon.as_deref())
                .map(icon_url)
                .unwrap_or_default(),
            description: report.condition.as_ref().map(|c| c.description.clone()),
            temp_c: report.temp_c.round() as i64,
            humidity_pct: report.humidity_pct,
            wind_kmh: (report.wind_mps * 3.6).round() as i64,
        }
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        writeln!(f, "{}°C", self.temp_c)?;
        writeln!(f, "Humidity: {}%", self.humidity_pct)?;
        write!(f, "Wind Speed: {} km/h", self.wind_kmh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;

    fn report() -> WeatherReport {
        WeatherReport {
            name: "Paris".into(),
            country: "FR".into(),
            condition: Some(Condition {
                description: "scattered clouds".into(),
                icon: Some("03d".into()),
            }),
            temp_c: 21.4,
            humidity_pct: 40,
            wind_mps: 5.0,
        }
    }

    #[test]
    fn title_joins_name_and_country() {
        let view = ReportView::from(&report());
        assert_eq!(view.title, "Paris, FR");
    }

    #[test]
    fn wind_is_converted_to_rounded_kmh() {
        let view = ReportView::from(&report());
        assert_eq!(view.wind_kmh, 18); // 5 m/s × 3.6
    }

    #[test]
    fn temperature_rounds_to_nearest_integer() {
        let mut r = report();
        r.temp_c = 21.4;
        assert_eq!(ReportView::from(&r).temp_c, 21);
        r.temp_c = 21.5;
        assert_eq!(ReportView::from(&r).temp_c, 22);
    }

    #[test]
    fn icon_url_built_only_when_icon_present() {
        let view = ReportView::from(&report());
        assert_eq!(view.icon_url, "https://openweathermap.org/img/wn/03d@2x.png");

        let mut r = report();
        r.condition.as_mut().unwrap().icon = None;
        assert_eq!(ReportView::from(&r).icon_url, "");
    }

    #[test]
    fn condition_block_omitted_when_list_was_empty() {
        let mut r = report();
        r.condition = None;

        let view = ReportView::from(&r);
        assert_eq!(view.description, None);
        assert_eq!(view.icon_url, "");
        assert!(!view.to_string().contains("clouds"));
    }

    #[test]
    fn humidity_passes_through_verbatim() {
        let view = ReportView::from(&report());
        assert_eq!(view.humidity_pct, 40);
    }

    #[test]
    fn display_renders_all_fields() {
        let rendered = ReportView::from(&report()).to_string();
        assert!(rendered.starts_with("Paris, FR\n"));
        assert!(rendered.contains("scattered clouds"));
        assert!(rendered.contains("21°C"));
        assert!(rendered.contains("Humidity: 40%"));
        assert!(rendered.ends_with("Wind Speed: 18 km/h"));
    }
}
