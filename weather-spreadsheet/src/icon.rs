//! Mapping of free text weather status descriptions to pictogram icon codes.

use std::fmt::Display;

use serde::{Serialize, Serializer};

/// A weather pictogram bucket, identified by an OpenWeatherMap style icon
/// code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    /// `01d`, also used when nothing else matches.
    #[default]
    Clear,
    /// `03d`
    Clouds,
    /// `04d`
    Overcast,
    /// `10d`
    Rain,
    /// `11d`
    Thunderstorm,
}

impl WeatherIcon {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Clear => "01d",
            Self::Clouds => "03d",
            Self::Overcast => "04d",
            Self::Rain => "10d",
            Self::Thunderstorm => "11d",
        }
    }

    /// Classify a weather status, e.g. `Partly Cloudy`.
    ///
    /// Matching is case insensitive and looks for keywords in a fixed order,
    /// so `overcast clouds` is classified as [`WeatherIcon::Clouds`].
    pub fn classify(status: Option<&str>) -> Self {
        let status = match status {
            Some(status) if !status.is_empty() => status.to_lowercase(),
            _ => return Self::Clear,
        };

        if status.contains("clear") {
            Self::Clear
        } else if status.contains("cloud") {
            Self::Clouds
        } else if status.contains("overcast") {
            Self::Overcast
        } else if status.contains("rain") {
            Self::Rain
        } else if status.contains("thunder") {
            Self::Thunderstorm
        } else {
            Self::Clear
        }
    }

    /// Url of the pictogram image for this icon, for callers that display the
    /// weather. The serialized weather data only carries [`WeatherIcon::code()`].
    pub fn url(self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.code())
    }
}

impl Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for WeatherIcon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::WeatherIcon;

    #[test]
    fn test_classify() {
        let cases = vec![
            (None, "01d"),
            (Some(""), "01d"),
            (Some("Clear sky"), "01d"),
            (Some("CLEAR"), "01d"),
            (Some("Partly Cloudy"), "03d"),
            (Some("Overcast"), "04d"),
            (Some("overcast clouds"), "03d"),
            (Some("Light rain"), "10d"),
            (Some("Thunderstorm"), "11d"),
            (Some("Foggy"), "01d"),
            (Some("   "), "01d"),
        ];

        for (status, expected) in cases {
            dbg!(status);
            assert_eq!(WeatherIcon::classify(status).code(), expected);
        }
    }

    #[test]
    fn test_first_keyword_wins() {
        assert_eq!(
            WeatherIcon::classify(Some("Cloudy with rain")),
            WeatherIcon::Clouds
        );
        assert_eq!(
            WeatherIcon::classify(Some("Clearing after thunder")),
            WeatherIcon::Clear
        );
        assert_eq!(
            WeatherIcon::classify(Some("Rain and thunder")),
            WeatherIcon::Rain
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(
            WeatherIcon::Rain.url(),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
        assert_eq!(WeatherIcon::Overcast.to_string(), "04d");
    }
}
