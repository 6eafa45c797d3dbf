use serde::{Deserialize, Serialize};

use crate::position::CellPosition;

/// Name of the worksheet containing the Los Angeles weather.
pub const WEATHER_WORKSHEET_NAME: &str = "LA날씨";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Name of the worksheet to read.
    ///
    /// Default is `LA날씨`.
    pub worksheet: String,
    pub layout: Layout,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            worksheet: WEATHER_WORKSHEET_NAME.to_owned(),
            layout: Layout::default(),
        }
    }
}

/// Where each value is located in the worksheet, positions in A1 notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub status: CellPosition,
    /// Current weather is only read when the worksheet reaches the row of
    /// this cell.
    pub temperature: CellPosition,
    pub humidity: CellPosition,
    pub wind_speed: CellPosition,
    pub pressure: CellPosition,
    pub visibility: CellPosition,
    pub sunrise: CellPosition,
    pub sunset: CellPosition,
    /// Zero-based index of the first forecast row. Each forecast row holds the
    /// date, minimum temperature, maximum temperature and status in its first
    /// four columns.
    pub forecast_first_row: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            status: CellPosition::new(1, 0),
            temperature: CellPosition::new(1, 2),
            humidity: CellPosition::new(1, 3),
            wind_speed: CellPosition::new(1, 4),
            pressure: CellPosition::new(1, 5),
            visibility: CellPosition::new(1, 6),
            sunrise: CellPosition::new(1, 7),
            sunset: CellPosition::new(1, 8),
            forecast_first_row: 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, Options};
    use crate::position::CellPosition;

    #[test]
    fn test_default_layout_positions() {
        let layout = Layout::default();
        let positions = vec![
            (layout.status, "B1"),
            (layout.temperature, "B3"),
            (layout.humidity, "B4"),
            (layout.wind_speed, "B5"),
            (layout.pressure, "B6"),
            (layout.visibility, "B7"),
            (layout.sunrise, "B8"),
            (layout.sunset, "B9"),
        ];
        for (position, expected) in positions {
            assert_eq!(position.to_string(), expected);
        }
    }

    #[test]
    fn test_deserialize_partial() {
        let options: Options = serde_json::from_str(
            r#"{ "worksheet": "Weather", "layout": { "temperature": "C3", "forecast_first_row": 14 } }"#,
        )
        .unwrap();

        assert_eq!(options.worksheet, "Weather");
        assert_eq!(options.layout.temperature, CellPosition::new(2, 2));
        assert_eq!(options.layout.forecast_first_row, 14);
        assert_eq!(options.layout.status, Layout::default().status);
    }

    #[test]
    fn test_deserialize_empty() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.worksheet, "LA날씨");
    }

    #[test]
    fn test_deserialize_invalid_position() {
        let result = serde_json::from_str::<Options>(r#"{ "layout": { "status": "1B" } }"#);
        assert!(result.is_err());
    }
}
