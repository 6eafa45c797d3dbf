//! Extraction of the current weather and daily forecast from a fixed layout
//! weather worksheet.

pub mod icon;
pub mod options;
pub mod position;
mod serde;
pub mod sheet;
pub mod spreadsheet;
pub mod workbook;

use ::serde::Serialize;

pub use icon::WeatherIcon;
use options::{Layout, Options};
pub use options::WEATHER_WORKSHEET_NAME;
pub use sheet::RawSheet;
pub use spreadsheet::{MemorySpreadsheet, Spreadsheet};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The worksheet {0:?} does not exist")]
    WorksheetMissing(String),
    #[error(transparent)]
    Workbook(#[from] calamine::Error),
    #[error("Unable to access the spreadsheet")]
    Access(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub fn access<E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>>(error: E) -> Self {
        Self::Access(error.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentWeather {
    #[serde(rename = "LA_Temperature")]
    pub temperature: Option<String>,
    /// Empty when the worksheet has no status.
    #[serde(rename = "LA_WeatherStatus")]
    pub status: String,
    #[serde(rename = "LA_WeatherIcon")]
    pub icon: WeatherIcon,
    #[serde(rename = "LA_Humidity")]
    pub humidity: Option<String>,
    #[serde(rename = "LA_WindSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "LA_Pressure")]
    pub pressure: Option<String>,
    #[serde(rename = "LA_Visibility")]
    pub visibility: Option<String>,
    #[serde(rename = "LA_Sunrise")]
    pub sunrise: Option<String>,
    #[serde(rename = "LA_Sunset")]
    pub sunset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    pub date: String,
    pub min_temp: String,
    pub max_temp: String,
    pub status: String,
    pub icon: WeatherIcon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeatherData {
    /// [`None`] when the worksheet is too short to contain the current
    /// weather, serialized as `{}`.
    #[serde(serialize_with = "crate::serde::empty_map_option::serialize")]
    pub current: Option<CurrentWeather>,
    /// In worksheet row order.
    pub forecast: Vec<ForecastDay>,
}

/// Extract the weather from the values of a worksheet.
///
/// Values outside of the bounds of `sheet` are treated as missing, so this
/// never fails.
pub fn extract_weather(sheet: &RawSheet, layout: &Layout) -> WeatherData {
    let current = (sheet.len() > layout.temperature.row as usize)
        .then(|| extract_current_weather(sheet, layout));

    let forecast = if sheet.len() > layout.forecast_first_row {
        extract_forecast(sheet, layout.forecast_first_row)
    } else {
        Vec::new()
    };

    WeatherData { current, forecast }
}

fn extract_current_weather(sheet: &RawSheet, layout: &Layout) -> CurrentWeather {
    let value = |position| sheet.cell_at(position).map(str::to_owned);
    let status = sheet.cell_at(layout.status).unwrap_or_default().to_owned();

    CurrentWeather {
        temperature: value(layout.temperature),
        icon: WeatherIcon::classify(Some(status.as_str())),
        status,
        humidity: value(layout.humidity),
        wind_speed: value(layout.wind_speed),
        pressure: value(layout.pressure),
        visibility: value(layout.visibility),
        sunrise: value(layout.sunrise),
        sunset: value(layout.sunset),
    }
}

fn extract_forecast(sheet: &RawSheet, first_row: usize) -> Vec<ForecastDay> {
    sheet
        .rows()
        .iter()
        .skip(first_row)
        .filter_map(|row| match row.as_slice() {
            [date, min_temp, max_temp, status, ..] => {
                let status = status.trim();
                Some(ForecastDay {
                    date: date.trim().to_owned(),
                    min_temp: min_temp.trim().to_owned(),
                    max_temp: max_temp.trim().to_owned(),
                    status: status.to_owned(),
                    icon: WeatherIcon::classify(Some(status)),
                })
            }
            // Rows without all four values are not forecasts.
            _ => None,
        })
        .collect()
}

/// Read the worksheet named in `options` from `spreadsheet` and extract the
/// weather from it.
pub fn try_fetch_weather<S: Spreadsheet>(
    spreadsheet: &mut S,
    options: &Options,
) -> Result<WeatherData> {
    tracing::debug!("Reading weather from worksheet {:?}", options.worksheet);
    let worksheet = spreadsheet.worksheet(&options.worksheet)?;
    let sheet = spreadsheet.all_values(&worksheet)?;

    let weather = extract_weather(&sheet, &options.layout);
    tracing::debug!("Current weather: {:?}", weather.current);
    tracing::debug!(
        "Forecast (first 3): {:?}",
        &weather.forecast[..weather.forecast.len().min(3)]
    );

    Ok(weather)
}

/// Same as [`try_fetch_weather()`] except that an error is logged and empty
/// [`WeatherData`] is returned in its place.
pub fn fetch_weather<S: Spreadsheet>(spreadsheet: &mut S, options: &Options) -> WeatherData {
    match try_fetch_weather(spreadsheet, options) {
        Ok(weather) => weather,
        Err(error) => {
            tracing::error!(
                error = &error as &(dyn std::error::Error + 'static),
                "Error while fetching weather data from worksheet {:?}",
                options.worksheet
            );
            WeatherData::default()
        }
    }
}
