use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use toml_env::AutoMapEnvArgs;

/// Global options for the application.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Workbook file (`.xlsx`, `.xls`, `.xlsb` or `.ods`) containing the
    /// weather worksheet. When not specified there is nothing to do.
    pub spreadsheet: Option<PathBuf>,
    /// File that the weather data is written to as JSON.
    ///
    /// Default is to write to standard output.
    pub output: Option<PathBuf>,
    /// Which worksheet to read, and the location of the values within it.
    pub weather: weather_spreadsheet::options::Options,
}

impl Options {
    /// Initialize options using the [`toml_env`] library, from the
    /// `LA_WEATHER` environment variable (containing either TOML or the path
    /// to a TOML file), and from `LA_WEATHER__*` variables for individual
    /// values.
    pub fn initialize() -> eyre::Result<Options> {
        let options: Options = toml_env::initialize(toml_env::Args {
            config_variable_name: "LA_WEATHER",
            logging: toml_env::Logging::None,
            auto_map_env: Some(AutoMapEnvArgs {
                prefix: Some("LA_WEATHER"),
                ..AutoMapEnvArgs::default()
            }),
            ..toml_env::Args::default()
        })?
        .unwrap_or_default();
        tracing::info!("{options:?}");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use weather_spreadsheet::{options::Layout, WEATHER_WORKSHEET_NAME};

    use super::Options;

    #[test]
    fn test_deserialize_toml() {
        let options: Options = toml::from_str(
            r#"
            spreadsheet = "data/dashboard.xlsx"

            [weather]
            worksheet = "LA Weather"

            [weather.layout]
            temperature = "C3"
            forecast_first_row = 12
            "#,
        )
        .unwrap();

        assert_eq!(
            options.spreadsheet.as_deref(),
            Some(Path::new("data/dashboard.xlsx"))
        );
        assert_eq!(options.output, None);
        assert_eq!(options.weather.worksheet, "LA Weather");
        assert_eq!(options.weather.layout.temperature.to_string(), "C3");
        assert_eq!(options.weather.layout.forecast_first_row, 12);
        assert_eq!(options.weather.layout.status, Layout::default().status);
    }

    #[test]
    fn test_default() {
        let options: Options = toml::from_str("").unwrap();
        assert_eq!(options.spreadsheet, None);
        assert_eq!(options.weather.worksheet, WEATHER_WORKSHEET_NAME);
    }
}
