use eyre::Context;
use tracing_subscriber::EnvFilter;

use crate::options::Options;

mod fs;
mod options;

const DEFAULT_FILTER: &str = "warn,la_weather=info,weather_spreadsheet=debug";

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let options = Options::initialize()?;

    let Some(spreadsheet) = &options.spreadsheet else {
        tracing::info!("No spreadsheet specified, nothing to do");
        return Ok(());
    };

    let mut workbook = weather_spreadsheet::workbook::open_workbook(spreadsheet)
        .wrap_err_with(|| format!("Unable to open spreadsheet {:?}", spreadsheet))?;
    let weather = weather_spreadsheet::fetch_weather(&mut workbook, &options.weather);
    let json = serde_json::to_string_pretty(&weather).wrap_err("Error serializing weather data")?;

    match &options.output {
        Some(path) => {
            fs::write_output(path, &json)?;
            tracing::info!("Weather data written to {path:?}");
        }
        None => println!("{json}"),
    }

    Ok(())
}
