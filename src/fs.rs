//! File system utilities.

use std::path::Path;

use eyre::Context;

/// Create a directory (and its parents) if it doesn't already exist.
pub fn create_dir_if_not_exists<P: AsRef<Path>>(path: P) -> eyre::Result<()> {
    let path: &Path = path.as_ref();

    if !path.exists() {
        std::fs::create_dir_all(path)
            .wrap_err_with(|| format!("Error creating directory {:?}", path))?;
    }

    Ok(())
}

/// Write `contents` to the file at `path`, creating its directory if needed.
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> eyre::Result<()> {
    let path: &Path = path.as_ref();

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        create_dir_if_not_exists(dir)?;
    }

    std::fs::write(path, contents)
        .wrap_err_with(|| format!("Error writing weather data to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::write_output;

    #[test]
    fn test_write_output_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("weather.json");

        write_output(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        write_output(&path, "[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
