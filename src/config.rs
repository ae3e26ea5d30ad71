use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://api.quran.com/api/v4";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Base URL of the quran.com-compatible API, without a trailing slash.
    pub api_base_url: String,
    /// Directory holding the persistent store file. Defaults to the
    /// platform data directory when unset.
    pub data_dir: Option<PathBuf>,
    /// Directory used for bulk notes import/export. The exchange feature
    /// stays disabled until one is configured.
    pub notes_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: None,
            notes_dir: None,
        }
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, String> {
    match fs::read_to_string(file_path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(loaded_config) => Ok(loaded_config),
            Err(e) => Err(format!("Failed to parse {}: {}", file_path, e)),
        },
        Err(e) => Err(format!(
            "Failed to read {}: {}. Please ensure it exists.",
            file_path, e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_fields_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.data_dir.is_none());
        assert!(config.notes_dir.is_none());
    }

    #[test]
    fn loads_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_base_url = \"http://localhost:9001/api/v4\"").unwrap();
        writeln!(file, "notes_dir = \"/tmp/quran-notes\"").unwrap();
        let config = load_config_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9001/api/v4");
        assert_eq!(config.notes_dir, Some(PathBuf::from("/tmp/quran-notes")));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config_from_file("/nonexistent/config.toml").is_err());
    }
}
