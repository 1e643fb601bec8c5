use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "folio.json";
const URL_VAR: &str = "FOLIO_STORE_URL";
const KEY_VAR: &str = "FOLIO_STORE_KEY";

/// Hosted record store endpoint. Environment variables take precedence over
/// the config file; with neither present the store runs unconfigured and
/// every insert fails with a clear message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn load() -> Option<StoreConfig> {
        if let (Ok(base_url), Ok(api_key)) = (env::var(URL_VAR), env::var(KEY_VAR)) {
            return Some(StoreConfig { base_url, api_key });
        }
        Self::from_file(CONFIG_FILE)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Option<StoreConfig> {
        let content = fs::read_to_string(path.as_ref()).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(error) => {
                tracing::warn!(path = %path.as_ref().display(), %error, "ignoring malformed store config");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_parses_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://store.example.com", "api_key": "secret"}}"#
        )
        .unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://store.example.com");
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn test_from_file_missing_file() {
        assert!(StoreConfig::from_file("definitely-not-here.json").is_none());
    }

    #[test]
    fn test_from_file_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(StoreConfig::from_file(file.path()).is_none());
    }
}
