//! Startup configuration loader for gemrelay.
//!
//! Non-secret settings come from an optional TOML file and fall back to
//! defaults when the file is missing or malformed. The API key comes from the
//! environment (optionally seeded from a `.env` file) and is required.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use gemrelay_types::config::RelayConfig;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Errors that prevent the relay from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing GEMINI_API_KEY; set it in the environment or in a .env file")]
    MissingApiKey,

    #[error("GEMINI_API_KEY is set but blank")]
    BlankApiKey,
}

/// Load variables from `.env` in the working directory (or a parent).
///
/// Returns the path that was loaded, or `None` when there is no `.env` file.
/// Variables already set in the process environment win over the file. This
/// runs before logging is set up, so callers report the outcome themselves.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Load relay configuration from `path`.
///
/// - `None` or a missing file returns [`RelayConfig::default()`].
/// - A file that fails to read or parse logs a warning and returns the default.
pub async fn load_relay_config(path: Option<&Path>) -> RelayConfig {
    let Some(config_path) = path else {
        return RelayConfig::default();
    };

    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RelayConfig::default()
        }
    }
}

/// Read the API key from [`API_KEY_ENV`].
pub fn load_api_key() -> Result<SecretString, ConfigError> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> Result<SecretString, ConfigError> {
    let value = value.ok_or(ConfigError::MissingApiKey)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::BlankApiKey);
    }
    Ok(SecretString::from(trimmed.to_string()))
}

/// Mask a key for logs: first 6 and last 4 characters.
///
/// Keys too short to mask without revealing most of them become `****`.
pub fn mask_key(key: &SecretString) -> String {
    let chars: Vec<char> = key.expose_secret().chars().collect();
    if chars.len() <= 10 {
        return "****".to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_relay_config_none_returns_default() {
        assert_eq!(load_relay_config(None).await, RelayConfig::default());
    }

    #[tokio::test]
    async fn load_relay_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_relay_config(Some(&tmp.path().join("gemrelay.toml"))).await;
        assert_eq!(config, RelayConfig::default());
    }

    #[tokio::test]
    async fn load_relay_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("gemrelay.toml");
        tokio::fs::write(
            &config_path,
            r#"
port = 8080
public_dir = "static"
preferred_models = ["gemini-1.0-pro"]
"#,
        )
        .await
        .unwrap();

        let config = load_relay_config(Some(&config_path)).await;
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_dir, "static");
        assert_eq!(config.preferred_models, vec!["gemini-1.0-pro"]);
        assert_eq!(config.api_version, "v1");
    }

    #[tokio::test]
    async fn load_relay_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("gemrelay.toml");
        tokio::fs::write(&config_path, "port = \"not a number").await.unwrap();

        let config = load_relay_config(Some(&config_path)).await;
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn api_key_missing_fails() {
        assert!(matches!(api_key_from(None), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn api_key_blank_fails() {
        assert!(matches!(
            api_key_from(Some("   ".to_string())),
            Err(ConfigError::BlankApiKey)
        ));
    }

    #[test]
    fn api_key_is_trimmed() {
        let key = api_key_from(Some(" AIzaSyExample1234 \n".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "AIzaSyExample1234");
    }

    #[test]
    fn config_error_message_names_variable() {
        assert!(ConfigError::MissingApiKey.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn mask_key_shows_head_and_tail() {
        let key = SecretString::from("AIzaSyD-secret-middle-abcd");
        assert_eq!(mask_key(&key), "AIzaSy…abcd");
    }

    #[test]
    fn mask_key_short_is_fully_hidden() {
        assert_eq!(mask_key(&SecretString::from("short")), "****");
    }
}
