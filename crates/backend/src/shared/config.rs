use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::i18n::Locale;
use super::json::JsonCodec;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub i18n: I18nConfig,
    #[serde(default)]
    pub codec: CodecConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct I18nConfig {
    /// Directory with message bundles
    pub bundle_dir: String,
    pub base_names: Vec<String>,
    #[serde(default)]
    pub locales: Vec<Locale>,
    pub default_locale: Locale,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodecConfig {
    /// Codec for HTTP responses
    pub response: JsonCodec,
    /// Codec for HTTP request bodies
    pub request: JsonCodec,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            response: JsonCodec::NonEmpty,
            request: JsonCodec::NonEmpty,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:3000"

[i18n]
bundle_dir = "i18n"
base_names = ["enums"]
locales = ["ru", "en"]
default_locale = "ru"

[codec]
response = "non_empty"
request = "non_empty"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the bundle directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_bundle_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.i18n.bundle_dir);

    // If absolute path, use as is
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: use relative to current directory
    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.i18n.base_names, vec!["enums".to_string()]);
        assert_eq!(config.i18n.default_locale, Locale::new("ru", None));
        assert_eq!(config.i18n.locales.len(), 2);
        assert_eq!(config.codec.response, JsonCodec::NonEmpty);
    }

    #[test]
    fn test_codec_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
[server]
bind = "0.0.0.0:8080"

[i18n]
bundle_dir = "/srv/i18n"
base_names = ["enums", "extra"]
default_locale = "en_US"
"#,
        )
        .unwrap();
        assert_eq!(config.codec.request, JsonCodec::NonEmpty);
        assert!(config.i18n.locales.is_empty());
        assert_eq!(get_bundle_dir(&config), PathBuf::from("/srv/i18n"));
    }

    #[test]
    fn test_unknown_codec_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[server]
bind = "x"

[i18n]
bundle_dir = "i18n"
base_names = []
default_locale = "ru"

[codec]
response = "xml"
request = "non_empty"
"#,
        );
        assert!(result.is_err());
    }
}
