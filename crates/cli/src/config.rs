//! CLI configuration.
//!
//! Values are read from the environment once in `main` and passed down, so the
//! command handlers never touch process-wide state.

use std::str::FromStr;

/// Output format for listing and export commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown output format '{0}' (expected text, json or yaml)")]
    UnknownFormat(String),
    #[error("invalid namespace path '{0}'")]
    InvalidNamespace(String),
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(ConfigError::UnknownFormat(s.to_owned())),
        }
    }
}

/// Configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    format: OutputFormat,
    namespace: String,
}

impl CliConfig {
    pub fn new(format: OutputFormat, namespace: String) -> Self {
        Self { format, namespace }
    }

    /// Reads `CXX_URLS_FORMAT` and `CXX_URLS_NAMESPACE`.
    ///
    /// A format given on the command line wins, and the environment value is then not parsed.
    pub fn from_env(format_flag: Option<OutputFormat>) -> Result<Self, ConfigError> {
        Self::from_values(
            format_flag,
            std::env::var("CXX_URLS_FORMAT").ok(),
            std::env::var("CXX_URLS_NAMESPACE").ok(),
        )
    }

    pub fn from_values(
        format_flag: Option<OutputFormat>,
        format_env: Option<String>,
        namespace_env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let format = match format_flag {
            Some(format) => format,
            None => format_from_env_value(format_env)?,
        };
        Ok(Self::new(format, namespace_from_env_value(namespace_env)?))
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Namespace used when a command is given no path. Empty means the whole registry.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Log filter used when `RUST_LOG` is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "cxx_urls=info,cxx_fhir_urls=warn";

/// Picks the tracing filter: `RUST_LOG` as given, or [`DEFAULT_LOG_FILTER`].
pub fn log_filter_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Parses an output format, falling back to text when unset or blank.
pub fn format_from_env_value(value: Option<String>) -> Result<OutputFormat, ConfigError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<OutputFormat>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Normalises a default namespace path.
///
/// Only the shape is checked here; whether the namespace exists is up to the registry.
pub fn namespace_from_env_value(value: Option<String>) -> Result<String, ConfigError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if !value.is_empty() && value.split('.').any(str::is_empty) {
        return Err(ConfigError::InvalidNamespace(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_text() {
        assert_eq!(format_from_env_value(None).unwrap(), OutputFormat::Text);
        assert_eq!(format_from_env_value(Some("  ".into())).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_format_parses_aliases() {
        assert_eq!(format_from_env_value(Some("JSON".into())).unwrap(), OutputFormat::Json);
        assert_eq!(format_from_env_value(Some(" yml ".into())).unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn test_format_rejects_unknown() {
        let err = format_from_env_value(Some("xml".into())).expect_err("xml is not supported");
        assert!(matches!(err, ConfigError::UnknownFormat(v) if v == "xml"));
    }

    #[test]
    fn test_format_flag_skips_environment() {
        let config = CliConfig::from_values(Some(OutputFormat::Json), Some("xml".into()), None)
            .expect("flag wins over a bad environment value");
        assert_eq!(config.format(), OutputFormat::Json);
        assert_eq!(config.namespace(), "");
    }

    #[test]
    fn test_bad_format_environment_fails_without_flag() {
        let err = CliConfig::from_values(None, Some("xml".into()), None).expect_err("xml");
        assert!(matches!(err, ConfigError::UnknownFormat(_)));
    }

    #[test]
    fn test_log_filter_prefers_rust_log() {
        assert_eq!(
            log_filter_from_env_value(Some("cxx_urls=debug".into())),
            "cxx_urls=debug"
        );
        assert_eq!(log_filter_from_env_value(None), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter_from_env_value(Some(" ".into())), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_namespace_trims_and_allows_root() {
        assert_eq!(namespace_from_env_value(None).unwrap(), "");
        assert_eq!(
            namespace_from_env_value(Some(" extension.sprec ".into())).unwrap(),
            "extension.sprec"
        );
    }

    #[test]
    fn test_namespace_rejects_empty_segments() {
        for bad in ["extension..sprec", ".extension", "system."] {
            let err = namespace_from_env_value(Some(bad.into())).expect_err("empty segment");
            assert!(matches!(err, ConfigError::InvalidNamespace(_)));
        }
    }
}
