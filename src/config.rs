//! payqr runtime configuration handling

use crate::error::{Error, Result};
use crate::qr::{QrEncoder, parse_ec_level};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayqrConfig {
    /// Output and rendering configuration overrides
    pub output: OutputOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl PayqrConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No payqr.toml / payqr.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["payqr.toml", "payqr.yaml", "payqr.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("payqr");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.output.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// Produce a QR encoder resolved from the output options.
    pub fn encoder(&self) -> Result<QrEncoder> {
        self.output.to_encoder()
    }

    /// The configured base directory prefix, empty by default.
    pub fn base_dir(&self) -> &str {
        self.output.base_dir.as_deref().unwrap_or("")
    }
}

/// User-friendly output overrides that are merged on top of the issuer defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Override for the base directory prefix in front of `static/img/`.
    /// Treated as a raw prefix; include the trailing separator.
    pub base_dir: Option<String>,
    /// Override for the QR error correction level (l/m/q/h).
    pub ec_level: Option<String>,
    /// Override for the minimum rendered image dimensions in pixels.
    pub min_size: Option<u32>,
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(base_dir) = env::var("PAYQR_BASE_DIR") {
            self.base_dir = Some(base_dir);
        }
        if let Ok(level) = env::var("PAYQR_QR_EC_LEVEL") {
            self.ec_level = Some(level);
        }
        if let Ok(size) = env::var("PAYQR_QR_MIN_SIZE") {
            self.min_size = size.parse::<u32>().ok();
        }
    }

    /// Merge overrides onto the default encoder configuration.
    pub fn to_encoder(&self) -> Result<QrEncoder> {
        let mut encoder = match &self.ec_level {
            Some(level) => {
                let parsed = parse_ec_level(level).ok_or_else(|| {
                    Error::Config(format!(
                        "Unknown error correction level '{}'. Use l, m, q, or h",
                        level
                    ))
                })?;
                QrEncoder::with_ec_level(parsed)
            }
            None => QrEncoder::new(),
        };

        if let Some(size) = self.min_size {
            encoder = encoder.min_dimensions(size);
        }

        Ok(encoder)
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `PAYQR_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("PAYQR_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("PAYQR_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("PAYQR_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PayqrConfig::default();
        assert_eq!(config.base_dir(), "");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.color);
        assert!(config.encoder().is_ok());
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[output]\nbase_dir = \"/srv/app/\"\nec_level = \"q\"\nmin_size = 256\n\n[logging]\nlevel = \"debug\"\ncolor = false"
        )
        .unwrap();

        let config = PayqrConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_dir(), "/srv/app/");
        assert_eq!(config.output.ec_level.as_deref(), Some("q"));
        assert_eq!(config.output.min_size, Some(256));
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.color);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let err = PayqrConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_ec_level_rejected() {
        let options = OutputOptions {
            ec_level: Some("ultra".to_string()),
            ..OutputOptions::default()
        };
        assert!(matches!(options.to_encoder(), Err(Error::Config(_))));
    }
}
