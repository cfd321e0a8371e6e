use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::hash::HashConfig;
use crate::curve::variant::{SignMode, Variant};

/// Explicit settings file path.
pub const ENV_CONFIG_PATH: &str = "VISUAL_HASH_CONFIG";
/// Bind address override.
pub const ENV_BIND_ADDR: &str = "VISUAL_HASH_BIND_ADDR";
/// Variant override.
pub const ENV_VARIANT: &str = "VISUAL_HASH_VARIANT";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server listens on.
    pub bind_addr: String,
    /// Curve family served by this process.
    pub variant: Variant,
    /// Overrides the variant's sign mode when set.
    pub sign_mode: Option<SignMode>,
    /// Chunk size in bytes for streamed downloads.
    pub download_chunk_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            variant: Variant::Classic,
            sign_mode: None,
            download_chunk_size: 8192,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `VISUAL_HASH_CONFIG` or the user config directory, then apply
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::load_file(Path::new(&path))?,
            Err(_) => match super::settings_path() {
                Some(path) => Self::load_or_init(&path)?,
                None => Settings::default(),
            },
        };
        settings.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read an explicit settings file. A missing file is an error.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Read `path`, creating a commented default file when it does not exist.
    fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            Err(_) => {
                let settings = Settings::default();
                if let Err(e) = write_default_settings(path, &settings) {
                    tracing::warn!(path = %path.display(), error = %e, "could not write default settings");
                }
                Ok(settings)
            }
        }
    }

    /// Apply `VISUAL_HASH_*` overrides resolved through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            self.bind_addr = addr;
        }
        if let Some(variant) = lookup(ENV_VARIANT) {
            self.variant = variant.parse().map_err(|e| ConfigError::Invalid {
                key: ENV_VARIANT,
                message: format!("{}", e),
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|e| ConfigError::Invalid {
            key: "bind_addr",
            message: format!("'{}': {}", self.bind_addr, e),
        })
    }

    /// The per-image constants this server renders with.
    pub fn hash_config(&self) -> HashConfig {
        let config = HashConfig::for_variant(self.variant);
        match self.sign_mode {
            Some(mode) => config.with_sign_mode(mode),
            None => config,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.download_chunk_size == 0 {
            return Err(ConfigError::Invalid {
                key: "download_chunk_size",
                message: "must be greater than zero".to_string(),
            });
        }
        self.socket_addr().map(|_| ())
    }
}

/// Write a default settings file with comments.
fn write_default_settings(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let content = format!(
        "# visual-hash server settings\n\
         \n\
         # Address the HTTP server listens on\n\
         bind_addr = \"{}\"\n\
         \n\
         # Curve family: \"classic\", \"curved-colored\" or \"polyline\"\n\
         variant = \"{}\"\n\
         \n\
         # Optional sign multiplier mode: \"coin\" or \"always-negative\"\n\
         # sign_mode = \"coin\"\n\
         \n\
         # Chunk size in bytes for streamed PNG downloads\n\
         download_chunk_size = {}\n",
        settings.bind_addr, settings.variant, settings.download_chunk_size,
    );
    std::fs::write(path, content.as_bytes())?;
    Ok(())
}
