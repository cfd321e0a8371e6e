use thiserror::Error;

/// Failures while loading server settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
