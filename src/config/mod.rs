pub mod error;
pub mod hash;
pub mod settings;

use std::path::PathBuf;

pub use error::ConfigError;
pub use hash::HashConfig;
pub use settings::Settings;

/// Get or create the config directory (~/.config/visual-hash/).
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("visual-hash");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    Some(config_dir()?.join("config.toml"))
}
