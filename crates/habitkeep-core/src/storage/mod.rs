mod config;

pub use config::{CalendarConfig, Config, DefaultsConfig, LogConfig, OutputConfig};

use std::path::PathBuf;

/// Returns `~/.config/habitkeep[-dev]/` based on HABITKEEP_ENV.
///
/// Set HABITKEEP_ENV=dev to use the development directory, or
/// HABITKEEP_CONFIG_DIR to replace `~/.config` entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = match std::env::var_os("HABITKEEP_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };

    let env = std::env::var("HABITKEEP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitkeep-dev")
    } else {
        base_dir.join("habitkeep")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
