//! Path utilities for cognita.
//!
//! User data lives under `~/.cognita/`:
//! - `~/.cognita/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the cognita home directory (`~/.cognita/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cognita")
}

/// Returns the default config file path (`~/.cognita/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lives_in_home_dir() {
        let path = default_config();
        assert!(path.starts_with(home_dir()));
        assert_eq!(path.file_name().unwrap(), "config.toml");
    }
}
