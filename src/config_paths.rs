//! Centralized configuration paths for hotkeys
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/hotkeys/`
//! - Windows: `%APPDATA%\hotkeys\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::keymap::{KeymapError, Result};

const APP_DIR: &str = "hotkeys";

/// Base config directory for hotkeys
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/hotkeys`
///   - Else: `~/.config/hotkeys`
///
/// Windows:
///   - `%APPDATA%\hotkeys`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/hotkeys/hotkeys.yaml`
pub fn hotkeys_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("hotkeys.yaml"))
}

/// `~/.config/hotkeys/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `path` and any missing parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        tracing::warn!("Failed to create directory {}: {}", path.display(), e);
        KeymapError::Io(e)
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "No config directory available")
    })?;
    ensure_dir(&logs)?;
    Ok(logs)
}
