// Linkvault platform abstraction
// Provides the platform-specific config path for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Linkvault.
///
/// - **Linux**: `~/.config/linkvault` (or `$XDG_CONFIG_HOME/linkvault`)
/// - **macOS**: `~/Library/Application Support/Linkvault`
/// - **Windows**: `%APPDATA%/Linkvault`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
