// Linkvault platform paths for Windows
// Config: %APPDATA%/Linkvault

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Linkvault on Windows.
/// Uses `%APPDATA%/Linkvault`, falling back to the current directory.
pub fn get_config_dir() -> PathBuf {
    if let Ok(appdata) = env::var("APPDATA") {
        PathBuf::from(appdata).join("Linkvault")
    } else {
        PathBuf::from(".").join("Linkvault")
    }
}
