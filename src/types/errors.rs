use std::fmt;

// === StoreError ===

/// Errors surfaced by the remote store client.
#[derive(Debug)]
pub enum StoreError {
    /// The snapshot read failed.
    Fetch(String),
    /// An insert or delete request failed at the remote store.
    Mutation(String),
    /// A session or sign-in/out endpoint failed.
    Auth(String),
    /// The change feed could not be established.
    Subscribe(String),
    /// The backend returned a payload that could not be decoded.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Fetch(msg) => write!(f, "Store fetch failed: {}", msg),
            StoreError::Mutation(msg) => write!(f, "Store mutation failed: {}", msg),
            StoreError::Auth(msg) => write!(f, "Store auth request failed: {}", msg),
            StoreError::Subscribe(msg) => {
                write!(f, "Change feed subscription failed: {}", msg)
            }
            StoreError::Decode(msg) => write!(f, "Store payload decode failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === SyncError ===

/// Errors related to the bookmark synchronization state manager.
#[derive(Debug)]
pub enum SyncError {
    /// The initial snapshot could not be fetched; the visible collection
    /// stays empty until the caller re-initializes.
    Fetch(String),
    /// The change feed could not be established.
    Subscribe(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Fetch(msg) => write!(f, "Snapshot fetch failed: {}", msg),
            SyncError::Subscribe(msg) => write!(f, "Subscribe failed: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
        }
    }
}

impl std::error::Error for SettingsError {}
