use serde::{Serialize, Serializer};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by desktop operations and the shell commands that wrap them.
#[derive(Debug, Error)]
pub enum DesktopError {
    /// A view referenced a window id outside the fixed window set.
    /// Only raised under `UnknownWindowPolicy::Reject`.
    #[error("Unknown window: '{0}'")]
    UnknownWindow(String),

    #[error("Unknown language: '{0}'")]
    UnknownLanguage(String),

    #[error("Desktop state lock poisoned")]
    StatePoisoned,

    #[error("Invalid config at {path:?}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open link: {0}")]
    Opener(String),
}

impl<T> From<std::sync::PoisonError<T>> for DesktopError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        DesktopError::StatePoisoned
    }
}

// Tauri command errors cross the IPC boundary as plain strings.
impl Serialize for DesktopError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_message() {
        let err = DesktopError::UnknownWindow("paint".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Unknown window: 'paint'\"");
    }

    #[test]
    fn test_poison_maps_to_state_poisoned() {
        let lock = std::sync::Arc::new(std::sync::Mutex::new(0u8));
        let poisoner = lock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison");
        })
        .join();

        let err: DesktopError = lock.lock().unwrap_err().into();
        assert!(matches!(err, DesktopError::StatePoisoned));
    }
}
