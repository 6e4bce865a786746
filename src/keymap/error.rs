//! Errors raised while parsing, formatting and binding hotkeys

use thiserror::Error;

use super::action::ActionId;
use super::dispatch::Namespace;
use super::types::KeyCode;

/// Errors that can occur in the hotkey subsystem
///
/// Only [`KeymapError::AllocationFailure`] aborts initialization. Every other
/// variant is recovered from where it happens and only reported.
#[derive(Error, Debug)]
pub enum KeymapError {
    #[error("Key \"{0}\" unrecognized")]
    InvalidKeyName(String),

    #[error("Key code {0:#x} cannot be represented as text")]
    EncodingError(u32),

    #[error("Key \"{key}\" bound to multiple actions ({namespace} map keeps {kept}, rejects {rejected})")]
    DuplicateBinding {
        key: String,
        code: KeyCode,
        namespace: Namespace,
        kept: ActionId,
        rejected: ActionId,
    },

    #[error("Configuration key \"{0}\" does not name an action")]
    UnknownConfigKey(String),

    #[error("Out of memory while initializing hotkeys: {0}")]
    AllocationFailure(#[from] std::collections::TryReserveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hotkey configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, KeymapError>;
