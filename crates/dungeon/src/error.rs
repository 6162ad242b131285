//! Errors produced while generating or loading a dungeon.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors from dungeon generation, encoding, and decoding.
#[derive(Debug)]
pub enum DungeonError {
    /// The generation config was rejected.
    Config(ConfigError),
    /// GIF encoding failed.
    Encode(gif::EncodingError),
    /// JSON encoding or decoding failed.
    Json(serde_json::Error),
    /// A floor's data does not describe a valid floor.
    InvalidFloor {
        /// What went wrong.
        reason: String,
    },
    /// A generation worker stopped without producing its floor.
    WorkerFailed {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Encode(e) => write!(f, "gif encoding: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::InvalidFloor { reason } => write!(f, "invalid floor: {reason}"),
            Self::WorkerFailed { reason } => write!(f, "generation worker failed: {reason}"),
        }
    }
}

impl Error for DungeonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for DungeonError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<gif::EncodingError> for DungeonError {
    fn from(e: gif::EncodingError) -> Self {
        Self::Encode(e)
    }
}

impl From<serde_json::Error> for DungeonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_source() {
        let err = DungeonError::from(ConfigError::ZeroWorkers);
        assert_eq!(err.to_string(), "config: workers must be at least 1");
        assert!(err.source().is_some());
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: DungeonError = json_err.into();
        assert!(matches!(err, DungeonError::Json(_)));
        assert!(err.to_string().starts_with("json: "));
    }

    #[test]
    fn invalid_floor_has_no_source() {
        let err = DungeonError::InvalidFloor {
            reason: "data length 3 does not match 10x10".into(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("10x10"));
    }
}
