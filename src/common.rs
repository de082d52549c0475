//! Common types for the battle client: errors, game ids and coordinates.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors returned by `Game` operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Registration attempted without a player name.
    #[error("Player name not specified")]
    PlayerNameNotSpecified,
    /// Registration attempted without a player email.
    #[error("Player email not specified")]
    PlayerEmailNotSpecified,
    /// Nuke attempted before the game was registered.
    #[error("Game not started yet")]
    GameNotStartedYet,
    /// Nuke attempted after victory or defeat.
    #[error("Game already finished")]
    GameAlreadyFinished,
    /// Failure raised by the transport, passed through untouched.
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

/// Server-assigned game identifier. Kept as raw JSON so that it is echoed
/// back exactly as received, whether the server uses strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Value);

impl GameId {
    /// Build an id from a reply value. `null` means no id.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            other => Some(Self(other.clone())),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(Value::String(id.to_string()))
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(Value::String(id))
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(Value::from(id))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Last coordinate acknowledged by the server. Either half may be missing
/// when the reply did not carry it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coords {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl Coords {
    pub const fn new(x: Option<i64>, y: Option<i64>) -> Self {
        Self { x, y }
    }

    pub const fn at(x: i64, y: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}
