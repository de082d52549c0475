//! Wire format of the remote game: request bodies and tolerant views of
//! the replies.
//!
//! Replies are kept as raw JSON objects. The views below pick out the fields
//! the game understands; a missing, `null` or mistyped field reads as `None`
//! and never fails the parse.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::common::{Coords, GameId};

/// Raw JSON object returned by the server.
pub type Response = Map<String, Value>;

/// Body of the registration call.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Body of the nuke call.
#[derive(Debug, Clone, Serialize)]
pub struct NukeRequest<'a> {
    pub id: Option<&'a GameId>,
    pub x: u32,
    pub y: u32,
}

/// Fields of a registration reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterReply {
    pub id: Option<GameId>,
    pub coords: Coords,
}

impl RegisterReply {
    pub fn parse(response: &Response) -> Self {
        Self {
            id: response.get("id").and_then(GameId::from_value),
            coords: coords(response),
        }
    }
}

/// Fields of a nuke reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NukeReply {
    /// Name of the ship sunk by this shot.
    pub sunk: Option<String>,
    /// Shot outcome, usually `hit` or `miss`.
    pub status: Option<String>,
    /// Server-declared game state, `lost` when the player was defeated.
    pub game_status: Option<String>,
    pub prize: Option<String>,
    pub coords: Coords,
}

impl NukeReply {
    pub fn parse(response: &Response) -> Self {
        Self {
            sunk: text(response, "sunk"),
            status: text(response, "status"),
            game_status: text(response, "game_status"),
            prize: text(response, "prize"),
            coords: coords(response),
        }
    }

    pub fn is_lost(&self) -> bool {
        self.game_status.as_deref() == Some("lost")
    }
}

/// String fields are taken as-is; other non-null scalars keep their JSON text.
fn text(response: &Response, key: &str) -> Option<String> {
    match response.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn coords(response: &Response) -> Coords {
    Coords::new(
        response.get("x").and_then(Value::as_i64),
        response.get("y").and_then(Value::as_i64),
    )
}
