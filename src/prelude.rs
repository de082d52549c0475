//! Commonly used types and utilities for ease of import.

pub use crate::{Coords, Endpoints, Game, GameError, GameId, GameStatus, Response, Ship};

pub use crate::transport::{http::HttpTransport, in_memory::InMemoryTransport, Transport};
