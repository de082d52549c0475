use core::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{
    common::{Coords, GameError, GameId},
    config::{Endpoints, FLEET},
    protocol::{NukeReply, NukeRequest, RegisterReply, RegisterRequest, Response},
    ship::Ship,
    transport::Transport,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Created locally, not registered with the server.
    Init,
    Start,
    Victory,
    Defeat,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Init => "init",
            GameStatus::Start => "start",
            GameStatus::Victory => "victory",
            GameStatus::Defeat => "defeat",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player's game against the remote server.
///
/// All state is derived from server replies: the server decides hits, sunk
/// ships and the outcome, the game only records them. Each public operation
/// makes at most one blocking round trip through the transport.
pub struct Game<T: Transport> {
    name: Option<String>,
    email: Option<String>,
    id: Option<GameId>,
    status: GameStatus,
    ships: Vec<Ship>,
    coords: Coords,
    prize: Option<String>,
    nuke_status: Option<String>,
    sunk: Option<String>,
    response: Response,
    endpoints: Endpoints,
    transport: T,
}

impl<T: Transport> Game<T> {
    /// Create an unregistered game for the given player with the standard fleet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, transport: T) -> Self {
        Self::with_roster(Some(name.into()), Some(email.into()), None, FLEET, transport)
    }

    /// Pick up a game the server already knows by `id`.
    pub fn resume(id: impl Into<GameId>, transport: T) -> Self {
        Self::with_roster(None, None, Some(id.into()), FLEET, transport)
    }

    /// Create a game with an explicit fleet roster. Repeated names in the
    /// roster are kept once.
    pub fn with_roster<I, S>(
        name: Option<String>,
        email: Option<String>,
        id: Option<GameId>,
        roster: I,
        transport: T,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ships: Vec<Ship> = Vec::new();
        for ship_name in roster {
            let ship_name = ship_name.into();
            if ships.iter().any(|s| s.is(&ship_name)) {
                log::warn!("duplicate ship {} in roster ignored", ship_name);
                continue;
            }
            ships.push(Ship::new(ship_name));
        }
        let status = if id.is_some() {
            GameStatus::Start
        } else {
            GameStatus::Init
        };
        Self {
            name,
            email,
            id,
            status,
            ships,
            coords: Coords::default(),
            prize: None,
            nuke_status: None,
            sunk: None,
            response: Response::new(),
            endpoints: Endpoints::default(),
            transport,
        }
    }

    /// Replace the server endpoints used by `register` and `nuke`.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Register the player with the server, starting the game.
    ///
    /// The reply is applied whatever its shape: missing fields simply clear
    /// the id and coordinates. Returns the raw reply.
    pub fn register(&mut self) -> Result<Response, GameError> {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or(GameError::PlayerNameNotSpecified)?;
        let email = self
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or(GameError::PlayerEmailNotSpecified)?;

        let body =
            serde_json::to_value(RegisterRequest { name, email }).map_err(anyhow::Error::from)?;
        let url = self.endpoints.register_url.clone();
        self.do_request(&url, &body)?;
        self.handle_register();

        Ok(self.response.clone())
    }

    /// Fire at (`x`, `y`) and apply the server's verdict. Returns the raw reply.
    pub fn nuke(&mut self, x: u32, y: u32) -> Result<Response, GameError> {
        if self.is_init() {
            return Err(GameError::GameNotStartedYet);
        }
        if self.is_finished() {
            return Err(GameError::GameAlreadyFinished);
        }

        let body = serde_json::to_value(NukeRequest {
            id: self.id.as_ref(),
            x,
            y,
        })
        .map_err(anyhow::Error::from)?;
        let url = self.endpoints.nuke_url.clone();
        self.do_request(&url, &body)?;
        self.handle_nuke();

        Ok(self.response.clone())
    }

    pub fn is_init(&self) -> bool {
        self.status == GameStatus::Init
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Victory | GameStatus::Defeat)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn id(&self) -> Option<&GameId> {
        self.id.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Ships not yet sunk, in roster order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Prize granted by the server, set only on a prize-carrying victory.
    pub fn prize(&self) -> Option<&str> {
        self.prize.as_deref()
    }

    /// Outcome of the last shot as reported by the server.
    pub fn nuke_status(&self) -> Option<&str> {
        self.nuke_status.as_deref()
    }

    /// Ship sunk by the last shot.
    pub fn sunk(&self) -> Option<&str> {
        self.sunk.as_deref()
    }

    /// Last raw server reply.
    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn do_request(&mut self, url: &str, body: &Value) -> Result<(), GameError> {
        log::debug!("POST {} {}", url, body);
        self.response = self.transport.post(url, body)?;
        Ok(())
    }

    fn handle_register(&mut self) {
        let reply = RegisterReply::parse(&self.response);
        self.id = reply.id;
        self.coords = reply.coords;
        self.start();
        log::info!(
            "registered game {}",
            self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
        );
    }

    // Every step runs on every reply. Victory is checked after defeat and
    // wins when both hold.
    fn handle_nuke(&mut self) {
        let reply = NukeReply::parse(&self.response);
        let lost = reply.is_lost();
        self.sink_ship(reply.sunk);
        self.nuke_status = reply.status;
        if lost {
            self.defeat();
        }
        if reply.prize.is_some() || !self.has_ships() {
            self.victory();
            self.prize = reply.prize;
        }
        self.coords = reply.coords;
    }

    fn sink_ship(&mut self, name: Option<String>) {
        if let Some(name) = &name {
            if let Some(idx) = self.ships.iter().position(|ship| ship.is(name)) {
                self.ships.remove(idx);
                log::info!("{} sunk, {} ships left", name, self.ships.len());
            }
        }
        self.sunk = name;
    }

    fn has_ships(&self) -> bool {
        !self.ships.is_empty()
    }

    fn start(&mut self) {
        self.status = GameStatus::Start;
    }

    fn victory(&mut self) {
        self.status = GameStatus::Victory;
        log::info!("victory");
    }

    fn defeat(&mut self) {
        self.status = GameStatus::Defeat;
        log::info!("defeat");
    }
}
