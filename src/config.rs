use std::env;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 7;
pub const FLEET: [&str; NUM_SHIPS] = [
    "Carrier",
    "Battleship",
    "Cruiser",
    "Submarine",
    "Destroyer",
    "Frigate",
    "Patrol Boat",
];

pub const DEFAULT_REGISTER_URL: &str = "http://battle.platform45.com/register";
pub const DEFAULT_NUKE_URL: &str = "http://battle.platform45.com/nuke";

/// URLs of the two remote operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub register_url: String,
    pub nuke_url: String,
}

impl Endpoints {
    pub fn new(register_url: impl Into<String>, nuke_url: impl Into<String>) -> Self {
        Self {
            register_url: register_url.into(),
            nuke_url: nuke_url.into(),
        }
    }

    /// Defaults, overridden by `BATTLE_REGISTER_URL` and `BATTLE_NUKE_URL` when set.
    pub fn from_env() -> Self {
        let register_url =
            env::var("BATTLE_REGISTER_URL").unwrap_or_else(|_| DEFAULT_REGISTER_URL.to_string());
        let nuke_url = env::var("BATTLE_NUKE_URL").unwrap_or_else(|_| DEFAULT_NUKE_URL.to_string());
        Self {
            register_url,
            nuke_url,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTER_URL, DEFAULT_NUKE_URL)
    }
}
