//! Ships of the player's fleet, tracked by name only.

use core::fmt;

/// A ship still afloat in the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
}

impl Ship {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this ship answers to `name`.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
