//! GameId - Identifier of a catalog title
//!
//! GameId is a Value Object. Two ids with the same text are the same game.
//! Ids are free-form: achievements may reference titles the catalog
//! does not sell.

/// Unique identifier for a game title
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets maps keyed by GameId be queried with a plain &str
impl core::borrow::Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for GameId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_equality() {
        assert_eq!(GameId::new("Game1"), GameId::from("Game1"));
        // Case-sensitive
        assert_ne!(GameId::new("Game1"), GameId::new("game1"));
    }

    #[test]
    fn test_game_id_display() {
        assert_eq!(GameId::new("Game2").to_string(), "Game2");
    }
}
