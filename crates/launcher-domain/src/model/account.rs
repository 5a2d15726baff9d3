//! Account - A registered player and everything they own
//!
//! Account is an Entity (has identity).
//! The username is the identity and never changes after creation.
//! Library, friends, and achievements are mutated only through the
//! methods below, so the friend list can never hold duplicates.

use std::collections::BTreeMap;

use super::game::GameId;

/// Unique identifier for an Account
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Username {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Username {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl core::borrow::Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Username {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account - One player's identity and owned state
#[derive(Clone)]
pub struct Account {
    /// Unique identifier (Entity identity)
    username: Username,
    /// Stored as given; compared verbatim on login
    password: String,
    /// Owned titles in purchase order
    library: Vec<GameId>,
    /// Friend names in first-added order, no duplicates
    friends: Vec<Username>,
    /// Labels per game, in award order
    achievements: BTreeMap<GameId, Vec<String>>,
}

impl Account {
    /// Create a new Account with an empty library, friend list, and achievements
    pub fn new(username: impl Into<Username>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            library: Vec::new(),
            friends: Vec::new(),
            achievements: BTreeMap::new(),
        }
    }

    // ========== Getters ==========

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn library(&self) -> &[GameId] {
        &self.library
    }

    pub fn friends(&self) -> &[Username] {
        &self.friends
    }

    pub fn achievements(&self) -> &BTreeMap<GameId, Vec<String>> {
        &self.achievements
    }

    /// Achievements earned in one game (empty if none)
    pub fn achievements_for(&self, game: &str) -> &[String] {
        self.achievements
            .get(game)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ========== Queries ==========

    /// Exact, case-sensitive comparison
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn owns(&self, game: &str) -> bool {
        self.library.iter().any(|g| g.as_str() == game)
    }

    pub fn is_friend(&self, name: &str) -> bool {
        self.friends.iter().any(|f| f.as_str() == name)
    }

    // ========== Mutations ==========

    /// Append a title to the library.
    ///
    /// No uniqueness check here; `CatalogService::purchase` is the gate
    /// that keeps the library free of duplicates.
    pub fn add_game(&mut self, game: impl Into<GameId>) {
        self.library.push(game.into());
    }

    /// Add a friend unless already present. Keeps first-seen order.
    pub fn add_friend(&mut self, name: impl Into<Username>) {
        let name = name.into();
        if !self.friends.contains(&name) {
            self.friends.push(name);
        }
    }

    /// Remove a friend. Unknown names are ignored.
    pub fn remove_friend(&mut self, name: &str) {
        if let Some(pos) = self.friends.iter().position(|f| f.as_str() == name) {
            self.friends.remove(pos);
        }
    }

    /// Record an achievement label for a game. Repeats accumulate.
    pub fn add_achievement(&mut self, game: impl Into<GameId>, label: impl Into<String>) {
        self.achievements
            .entry(game.into())
            .or_default()
            .push(label.into());
    }
}

impl core::fmt::Debug for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("library", &self.library)
            .field("friends", &self.friends)
            .field("achievements", &self.achievements)
            .finish()
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same username = same account
        self.username == other.username
    }
}

impl Eq for Account {}
