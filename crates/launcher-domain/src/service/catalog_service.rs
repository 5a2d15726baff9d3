//! CatalogService - Browsing and purchasing
//!
//! The catalog is fixed at construction and never changes afterwards.
//! The service owns no accounts; each purchase operates on the account
//! handed to it.

use crate::model::account::Account;
use crate::model::game::GameId;

/// Titles sold when no catalog is configured
pub const DEFAULT_CATALOG: [&str; 3] = ["Game1", "Game2", "Game3"];

/// The purchasable catalog and the purchase gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogService {
    catalog: Vec<GameId>,
}

impl CatalogService {
    /// Build a catalog from titles, in the order given
    pub fn new<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<GameId>,
    {
        Self {
            catalog: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// The full catalog in its fixed order
    pub fn browse(&self) -> &[GameId] {
        &self.catalog
    }

    pub fn contains(&self, game: &str) -> bool {
        self.catalog.iter().any(|g| g.as_str() == game)
    }

    /// Buy a title for an account.
    ///
    /// Succeeds only for a catalog title the account does not own yet.
    /// On failure the account is left untouched.
    pub fn purchase(&self, account: &mut Account, game: &str) -> bool {
        if !self.contains(game) || account.owns(game) {
            return false;
        }
        account.add_game(game);
        true
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG)
    }
}
