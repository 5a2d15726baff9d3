//! Account Repository - Abstract storage for Accounts
//!
//! Accounts are keyed by username. There is no removal: the
//! directory only ever grows.

use crate::model::account::{Account, Username};

/// Account Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Used by `AccountDirectory` as its single source of truth.
///
/// Note: No `Result` here. Backends are process-local and cannot fail,
/// and the directory reports outcomes as `bool` / `Option`.
pub trait AccountRepository {
    /// Check whether a username is taken (case-sensitive)
    fn contains(&self, username: &str) -> bool;

    /// Find an account by username
    fn find(&self, username: &str) -> Option<&Account>;

    /// Find an account by username for mutation
    fn find_mut(&mut self, username: &str) -> Option<&mut Account>;

    /// Store a new account.
    ///
    /// Returns `false` and leaves the stored account untouched if the
    /// username is already present.
    fn insert(&mut self, account: Account) -> bool;

    /// Number of stored accounts
    fn count(&self) -> usize;

    /// All usernames, sorted
    fn usernames(&self) -> Vec<Username>;
}
