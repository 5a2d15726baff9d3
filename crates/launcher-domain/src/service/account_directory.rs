//! AccountDirectory - Registration and login
//!
//! The directory is constructed explicitly around a repository and
//! passed to whoever needs it. There is no global registry.

use crate::model::account::Account;
use crate::repository::account_repository::AccountRepository;

/// Identity registry and authentication gate
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountDirectory<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new account.
    ///
    /// Returns `false` without touching anything if the username is
    /// already taken. Usernames match case-sensitively.
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        if self.repo.contains(username) {
            return false;
        }
        self.repo.insert(Account::new(username, password))
    }

    /// Log in and get the account for further operations.
    ///
    /// Returns `None` for an unknown username and for a wrong password
    /// alike; callers cannot tell the two apart.
    pub fn login(&mut self, username: &str, password: &str) -> Option<&mut Account> {
        self.repo
            .find_mut(username)
            .filter(|account| account.check_password(password))
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.repo.contains(username)
    }

    /// Read-only lookup, no credentials required
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.repo.find(username)
    }

    pub fn count(&self) -> usize {
        self.repo.count()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
