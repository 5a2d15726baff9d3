//! In-Memory Repository Implementations
//!
//! Process-local storage. Nothing survives a restart.
//!
//! Single-threaded: the directory holds the repository by value and
//! hands out `&mut Account`, so no locking is needed. A multi-client
//! front end would have to wrap the whole directory in a lock.

use std::collections::HashMap;

use launcher_domain::model::account::{Account, Username};
use launcher_domain::repository::account_repository::AccountRepository;

/// In-memory Account Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: HashMap<Username, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    fn insert(&mut self, account: Account) -> bool {
        if self.accounts.contains_key(account.username().as_str()) {
            return false;
        }
        self.accounts.insert(account.username().clone(), account);
        true
    }

    fn count(&self) -> usize {
        self.accounts.len()
    }

    fn usernames(&self) -> Vec<Username> {
        let mut names: Vec<Username> = self.accounts.keys().cloned().collect();
        names.sort();
        names
    }
}
