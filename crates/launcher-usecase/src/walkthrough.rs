//! Walkthrough - The end-to-end launcher flow
//!
//! register → login → browse → purchase → manage friends → record
//! achievement → report.

use std::collections::BTreeMap;

use launcher_domain::model::account::Account;
use launcher_domain::{AccountDirectory, AccountRepository, CatalogService};
use launcher_shared::{LauncherError, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What the walkthrough does, step by step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    pub username: String,
    pub password: String,
    /// Title to buy after browsing
    pub purchase: String,
    /// Friends added in order
    pub add_friends: Vec<String>,
    /// Friend removed after the adds
    pub remove_friend: Option<String>,
    /// (game, label) recorded last
    pub achievement: Option<(String, String)>,
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self {
            username: "player1".to_string(),
            password: "pass123".to_string(),
            purchase: "Game1".to_string(),
            add_friends: vec!["player2".to_string(), "player3".to_string()],
            remove_friend: Some("player2".to_string()),
            achievement: Some(("Game1".to_string(), "First Win".to_string())),
        }
    }
}

impl Walkthrough {
    /// Run every step against the given directory and catalog.
    ///
    /// A taken username is not fatal: the run goes on to log in with the
    /// same credentials. A rejected login stops the run.
    pub fn run<R: AccountRepository>(
        &self,
        directory: &mut AccountDirectory<R>,
        catalog: &CatalogService,
    ) -> Result<WalkthroughReport> {
        if directory.register(&self.username, &self.password) {
            info!(username = %self.username, "Registered account");
        } else {
            warn!(username = %self.username, "Username already registered");
        }

        let account = directory
            .login(&self.username, &self.password)
            .ok_or_else(|| LauncherError::LoginRejected {
                username: self.username.clone(),
            })?;
        info!(username = %self.username, "Login successful");

        let titles = catalog.browse();
        debug!(count = titles.len(), "Browsed catalog");

        let purchased = if catalog.purchase(account, &self.purchase) {
            info!(game = %self.purchase, "Purchased game");
            Some(self.purchase.clone())
        } else {
            warn!(game = %self.purchase, "Purchase rejected");
            None
        };

        for friend in &self.add_friends {
            account.add_friend(friend.as_str());
        }
        if let Some(friend) = &self.remove_friend {
            account.remove_friend(friend);
        }
        debug!(friends = account.friends().len(), "Updated friends");

        if let Some((game, label)) = &self.achievement {
            account.add_achievement(game.as_str(), label.as_str());
            info!(game = %game, label = %label, "Recorded achievement");
        }

        Ok(WalkthroughReport::new(account, catalog, purchased))
    }
}

/// Snapshot of the account after a walkthrough
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkthroughReport {
    pub username: String,
    pub catalog: Vec<String>,
    pub purchased: Option<String>,
    pub library: Vec<String>,
    pub friends: Vec<String>,
    pub achievements: BTreeMap<String, Vec<String>>,
}

impl WalkthroughReport {
    fn new(account: &Account, catalog: &CatalogService, purchased: Option<String>) -> Self {
        Self {
            username: account.username().to_string(),
            catalog: catalog.browse().iter().map(|g| g.to_string()).collect(),
            purchased,
            library: account.library().iter().map(|g| g.to_string()).collect(),
            friends: account.friends().iter().map(|f| f.to_string()).collect(),
            achievements: account
                .achievements()
                .iter()
                .map(|(game, labels)| (game.to_string(), labels.clone()))
                .collect(),
        }
    }
}

fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

impl core::fmt::Display for WalkthroughReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Login Successful")?;
        writeln!(f, "Available Games: {}", bracketed(&self.catalog))?;
        if let Some(game) = &self.purchased {
            writeln!(f, "Game Purchased: {}", game)?;
        }
        writeln!(f, "Friends: {}", bracketed(&self.friends))?;

        let achievements: Vec<String> = self
            .achievements
            .iter()
            .map(|(game, labels)| format!("{}={}", game, bracketed(labels)))
            .collect();
        write!(f, "Achievements: {{{}}}", achievements.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_adapter::repository::in_memory::InMemoryAccountRepository;

    fn directory() -> AccountDirectory<InMemoryAccountRepository> {
        AccountDirectory::new(InMemoryAccountRepository::new())
    }

    #[test]
    fn test_default_walkthrough() {
        let mut dir = directory();
        let catalog = CatalogService::default();

        let report = Walkthrough::default().run(&mut dir, &catalog).unwrap();

        assert_eq!(report.username, "player1");
        assert_eq!(report.catalog, vec!["Game1", "Game2", "Game3"]);
        assert_eq!(report.purchased.as_deref(), Some("Game1"));
        assert_eq!(report.library, vec!["Game1"]);
        assert_eq!(report.friends, vec!["player3"]);
        assert_eq!(report.achievements.len(), 1);
        assert_eq!(report.achievements["Game1"], vec!["First Win"]);
    }

    #[test]
    fn test_walkthrough_state_is_stored() {
        let mut dir = directory();
        let catalog = CatalogService::default();
        Walkthrough::default().run(&mut dir, &catalog).unwrap();

        // A second purchase of the same title through a fresh login is refused
        let account = dir.login("player1", "pass123").unwrap();
        assert!(!catalog.purchase(account, "Game1"));
        assert_eq!(account.library().len(), 1);
    }

    #[test]
    fn test_rerun_with_existing_account() {
        let mut dir = directory();
        let catalog = CatalogService::default();
        let plan = Walkthrough::default();

        plan.run(&mut dir, &catalog).unwrap();
        let report = plan.run(&mut dir, &catalog).unwrap();

        // Registration collided, purchase was refused, achievement accumulated
        assert_eq!(dir.count(), 1);
        assert_eq!(report.purchased, None);
        assert_eq!(report.library, vec!["Game1"]);
        assert_eq!(report.friends, vec!["player3"]);
        assert_eq!(report.achievements["Game1"], vec!["First Win", "First Win"]);
    }

    #[test]
    fn test_login_rejected() {
        let mut dir = directory();
        dir.register("player1", "pass123");
        let plan = Walkthrough {
            password: "wrong".to_string(),
            ..Walkthrough::default()
        };

        let err = plan.run(&mut dir, &CatalogService::default()).unwrap_err();

        assert!(matches!(
            err,
            LauncherError::LoginRejected { ref username } if username == "player1"
        ));
        assert!(dir.find("player1").unwrap().library().is_empty());
    }

    #[test]
    fn test_purchase_outside_catalog() {
        let mut dir = directory();
        let plan = Walkthrough {
            purchase: "Game4".to_string(),
            ..Walkthrough::default()
        };

        let report = plan.run(&mut dir, &CatalogService::default()).unwrap();

        assert_eq!(report.purchased, None);
        assert!(report.library.is_empty());
    }

    #[test]
    fn test_report_text() {
        let mut dir = directory();
        let report = Walkthrough::default()
            .run(&mut dir, &CatalogService::default())
            .unwrap();

        let expected = "Login Successful\n\
                        Available Games: [Game1, Game2, Game3]\n\
                        Game Purchased: Game1\n\
                        Friends: [player3]\n\
                        Achievements: {Game1=[First Win]}";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_json() {
        let mut dir = directory();
        let report = Walkthrough::default()
            .run(&mut dir, &CatalogService::default())
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["purchased"], "Game1");
        assert_eq!(json["friends"], serde_json::json!(["player3"]));
        assert_eq!(json["achievements"]["Game1"][0], "First Win");
    }
}
