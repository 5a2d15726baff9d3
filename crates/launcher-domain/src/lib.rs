//! # Game Launcher Domain Layer
//!
//! Accounts, the catalog, and the rules that connect them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Account, Username, GameId                     ││
//! │  │  repository/- Storage port for accounts                     ││
//! │  │  service/   - AccountDirectory, CatalogService              ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation here is synchronous and total. Failures are reported
//! as `false` or `None`, never as errors.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    account::{Account, Username},
    game::GameId,
};

pub use repository::account_repository::AccountRepository;

pub use service::{account_directory::AccountDirectory, catalog_service::CatalogService};
