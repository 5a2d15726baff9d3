//! # Game Launcher Use Case Layer
//!
//! Application-specific flows.
//! This layer sequences domain calls and turns their outcomes into
//! reports and errors for the app.

pub mod walkthrough;

pub use launcher_domain;
pub use walkthrough::{Walkthrough, WalkthroughReport};
