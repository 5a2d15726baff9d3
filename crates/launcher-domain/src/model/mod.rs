//! Domain Models - The vocabulary of the launcher
//!
//! Names here match how the launcher talks about itself:
//! an account owns a library, keeps friends, and earns achievements.

pub mod account;
pub mod game;
