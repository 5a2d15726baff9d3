//! # Game Launcher Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Account storage implementations

pub mod repository;
