//! Domain Services - Rules that span entities
//!
//! `AccountDirectory` gates identity; `CatalogService` gates ownership.

pub mod account_directory;
pub mod catalog_service;
