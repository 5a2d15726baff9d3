//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to store accounts,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait AccountRepo     │  InMemoryAccountRepo
//!   fn insert()         │
//!   fn find()           │
//! ```

pub mod account_repository;
