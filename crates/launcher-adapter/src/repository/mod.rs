//! Storage Adapters - Repository implementations
//!
//! These implement the repository traits from launcher-domain.

pub mod in_memory;
