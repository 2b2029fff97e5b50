//! Domain model for user management.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and the form.
//!
//! # Invariants
//! - Every stored record is identified by a unique `UserId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod user;
