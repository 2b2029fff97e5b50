//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract the store service delegates to.
//! - Keep sequence bookkeeping and id assignment out of the service layer.
//!
//! # Invariants
//! - Repository mutations never fail; a miss is reported as `false`.

pub mod user_repo;
