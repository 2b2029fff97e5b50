//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the store's mutation contract.
//! - Keep presentation layers decoupled from sequence bookkeeping.

pub mod user_store;
