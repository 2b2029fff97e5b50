//! Core domain logic for user management.
//! This crate is the single source of truth for user record invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use form::user_form::{
    FieldErrors, FormError, FormField, Notification, Severity, UserForm, MISSING_DATA_MESSAGE,
    NOTIFICATION_AUTO_HIDE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{seed_users, Gender, ParseGenderError, User, UserDraft, UserId};
pub use repo::user_repo::{
    IdGenerator, InMemoryUserRepository, SequentialIdGenerator, UserRepository,
};
pub use service::user_store::{ActionOutcome, UserAction, UserStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
