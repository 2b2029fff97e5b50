//! Presentation-side form state.
//!
//! # Responsibility
//! - Model the add/edit form independently of any rendering toolkit.
//! - Emit store actions; never hold or mutate the store directly.

pub mod user_form;
