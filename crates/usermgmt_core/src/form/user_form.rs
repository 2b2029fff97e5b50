//! Headless add/edit form for user records.
//!
//! # Responsibility
//! - Hold in-progress field values, per-field error flags and the pending
//!   notification.
//! - Turn a valid submission into a `UserAction` without touching the store.
//!
//! # Invariants
//! - A failed `save` keeps every field value and the editing target.
//! - A successful `save` or `delete` resets the form.
//! - Validation is "field is present and non-empty", nothing more.

use crate::model::user::{Gender, User, UserDraft, UserId};
use crate::service::user_store::UserAction;
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Message shown when a submission is missing required fields.
pub const MISSING_DATA_MESSAGE: &str = "Missing data";
/// How long a notification stays visible.
pub const NOTIFICATION_AUTO_HIDE: Duration = Duration::from_millis(3000);

/// One editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Surname,
    Birthdate,
    Gender,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Name, Self::Surname, Self::Birthdate, Self::Gender];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Birthdate => "birthdate",
            Self::Gender => "gender",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form submission error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Required fields were empty at submit time, in field order.
    MissingFields(Vec<FormField>),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names = fields
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{MISSING_DATA_MESSAGE}: {names}")
            }
        }
    }
}

impl Error for FormError {}

/// Per-field error flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub surname: bool,
    pub birthdate: bool,
    pub gender: bool,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.name,
            FormField::Surname => self.surname,
            FormField::Birthdate => self.birthdate,
            FormField::Gender => self.gender,
        }
    }

    pub fn any(&self) -> bool {
        FormField::ALL.iter().any(|field| self.get(*field))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// Transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: &'static str,
    pub auto_hide: Duration,
}

impl Notification {
    fn missing_data() -> Self {
        Self {
            severity: Severity::Error,
            message: MISSING_DATA_MESSAGE,
            auto_hide: NOTIFICATION_AUTO_HIDE,
        }
    }
}

/// Add/edit form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    name: String,
    surname: String,
    birthdate: Option<NaiveDate>,
    gender: Option<Gender>,
    editing: Option<UserId>,
    errors: FieldErrors,
    notification: Option<Notification>,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn birthdate(&self) -> Option<NaiveDate> {
        self.birthdate
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Id of the record being edited, `None` in add mode.
    pub fn editing(&self) -> Option<UserId> {
        self.editing
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit User"
        } else {
            "Add New User"
        }
    }

    /// Gate for the save and cancel controls.
    pub fn is_any_field_filled(&self) -> bool {
        !self.name.is_empty()
            || !self.surname.is_empty()
            || self.birthdate.is_some()
            || self.gender.is_some()
    }

    pub fn can_delete(&self) -> bool {
        self.editing.is_some()
    }

    /// Syncs the form with the presentation layer's selection.
    ///
    /// - `None` resets the form.
    /// - A selected id found in `users` loads that record and clears errors.
    /// - A selected id missing from `users` leaves the form as it is.
    pub fn load(&mut self, selected: Option<UserId>, users: &[User]) {
        let Some(id) = selected else {
            self.reset();
            return;
        };
        match users.iter().find(|user| user.id == id) {
            Some(user) => {
                self.name = user.name.clone();
                self.surname = user.surname.clone();
                self.birthdate = Some(user.birthdate);
                self.gender = Some(user.gender);
                self.editing = Some(id);
                self.errors = FieldErrors::default();
            }
            None => {
                debug!("event=form_load module=form status=noop user_id={id}");
            }
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.name = self.name.is_empty();
    }

    pub fn set_surname(&mut self, value: impl Into<String>) {
        self.surname = value.into();
        self.errors.surname = self.surname.is_empty();
    }

    pub fn set_birthdate(&mut self, value: NaiveDate) {
        self.birthdate = Some(value);
        self.errors.birthdate = false;
    }

    pub fn set_gender(&mut self, value: Option<Gender>) {
        self.gender = value;
        self.errors.gender = value.is_none();
    }

    /// Validates the form and produces the matching store action.
    ///
    /// # Errors
    /// - `FormError::MissingFields` when any field is empty; the
    ///   "Missing data" notification is raised and the form keeps its values.
    pub fn save(&mut self) -> Result<UserAction, FormError> {
        self.errors = FieldErrors {
            name: self.name.is_empty(),
            surname: self.surname.is_empty(),
            birthdate: self.birthdate.is_none(),
            gender: self.gender.is_none(),
        };

        let (Some(birthdate), Some(gender), false) =
            (self.birthdate, self.gender, self.errors.any())
        else {
            let missing = FormField::ALL
                .into_iter()
                .filter(|field| self.errors.get(*field))
                .collect::<Vec<_>>();
            debug!(
                "event=form_save module=form status=error missing={}",
                missing.len()
            );
            self.notification = Some(Notification::missing_data());
            return Err(FormError::MissingFields(missing));
        };

        let name = std::mem::take(&mut self.name);
        let surname = std::mem::take(&mut self.surname);
        let action = match self.editing {
            Some(id) => UserAction::Update(User::new(id, name, surname, birthdate, gender)),
            None => UserAction::Add(UserDraft::new(name, surname, birthdate, gender)),
        };
        self.reset();
        Ok(action)
    }

    /// Produces a delete action for the edited record and resets the form.
    ///
    /// Returns `None` in add mode.
    pub fn delete(&mut self) -> Option<UserAction> {
        let id = self.editing?;
        self.reset();
        Some(UserAction::Delete(id))
    }

    /// Clears fields, errors and the editing target.
    ///
    /// A pending notification stays until dismissed.
    pub fn reset(&mut self) {
        self.name.clear();
        self.surname.clear();
        self.birthdate = None;
        self.gender = None;
        self.editing = None;
        self.errors = FieldErrors::default();
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
