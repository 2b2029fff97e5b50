//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record held by the store.
//! - Define the draft shape submitted before an identifier is assigned.
//!
//! # Invariants
//! - A stored `User` always carries a non-null `UserId`.
//! - A `UserDraft` id is advisory only; the store assigns the real one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier for one stored user.
///
/// Serialized as a bare number to match external schema naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Gender choices offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Stable display/wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when gender text is not one of the supported labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(pub String);

impl Display for ParseGenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported gender `{}`; expected male|female", self.0)
    }
}

impl Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ParseGenderError(value.to_string())),
        }
    }
}

/// Canonical user record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    /// Serialized as `YYYY-MM-DD`.
    pub birthdate: NaiveDate,
    pub gender: Gender,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        surname: impl Into<String>,
        birthdate: NaiveDate,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            birthdate,
            gender,
        }
    }

    /// List row label, `"{name} {surname}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Returns a draft carrying the same fields and this record's id.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            id: Some(self.id),
            name: self.name.clone(),
            surname: self.surname.clone(),
            birthdate: self.birthdate,
            gender: self.gender,
        }
    }
}

/// User fields submitted for creation.
///
/// `id` is `None` for a record that has not been stored yet. When present it
/// is ignored by `Add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub name: String,
    pub surname: String,
    pub birthdate: NaiveDate,
    pub gender: Gender,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        birthdate: NaiveDate,
        gender: Gender,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            surname: surname.into(),
            birthdate,
            gender,
        }
    }

    /// Materializes the draft as a stored record under `id`.
    ///
    /// Any id already carried by the draft is discarded.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            surname: self.surname,
            birthdate: self.birthdate,
            gender: self.gender,
        }
    }
}

/// Records present at startup.
///
/// Kept in this exact order; ids `1` and `2`.
pub fn seed_users() -> Vec<User> {
    [
        (1, "John", "Doe", (1966, 1, 1), Gender::Male),
        (2, "Jane", "Dooooooooo", (1999, 1, 1), Gender::Female),
    ]
    .into_iter()
    .filter_map(|(id, name, surname, (y, m, d), gender)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|birthdate| User::new(UserId(id), name, surname, birthdate, gender))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{seed_users, Gender, ParseGenderError, UserId};

    #[test]
    fn seed_users_are_john_and_jane() {
        let seeds = seed_users();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].id, UserId(1));
        assert_eq!(seeds[0].display_name(), "John Doe");
        assert_eq!(seeds[1].id, UserId(2));
        assert_eq!(seeds[1].gender, Gender::Female);
        assert_eq!(seeds[1].birthdate.to_string(), "1999-01-01");
    }

    #[test]
    fn gender_parse_is_case_insensitive() {
        assert_eq!(" FEMALE ".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_parse_error_keeps_input_as_typed() {
        let err = "ROBOT".parse::<Gender>().unwrap_err();
        assert_eq!(err, ParseGenderError("ROBOT".to_string()));
        assert!(err.to_string().contains("`ROBOT`"));
    }
}
