use chrono::NaiveDate;
use usermgmt_core::{
    FormError, FormField, Gender, Severity, User, UserAction, UserForm, UserId, UserStore,
    MISSING_DATA_MESSAGE, NOTIFICATION_AUTO_HIDE,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn filled_form() -> UserForm {
    let mut form = UserForm::new();
    form.set_name("Amy");
    form.set_surname("Lee");
    form.set_birthdate(date(2000, 1, 1));
    form.set_gender(Some(Gender::Female));
    form
}

#[test]
fn new_form_is_empty_add_mode() {
    let form = UserForm::new();

    assert_eq!(form.title(), "Add New User");
    assert!(!form.is_any_field_filled());
    assert!(!form.can_delete());
    assert!(!form.errors().any());
    assert!(form.notification().is_none());
}

#[test]
fn save_with_missing_fields_flags_errors_and_notifies() {
    let mut form = UserForm::new();
    form.set_name("Amy");

    let err = form.save().unwrap_err();

    assert_eq!(
        err,
        FormError::MissingFields(vec![
            FormField::Surname,
            FormField::Birthdate,
            FormField::Gender
        ])
    );
    let errors = form.errors();
    assert!(!errors.name);
    assert!(errors.surname && errors.birthdate && errors.gender);
    let notification = form.notification().expect("notification raised");
    assert_eq!(notification.message, MISSING_DATA_MESSAGE);
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.auto_hide, NOTIFICATION_AUTO_HIDE);
    assert_eq!(form.name(), "Amy");

    form.dismiss_notification();
    assert!(form.notification().is_none());
}

#[test]
fn clearing_a_text_field_flags_it_immediately() {
    let mut form = UserForm::new();
    form.set_surname("Lee");
    assert!(!form.errors().surname);

    form.set_surname("");
    assert!(form.errors().surname);

    form.set_gender(None);
    assert!(form.errors().gender);
    form.set_gender(Some(Gender::Male));
    assert!(!form.errors().gender);
}

#[test]
fn save_in_add_mode_yields_add_and_resets() {
    let mut form = filled_form();

    let action = form.save().unwrap();

    let UserAction::Add(draft) = action else {
        panic!("expected add action");
    };
    assert_eq!(draft.id, None);
    assert_eq!(draft.name, "Amy");
    assert_eq!(draft.birthdate, date(2000, 1, 1));
    assert!(!form.is_any_field_filled());
}

#[test]
fn load_selection_then_save_yields_update() {
    let store = UserStore::seeded();
    let mut form = UserForm::new();

    form.load(Some(UserId(1)), store.users());
    assert_eq!(form.title(), "Edit User");
    assert_eq!(form.name(), "John");
    assert_eq!(form.birthdate(), Some(date(1966, 1, 1)));
    assert!(form.can_delete());

    form.set_name("Jon");
    let action = form.save().unwrap();

    assert_eq!(
        action,
        UserAction::Update(User::new(
            UserId(1),
            "Jon",
            "Doe",
            date(1966, 1, 1),
            Gender::Male
        ))
    );
    assert_eq!(form.editing(), None);
}

#[test]
fn load_of_unknown_selection_leaves_form_untouched() {
    let store = UserStore::seeded();
    let mut form = filled_form();
    let before = form.clone();

    form.load(Some(UserId(42)), store.users());

    assert_eq!(form, before);
}

#[test]
fn load_none_resets_form() {
    let store = UserStore::seeded();
    let mut form = UserForm::new();
    form.load(Some(UserId(2)), store.users());

    form.load(None, store.users());

    assert_eq!(form.editing(), None);
    assert!(!form.is_any_field_filled());
}

#[test]
fn delete_only_in_edit_mode() {
    let store = UserStore::seeded();
    let mut form = filled_form();
    assert_eq!(form.delete(), None);
    assert!(form.is_any_field_filled());

    form.load(Some(UserId(2)), store.users());
    assert_eq!(form.delete(), Some(UserAction::Delete(UserId(2))));
    assert!(!form.is_any_field_filled());
    assert!(!form.can_delete());
}

#[test]
fn form_actions_drive_store_scenario() {
    let mut store = UserStore::seeded();
    let mut form = filled_form();

    store.dispatch(form.save().unwrap());
    assert_eq!(store.len(), 3);

    form.load(Some(UserId(1)), store.users());
    form.set_name("Jon");
    store.dispatch(form.save().unwrap());
    assert_eq!(store.get(UserId(1)).unwrap().name, "Jon");

    form.load(Some(UserId(2)), store.users());
    store.dispatch(form.delete().unwrap());
    assert_eq!(store.len(), 2);
    assert!(store.get(UserId(2)).is_none());
}
