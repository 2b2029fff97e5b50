//! Terminal user-management session.
//!
//! # Responsibility
//! - Own the store, the form, and the current selection.
//! - Apply parsed commands and render plain-text responses.
//!
//! # Invariants
//! - The store is mutated only through `UserStore::dispatch`.
//! - Selection lives here; the store never sees it.

use crate::commands::{Command, HELP};
use usermgmt_core::{ActionOutcome, FormError, UserForm, UserId, UserStore};

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Session {
    store: UserStore,
    form: UserForm,
    selected: Option<UserId>,
}

impl Session {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            form: UserForm::new(),
            selected: None,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn selected(&self) -> Option<UserId> {
        self.selected
    }

    pub fn apply(&mut self, command: Command) -> Step {
        let output = match command {
            Command::Quit => return Step::Quit,
            Command::Help => HELP.to_string(),
            Command::List => self.render_list(),
            Command::Show => match serde_json::to_string_pretty(self.store.users()) {
                Ok(json) => json,
                Err(err) => format!("failed to serialize users: {err}"),
            },
            Command::Form => self.render_form(),
            Command::Select(id) => {
                if self.store.get(id).is_none() {
                    format!("no user with id {id}")
                } else {
                    self.select(Some(id));
                    self.render_form()
                }
            }
            Command::New | Command::Cancel => {
                self.select(None);
                self.render_form()
            }
            Command::Name(value) => {
                self.form.set_name(value);
                self.render_form()
            }
            Command::Surname(value) => {
                self.form.set_surname(value);
                self.render_form()
            }
            Command::Birthdate(value) => {
                self.form.set_birthdate(value);
                self.render_form()
            }
            Command::Gender(value) => {
                self.form.set_gender(value);
                self.render_form()
            }
            Command::Save => self.save(),
            Command::Delete => self.delete(),
        };
        Step::Continue(output)
    }

    fn select(&mut self, id: Option<UserId>) {
        self.selected = id;
        self.form.load(id, self.store.users());
    }

    fn save(&mut self) -> String {
        if !self.form.is_any_field_filled() {
            return "nothing to save".to_string();
        }
        match self.form.save() {
            Ok(action) => {
                let outcome = self.store.dispatch(action);
                self.select(None);
                describe(outcome)
            }
            Err(err @ FormError::MissingFields(_)) => {
                // Shown once, like a toast that hides itself.
                self.form.dismiss_notification();
                format!("{err}\n{}", self.render_form())
            }
        }
    }

    fn delete(&mut self) -> String {
        match self.form.delete() {
            Some(action) => {
                let outcome = self.store.dispatch(action);
                self.select(None);
                describe(outcome)
            }
            None => "no user selected".to_string(),
        }
    }

    fn render_list(&self) -> String {
        if self.store.is_empty() {
            return "(no users)".to_string();
        }
        self.store
            .users()
            .iter()
            .map(|user| {
                let marker = if self.selected() == Some(user.id) { '>' } else { ' ' };
                format!("{marker} [{}] {}", user.id, user.display_name())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_form(&self) -> String {
        let form = self.form();
        let errors = form.errors();
        let flag = |missing: bool| if missing { "  <- required" } else { "" };
        let birthdate = form
            .birthdate()
            .map(|date| date.to_string())
            .unwrap_or_default();
        let gender = form.gender().map(|g| g.as_str()).unwrap_or("");

        let mut lines = vec![
            format!("== {} ==", form.title()),
            format!("name:      {}{}", form.name(), flag(errors.name)),
            format!("surname:   {}{}", form.surname(), flag(errors.surname)),
            format!("birthdate: {}{}", birthdate, flag(errors.birthdate)),
            format!("gender:    {}{}", gender, flag(errors.gender)),
        ];

        let mut actions = Vec::new();
        if form.is_any_field_filled() {
            actions.push("save");
            actions.push("cancel");
        }
        if form.can_delete() {
            actions.push("delete");
        }
        if !actions.is_empty() {
            lines.push(format!("actions:   {}", actions.join(" | ")));
        }
        lines.join("\n")
    }
}

fn describe(outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Added(id) => format!("added user {id}"),
        ActionOutcome::Updated(id) => format!("updated user {id}"),
        ActionOutcome::Deleted(id) => format!("deleted user {id}"),
        ActionOutcome::Ignored(id) => format!("user {id} no longer exists"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, Step};
    use crate::commands::Command;
    use usermgmt_core::{UserId, UserStore};

    fn run(session: &mut Session, line: &str) -> String {
        match session.apply(Command::parse(line).expect("valid command")) {
            Step::Continue(output) => output,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn list_renders_seed_users() {
        let mut session = Session::new(UserStore::seeded());
        let output = run(&mut session, "list");
        assert!(output.contains("[1] John Doe"));
        assert!(output.contains("[2] Jane Dooooooooo"));
    }

    #[test]
    fn add_edit_delete_flow() {
        let mut session = Session::new(UserStore::seeded());

        run(&mut session, "name Amy");
        run(&mut session, "surname Lee");
        run(&mut session, "birthdate 2000-01-01");
        run(&mut session, "gender female");
        let output = run(&mut session, "save");
        assert!(output.starts_with("added user"));
        assert_eq!(session.store().len(), 3);

        run(&mut session, "select 1");
        assert_eq!(session.selected(), Some(UserId(1)));
        assert_eq!(session.form().name(), "John");
        run(&mut session, "name Jon");
        assert_eq!(run(&mut session, "save"), "updated user 1");
        assert_eq!(session.store().get(UserId(1)).unwrap().name, "Jon");
        assert_eq!(session.selected(), None);

        run(&mut session, "select 2");
        assert_eq!(run(&mut session, "delete"), "deleted user 2");
        assert_eq!(session.store().len(), 2);
        assert_eq!(run(&mut session, "delete"), "no user selected");
    }

    #[test]
    fn incomplete_save_reports_missing_data() {
        let mut session = Session::new(UserStore::seeded());
        run(&mut session, "name Amy");

        let output = run(&mut session, "save");

        assert!(output.starts_with("Missing data: surname, birthdate, gender"));
        assert!(output.contains("<- required"));
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.form().name(), "Amy");
    }

    #[test]
    fn list_marks_selected_user() {
        let mut session = Session::new(UserStore::seeded());
        run(&mut session, "select 2");

        let output = run(&mut session, "list");

        assert_eq!(output, "  [1] John Doe\n> [2] Jane Dooooooooo");
    }

    #[test]
    fn select_unknown_id_keeps_selection() {
        let mut session = Session::new(UserStore::seeded());
        assert_eq!(run(&mut session, "select 9"), "no user with id 9");
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn show_prints_json_snapshot() {
        let mut session = Session::new(UserStore::empty());
        assert_eq!(run(&mut session, "show"), "[]");
        assert_eq!(session.apply(Command::Quit), Step::Quit);
    }
}
