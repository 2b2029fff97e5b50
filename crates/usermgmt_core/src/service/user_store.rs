//! User store service.
//!
//! # Responsibility
//! - Hold the authoritative in-memory user sequence for one process.
//! - Funnel every mutation through `add`, `update` and `delete`.
//!
//! # Invariants
//! - Operations are synchronous and total; they apply in call order.
//! - `update` keeps the record position; `delete` keeps relative order.
//! - Log events carry ids and counts only, never personal fields.

use crate::model::user::{seed_users, User, UserDraft, UserId};
use crate::repo::user_repo::{InMemoryUserRepository, UserRepository};
use log::{debug, info};

/// Mutation request routed through [`UserStore::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Add(UserDraft),
    Update(User),
    Delete(UserId),
}

/// What a dispatched action did to the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Added(UserId),
    Updated(UserId),
    Deleted(UserId),
    /// Update or delete targeted an id that is not stored.
    Ignored(UserId),
}

/// Single source of truth for user records.
pub struct UserStore<R: UserRepository = InMemoryUserRepository> {
    repo: R,
}

impl UserStore<InMemoryUserRepository> {
    /// Creates a store holding the two startup records.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::with_users(Vec::new())
    }

    /// Creates a store from caller-provided records.
    pub fn with_users(users: Vec<User>) -> Self {
        Self::new(InMemoryUserRepository::with_users(users))
    }
}

impl<R: UserRepository> UserStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        debug!(
            "event=store_init module=store status=ok count={}",
            repo.list_users().len()
        );
        Self { repo }
    }

    /// Read-only snapshot of the sequence in store order.
    pub fn users(&self) -> &[User] {
        self.repo.list_users()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.repo.get_user(id)
    }

    pub fn len(&self) -> usize {
        self.users().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users().is_empty()
    }

    /// Appends a new record with a freshly generated id.
    ///
    /// # Contract
    /// - `draft.id` is ignored.
    /// - Length grows by exactly one.
    pub fn add(&mut self, draft: UserDraft) -> UserId {
        let id = self.repo.insert_user(draft);
        info!(
            "event=user_add module=store status=ok user_id={} count={}",
            id,
            self.len()
        );
        id
    }

    /// Replaces the record whose id matches `user.id`.
    ///
    /// Returns `false` and leaves the sequence untouched when no record matches.
    pub fn update(&mut self, user: User) -> bool {
        let id = user.id;
        let replaced = self.repo.replace_user(user);
        if replaced {
            info!("event=user_update module=store status=ok user_id={id}");
        } else {
            debug!("event=user_update module=store status=noop user_id={id}");
        }
        replaced
    }

    /// Removes the record with `id`.
    ///
    /// Returns `false` when no record matches; deleting twice is safe.
    pub fn delete(&mut self, id: UserId) -> bool {
        let removed = self.repo.remove_user(id);
        if removed {
            info!(
                "event=user_delete module=store status=ok user_id={} count={}",
                id,
                self.len()
            );
        } else {
            debug!("event=user_delete module=store status=noop user_id={id}");
        }
        removed
    }

    /// Applies one action via the direct mutation methods.
    pub fn dispatch(&mut self, action: UserAction) -> ActionOutcome {
        match action {
            UserAction::Add(draft) => ActionOutcome::Added(self.add(draft)),
            UserAction::Update(user) => {
                let id = user.id;
                if self.update(user) {
                    ActionOutcome::Updated(id)
                } else {
                    ActionOutcome::Ignored(id)
                }
            }
            UserAction::Delete(id) => {
                if self.delete(id) {
                    ActionOutcome::Deleted(id)
                } else {
                    ActionOutcome::Ignored(id)
                }
            }
        }
    }
}

impl Default for UserStore<InMemoryUserRepository> {
    fn default() -> Self {
        Self::seeded()
    }
}
