//! User repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable list/insert/replace/remove APIs over the user sequence.
//! - Own identifier assignment for newly inserted records.
//!
//! # Invariants
//! - Stored ids are unique; `insert_user` never assigns an id already stored.
//! - `insert_user` terminates for any `IdGenerator`, even one that repeats.
//! - Sequence order is insertion order; replacement keeps position.
//! - Every mutation is total: misses are reported as `false`, never as errors.

use crate::model::user::{User, UserDraft, UserId};

/// Source of fresh user identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> UserId;
}

/// Monotonic counter starting after a given floor.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    last: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `floor + 1`, or `1` past `u64::MAX`.
    pub fn after(floor: u64) -> Self {
        Self { last: floor }
    }

    /// Creates a generator that will not collide with any id in `users`.
    pub fn after_users(users: &[User]) -> Self {
        Self::after(users.iter().map(|user| user.id.0).max().unwrap_or(0))
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::after(0)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> UserId {
        // Wraps past `u64::MAX` back to 1; `insert_user` skips ids still in use.
        self.last = self.last.checked_add(1).unwrap_or(1);
        UserId(self.last)
    }
}

/// Repository interface for the user sequence.
pub trait UserRepository {
    fn list_users(&self) -> &[User];
    fn get_user(&self, id: UserId) -> Option<&User>;
    /// Appends the draft under a fresh id and returns that id.
    fn insert_user(&mut self, draft: UserDraft) -> UserId;
    /// Replaces the record with the same id; `false` when none matches.
    fn replace_user(&mut self, user: User) -> bool;
    /// Removes the record with `id`; `false` when none matches.
    fn remove_user(&mut self, id: UserId) -> bool;
}

/// Vec-backed user repository.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository<G: IdGenerator = SequentialIdGenerator> {
    users: Vec<User>,
    ids: G,
}

impl InMemoryUserRepository<SequentialIdGenerator> {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Starts from `users`, keeping only the first record for any repeated id.
    pub fn with_users(users: Vec<User>) -> Self {
        let ids = SequentialIdGenerator::after_users(&users);
        Self::with_generator(users, ids)
    }
}

impl Default for InMemoryUserRepository<SequentialIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InMemoryUserRepository<G> {
    pub fn with_generator(users: Vec<User>, ids: G) -> Self {
        let mut unique: Vec<User> = Vec::with_capacity(users.len());
        for user in users {
            if !unique.iter().any(|existing| existing.id == user.id) {
                unique.push(user);
            }
        }
        Self { users: unique, ids }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    /// Smallest id `>= 1` not held by any stored record.
    fn lowest_free_id(&self) -> UserId {
        let mut taken = self.users.iter().map(|user| user.id.0).collect::<Vec<_>>();
        taken.sort_unstable();
        let mut candidate = 1;
        for id in taken {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        UserId(candidate)
    }
}

impl<G: IdGenerator> UserRepository for InMemoryUserRepository<G> {
    fn list_users(&self) -> &[User] {
        &self.users
    }

    fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn insert_user(&mut self, draft: UserDraft) -> UserId {
        // At most `len` generated ids can collide before a sequential
        // generator reaches a free one; past that, any generator falls back
        // to the lowest free id.
        let mut id = self.ids.next_id();
        let mut collisions = 0;
        while self.position(id).is_some() {
            if collisions >= self.users.len() {
                id = self.lowest_free_id();
                break;
            }
            collisions += 1;
            id = self.ids.next_id();
        }
        self.users.push(draft.into_user(id));
        id
    }

    fn replace_user(&mut self, user: User) -> bool {
        match self.position(user.id) {
            Some(index) => {
                self.users[index] = user;
                true
            }
            None => false,
        }
    }

    fn remove_user(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        self.users.len() != before
    }
}
