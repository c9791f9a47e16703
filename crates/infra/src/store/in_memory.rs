use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use userdesk_core::{Entity, UserId};
use userdesk_users::{NewUser, User, UserPatch};

use super::UserStore;

/// Records every fresh process starts with.
pub fn default_seed() -> Vec<NewUser> {
    [
        ("Alice", "alice@example.com"),
        ("Bob", "bob@example.com"),
        ("Charlie", "charlie@example.com"),
    ]
    .into_iter()
    .filter_map(|(name, email)| NewUser::new(name, email).ok())
    .collect()
}

#[derive(Debug)]
struct Inner {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// In-memory user store.
///
/// One mutex covers both the map and the id counter, so every operation is a
/// single critical section. `BTreeMap` keeps `list()` ordered by id.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: Mutex<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: BTreeMap::new(),
                next_id: UserId::FIRST,
            }),
        }
    }

    /// Store pre-populated with `seed`, ids assigned from 1 in order.
    pub fn with_seed(seed: impl IntoIterator<Item = NewUser>) -> Self {
        let store = Self::new();
        for new in seed {
            store.create(new);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // No operation can panic while holding the guard, so a poisoned lock
    // still guards a consistent map.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> Vec<User> {
        self.lock().users.values().cloned().collect()
    }

    fn get(&self, id: UserId) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    fn create(&self, new: NewUser) -> User {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id = id.next();

        let user = User::from_new(id, new);
        inner.users.insert(user.id(), user.clone());
        tracing::debug!(user_id = %id, "user created");
        user
    }

    fn update(&self, id: UserId, patch: UserPatch) -> Option<User> {
        let mut inner = self.lock();
        let user = inner.users.get_mut(&id)?;
        user.apply(patch);
        tracing::debug!(user_id = %id, "user updated");
        Some(user.clone())
    }

    fn delete(&self, id: UserId) -> bool {
        let removed = self.lock().users.remove(&id).is_some();
        if removed {
            tracing::debug!(user_id = %id, "user deleted");
        }
        removed
    }
}
