//! User record storage abstractions.

pub mod in_memory;

use std::sync::Arc;

use userdesk_core::UserId;
use userdesk_users::{NewUser, User, UserPatch};

pub use in_memory::{default_seed, InMemoryUserStore};

/// Sole owner of user records and id assignment.
///
/// Implementations must serialize every operation against every other one:
/// no caller may observe a half-applied mutation, and id assignment is atomic
/// with insertion.
pub trait UserStore: Send + Sync {
    /// All users, ascending by id.
    fn list(&self) -> Vec<User>;
    fn get(&self, id: UserId) -> Option<User>;
    /// Assign the next id and insert. Never fails for validated input.
    fn create(&self, new: NewUser) -> User;
    /// Apply `patch` to an existing record; `None` if `id` is absent.
    fn update(&self, id: UserId, patch: UserPatch) -> Option<User>;
    /// Remove a record; `false` if `id` is absent.
    fn delete(&self, id: UserId) -> bool;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn list(&self) -> Vec<User> {
        (**self).list()
    }

    fn get(&self, id: UserId) -> Option<User> {
        (**self).get(id)
    }

    fn create(&self, new: NewUser) -> User {
        (**self).create(new)
    }

    fn update(&self, id: UserId, patch: UserPatch) -> Option<User> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: UserId) -> bool {
        (**self).delete(id)
    }
}
