//! Infrastructure layer: user record storage.

pub mod store;

pub use store::{default_seed, InMemoryUserStore, UserStore};
