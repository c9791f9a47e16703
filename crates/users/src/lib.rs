//! Users domain module.
//!
//! This crate contains the user record and the rules for creating and
//! patching it, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod user;

pub use user::{NewUser, User, UserPatch, REQUIRED_FIELDS_MESSAGE};
