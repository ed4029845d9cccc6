//! Core types and the in-memory user roster.
//!
//! This crate has no notion of a front-end. A [`Roster`] owns an ordered set
//! of [`User`] records, enforces the uniqueness of their normalized emails,
//! and round-trips the whole set through a JSON array file.

pub mod email;
pub mod error;
pub mod json;
pub mod password;
pub mod roster;
pub mod user;

pub use email::Email;
pub use error::{Error, Invalid, Result};
pub use password::{CharClass, PasswordPolicy};
pub use roster::Roster;
pub use user::{User, UserFilter};
