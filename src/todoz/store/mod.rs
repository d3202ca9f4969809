//! # Storage Layer
//!
//! This module defines the storage abstraction for todoz. The [`DataStore`] trait
//! is what the command layer talks to; it never sees the indices directly.
//!
//! ## Indices
//!
//! [`memory::InMemoryStore`] is built from three indices, each the source of
//! truth for one relation:
//!
//! - [`email_index::EmailIndex`]: user id <-> email, both directions unique.
//!   Resolves logins and guards registration against duplicate emails.
//! - [`user_index::UserIndex`]: user id -> full `User` record.
//! - [`todo_index::TodoIndex`]: user id -> ordered list of that user's todos.
//!
//! The indices are dumb containers. Cross-index invariants (an email is bound
//! only when the user record exists, a todo is filed under exactly one user)
//! are enforced by the store methods that write them together.
//!
//! ## Ownership
//!
//! Reads hand out clones. Nothing outside the store holds a reference into
//! its collections, so every mutation goes through one of the methods below.

use crate::error::Result;
use crate::model::{Todo, User};
use uuid::Uuid;

pub mod email_index;
pub mod memory;
pub mod todo_index;
pub mod user_index;

/// Abstract interface for user and todo storage.
pub trait DataStore {
    /// Whether `email` is already bound to some user (exact match).
    fn email_registered(&self, email: &str) -> bool;

    /// Resolve a user id from an email.
    fn find_user_id_by_email(&self, email: &str) -> Option<Uuid>;

    /// Store a new user in the email and user indices together.
    fn insert_user(&mut self, user: &User) -> Result<()>;

    /// Get a user by ID
    fn get_user(&self, id: &Uuid) -> Result<User>;

    /// Replace an existing user record
    fn save_user(&mut self, user: &User) -> Result<()>;

    /// Append a todo to the user's list
    fn add_todo(&mut self, user_id: &Uuid, todo: &Todo) -> Result<()>;

    /// All todos of a user in insertion order (empty when none)
    fn list_todos(&self, user_id: &Uuid) -> Vec<Todo>;

    /// Get one todo from the user's list
    fn get_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> Result<Todo>;

    /// Replace a todo in place, keeping its position in the list
    fn save_todo(&mut self, user_id: &Uuid, todo: &Todo) -> Result<()>;

    /// Remove a todo from the user's list
    fn delete_todo(&mut self, user_id: &Uuid, todo_id: &Uuid) -> Result<()>;
}
