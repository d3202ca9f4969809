//! Thread-safe handle over a [`TodozApi`].
//!
//! Every operation resolves entities and then mutates them, and that pair is
//! only atomic if nothing else touches the indices in between. The handle
//! therefore serializes all operations, reads included, behind one mutex that
//! covers all three indices.

use crate::api::{TodoFilter, TodozApi};
use crate::model::TodoPatch;
use crate::outcome::Outcome;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;
use uuid::Uuid;

pub struct SharedTodozApi<S: DataStore> {
    inner: Arc<Mutex<TodozApi<S>>>,
}

impl<S: DataStore> Clone for SharedTodozApi<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedTodozApi<InMemoryStore> {
    pub fn in_memory() -> Self {
        Self::new(TodozApi::in_memory())
    }
}

impl<S: DataStore> SharedTodozApi<S> {
    pub fn new(api: TodozApi<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(api)),
        }
    }

    // Operations validate before they mutate, so a panic in another holder
    // cannot have left the indices half-written.
    fn lock(&self) -> MutexGuard<'_, TodozApi<S>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned store lock");
            poisoned.into_inner()
        })
    }

    pub fn register_user(&self, email: &str, password: &str) -> Outcome {
        self.lock().register_user(email, password)
    }

    pub fn login_user(&self, email: &str, password: &str) -> Outcome {
        self.lock().login_user(email, password)
    }

    pub fn update_password(&self, user_id: &Uuid, old_password: &str, new_password: &str) -> Outcome {
        self.lock()
            .update_password(user_id, old_password, new_password)
    }

    pub fn add_todo(&self, user_id: &Uuid, title: &str, details: Option<&str>) -> Outcome {
        self.lock().add_todo(user_id, title, details)
    }

    pub fn update_todo(&self, user_id: &Uuid, todo_id: &Uuid, patch: &TodoPatch) -> Outcome {
        self.lock().update_todo(user_id, todo_id, patch)
    }

    pub fn delete_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> Outcome {
        self.lock().delete_todo(user_id, todo_id)
    }

    pub fn list_todos(&self, user_id: &Uuid, filter: TodoFilter) -> Outcome {
        self.lock().list_todos(user_id, filter)
    }

    pub fn get_all_todos(&self, user_id: &Uuid) -> Outcome {
        self.lock().get_all_todos(user_id)
    }

    pub fn get_active_todos(&self, user_id: &Uuid) -> Outcome {
        self.lock().get_active_todos(user_id)
    }

    pub fn get_completed_todos(&self, user_id: &Uuid) -> Outcome {
        self.lock().get_completed_todos(user_id)
    }

    pub fn search_todos(&self, user_id: &Uuid, query: &str) -> Outcome {
        self.lock().search_todos(user_id, query)
    }

    /// Run several operations under a single acquisition of the lock.
    pub fn with_api<R>(&self, f: impl FnOnce(&mut TodozApi<S>) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let api = SharedTodozApi::in_memory();
        let other = api.clone();
        let user = api
            .register_user("alice@example.com", "password123")
            .user_id()
            .unwrap();

        assert_eq!(
            other.login_user("alice@example.com", "password123").user_id(),
            Some(user)
        );
    }

    #[test]
    fn with_api_groups_operations() {
        let api = SharedTodozApi::in_memory();
        let count = api.with_api(|api| {
            let user = api
                .register_user("alice@example.com", "password123")
                .user_id()
                .unwrap();
            api.add_todo(&user, "One", None);
            api.add_todo(&user, "Two", None);
            api.get_all_todos(&user).todos().len()
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn survives_a_poisoned_lock() {
        let api = SharedTodozApi::in_memory();
        let poisoner = api.clone();
        let _ = thread::spawn(move || {
            poisoner.with_api(|_| panic!("boom"));
        })
        .join();

        assert!(api
            .register_user("alice@example.com", "password123")
            .is_success());
    }
}
