use crate::model::Todo;
use std::collections::HashMap;
use uuid::Uuid;

/// One-to-many map from user id to that user's todos, in insertion order.
///
/// Alongside the per-user lists it keeps a todo id -> owner map, so a todo id
/// filed under one user can never show up under another.
#[derive(Debug, Default)]
pub struct TodoIndex {
    by_user: HashMap<Uuid, Vec<Todo>>,
    owners: HashMap<Uuid, Uuid>,
}

impl TodoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `todo` to the user's list, creating the list on first insert.
    ///
    /// Returns `false` (and stores nothing) when the todo id is already filed.
    pub fn put(&mut self, user_id: Uuid, todo: Todo) -> bool {
        if self.owners.contains_key(&todo.id) {
            return false;
        }
        self.owners.insert(todo.id, user_id);
        self.by_user.entry(user_id).or_default().push(todo);
        true
    }

    /// The user's todos, empty when the user never added any.
    pub fn get(&self, user_id: &Uuid) -> &[Todo] {
        self.by_user
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find(&self, user_id: &Uuid, todo_id: &Uuid) -> Option<&Todo> {
        self.get(user_id).iter().find(|t| t.id == *todo_id)
    }

    pub fn find_mut(&mut self, user_id: &Uuid, todo_id: &Uuid) -> Option<&mut Todo> {
        self.by_user
            .get_mut(user_id)?
            .iter_mut()
            .find(|t| t.id == *todo_id)
    }

    /// Remove the first todo of `user_id` matching `predicate`.
    pub fn remove_where<F>(&mut self, user_id: &Uuid, predicate: F) -> bool
    where
        F: Fn(&Todo) -> bool,
    {
        let Some(todos) = self.by_user.get_mut(user_id) else {
            return false;
        };
        match todos.iter().position(predicate) {
            Some(pos) => {
                let removed = todos.remove(pos);
                self.owners.remove(&removed.id);
                true
            }
            None => false,
        }
    }

    /// Total number of todos across all users.
    pub fn count(&self) -> usize {
        self.owners.len()
    }
}
