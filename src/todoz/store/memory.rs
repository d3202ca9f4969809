use super::email_index::EmailIndex;
use super::todo_index::TodoIndex;
use super::user_index::UserIndex;
use super::DataStore;
use crate::error::{Result, TodozError};
use crate::model::{Todo, User};
use uuid::Uuid;

/// In-memory storage. State lives as long as the store value does.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    emails: EmailIndex,
    users: UserIndex,
    todos: TodoIndex,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.count()
    }

    pub fn todo_count(&self) -> usize {
        self.todos.count()
    }
}

impl DataStore for InMemoryStore {
    fn email_registered(&self, email: &str) -> bool {
        self.emails.contains_email(email)
    }

    fn find_user_id_by_email(&self, email: &str) -> Option<Uuid> {
        self.emails.id_by_email(email)
    }

    fn insert_user(&mut self, user: &User) -> Result<()> {
        if self.emails.contains_email(&user.email) {
            return Err(TodozError::DuplicateEmail(user.email.clone()));
        }
        if self.users.contains(&user.id) {
            return Err(TodozError::Store(format!(
                "User id '{}' is already in use",
                user.id
            )));
        }
        self.users.put(user.id, user.clone());
        self.emails.put(user.id, user.email.clone());
        Ok(())
    }

    fn get_user(&self, id: &Uuid) -> Result<User> {
        self.users
            .get(id)
            .cloned()
            .ok_or(TodozError::UserNotFound(*id))
    }

    fn save_user(&mut self, user: &User) -> Result<()> {
        match self.emails.email_by_id(&user.id) {
            None => return Err(TodozError::UserNotFound(user.id)),
            Some(email) if email != user.email => {
                return Err(TodozError::Store(
                    "Changing a user's email is not supported".to_string(),
                ))
            }
            Some(_) => {}
        }
        self.users.put(user.id, user.clone());
        Ok(())
    }

    fn add_todo(&mut self, user_id: &Uuid, todo: &Todo) -> Result<()> {
        if !self.users.contains(user_id) {
            return Err(TodozError::UserNotFound(*user_id));
        }
        if !self.todos.put(*user_id, todo.clone()) {
            return Err(TodozError::Store(format!(
                "Todo id '{}' is already in use",
                todo.id
            )));
        }
        Ok(())
    }

    fn list_todos(&self, user_id: &Uuid) -> Vec<Todo> {
        self.todos.get(user_id).to_vec()
    }

    fn get_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> Result<Todo> {
        self.todos
            .find(user_id, todo_id)
            .cloned()
            .ok_or(TodozError::TodoNotFound(*todo_id))
    }

    fn save_todo(&mut self, user_id: &Uuid, todo: &Todo) -> Result<()> {
        let stored = self
            .todos
            .find_mut(user_id, &todo.id)
            .ok_or(TodozError::TodoNotFound(todo.id))?;
        if stored.created_at != todo.created_at {
            return Err(TodozError::Store(
                "Todo creation time is immutable".to_string(),
            ));
        }
        *stored = todo.clone();
        Ok(())
    }

    fn delete_todo(&mut self, user_id: &Uuid, todo_id: &Uuid) -> Result<()> {
        if self.todos.remove_where(user_id, |t| t.id == *todo_id) {
            Ok(())
        } else {
            Err(TodozError::TodoNotFoundForUser(*todo_id))
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::TodoStatus;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub users: Vec<User>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                users: Vec::new(),
            }
        }

        pub fn with_user(mut self, email: &str, password: &str) -> Self {
            let user = User::new(email.to_string(), password.to_string());
            self.store.insert_user(&user).unwrap();
            self.users.push(user);
            self
        }

        /// Adds `count` active todos to the most recently added user.
        pub fn with_todos(mut self, count: usize) -> Self {
            let owner = self.last_user_id();
            for i in 0..count {
                let todo = Todo::new(
                    format!("Test Todo {}", i + 1),
                    Some(format!("Details for todo {}", i + 1)),
                );
                self.store.add_todo(&owner, &todo).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, title: &str, details: Option<&str>) -> Self {
            let owner = self.last_user_id();
            let todo = Todo::new(title.to_string(), details.map(str::to_string));
            self.store.add_todo(&owner, &todo).unwrap();
            self
        }

        pub fn with_completed_todo(mut self, title: &str) -> Self {
            let owner = self.last_user_id();
            let mut todo = Todo::new(title.to_string(), None);
            todo.status = TodoStatus::Completed;
            self.store.add_todo(&owner, &todo).unwrap();
            self
        }

        pub fn user_id(&self, n: usize) -> Uuid {
            self.users[n].id
        }

        fn last_user_id(&self) -> Uuid {
            self.users
                .last()
                .map(|u| u.id)
                .expect("fixture needs a user before todos")
        }
    }
}
