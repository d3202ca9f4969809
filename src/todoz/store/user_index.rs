use crate::model::User;
use std::collections::HashMap;
use uuid::Uuid;

/// Source of truth for user records, keyed by user id.
#[derive(Debug, Default)]
pub struct UserIndex {
    users: HashMap<Uuid, User>,
}

impl UserIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record stored under `id`.
    pub fn put(&mut self, id: Uuid, user: User) {
        self.users.insert(id, user);
    }

    pub fn get(&self, id: &Uuid) -> Option<&User> {
        self.users.get(id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.users.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_existing_record() {
        let mut index = UserIndex::new();
        let mut user = User::new("a@example.com".into(), "first-pass".into());
        let id = user.id;
        index.put(id, user.clone());

        user.password = "second-pass".into();
        index.put(id, user);

        assert_eq!(index.count(), 1);
        assert_eq!(index.get(&id).unwrap().password, "second-pass");
    }

    #[test]
    fn missing_user_is_absent() {
        let index = UserIndex::new();
        assert!(index.get(&Uuid::new_v4()).is_none());
        assert_eq!(index.count(), 0);
    }
}
