use std::collections::HashMap;
use uuid::Uuid;

/// Bidirectional user id <-> email map.
///
/// Both directions are written by the same call, so they can never disagree.
/// The index does not police uniqueness itself: callers check
/// [`EmailIndex::contains_email`] before calling [`EmailIndex::put`].
#[derive(Debug, Default)]
pub struct EmailIndex {
    by_id: HashMap<Uuid, String>,
    by_email: HashMap<String, Uuid>,
}

impl EmailIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, id: Uuid, email: String) {
        if let Some(previous) = self.by_id.insert(id, email.clone()) {
            self.by_email.remove(&previous);
        }
        if let Some(previous_id) = self.by_email.insert(email, id) {
            if previous_id != id {
                self.by_id.remove(&previous_id);
            }
        }
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.by_email.contains_key(email)
    }

    pub fn id_by_email(&self, email: &str) -> Option<Uuid> {
        self.by_email.get(email).copied()
    }

    pub fn email_by_id(&self, id: &Uuid) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }
}
