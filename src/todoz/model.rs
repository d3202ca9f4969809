use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Format used whenever a creation timestamp is rendered as text (search, tables).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A registered account.
///
/// The password is kept as plaintext and compared with exact string equality.
/// There is no hashing anywhere in this crate.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password,
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

// Keep passwords out of logs and panic messages.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    #[default]
    #[serde(alias = "active", alias = "Active")]
    Active,
    #[serde(alias = "completed", alias = "Completed")]
    Completed,
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoStatus::Active => write!(f, "ACTIVE"),
            TodoStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(TodoStatus::Active),
            "completed" => Ok(TodoStatus::Completed),
            other => Err(format!("Unknown todo status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub details: Option<String>,
    pub status: TodoStatus,
    pub created_at: NaiveDateTime,
}

impl Todo {
    pub fn new(title: String, details: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            details,
            status: TodoStatus::Active,
            created_at: Local::now().naive_local(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TodoStatus::Active
    }

    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }

    /// ISO-8601 local date-time, as matched by search.
    pub fn created_at_text(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Substring match over title, details and creation time. Title and
    /// details compare case-insensitively; the timestamp text is compared as
    /// rendered, so its `T` separator never matches. `needle` must already be
    /// lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .details
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self.created_at_text().contains(needle)
    }
}

/// A partial update: `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub details: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(mut self, status: TodoStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.details.is_none() && self.status.is_none()
    }

    pub fn apply(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(details) = &self.details {
            todo.details = Some(details.clone());
        }
        if let Some(status) = self.status {
            todo.status = status;
        }
    }
}
