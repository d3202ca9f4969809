//! # Outcome
//!
//! Every facade operation returns an [`Outcome`]: either the command's
//! [`CmdResult`] or a [`Failure`] carrying an [`ErrorKind`] and a
//! human-readable message. Errors never cross the facade as `Err`.
//!
//! `Outcome` serializes to the response envelope consumed by formatters:
//!
//! ```text
//! {"status": "success", "message": "...", "userId": "..."}      register, login
//! {"status": "success", "message": "...", "todo": {...}}        add
//! {"status": "success", "message": "...", "updatedTodo": {...}} update
//! {"status": "success", "todos": [...]}                         list, filter, search
//! {"status": "success", "message": "..."}                       password, delete
//! {"status": "error", "message": "..."}                         any failure
//! ```

use crate::commands::{CmdResult, Payload};
use crate::error::{ErrorKind, Result, TodozError};
use crate::model::Todo;
use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<TodozError> for Failure {
    fn from(err: TodozError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(CmdResult),
    Failure(Failure),
}

impl Outcome {
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Outcome::Failure(Failure {
            kind,
            message: message.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn result(&self) -> Option<&CmdResult> {
        match self {
            Outcome::Success(result) => Some(result),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Failure> {
        match self {
            Outcome::Failure(failure) => Some(failure),
            Outcome::Success(_) => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.error().map(|f| f.kind)
    }

    /// First command message or failure message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(result) => result.headline(),
            Outcome::Failure(failure) => Some(&failure.message),
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.result().and_then(CmdResult::user_id)
    }

    pub fn todo(&self) -> Option<&Todo> {
        self.result().and_then(CmdResult::todo)
    }

    /// Listed todos; empty for failures and non-listing operations.
    pub fn todos(&self) -> &[Todo] {
        self.result().map(CmdResult::todos).unwrap_or_default()
    }
}

impl From<Result<CmdResult>> for Outcome {
    fn from(result: Result<CmdResult>) -> Self {
        match result {
            Ok(result) => Outcome::Success(result),
            Err(err) => Outcome::Failure(err.into()),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Outcome::Failure(failure) => {
                map.serialize_entry("status", "error")?;
                map.serialize_entry("message", &failure.message)?;
            }
            Outcome::Success(result) => {
                map.serialize_entry("status", "success")?;
                if let Some(headline) = result.headline() {
                    map.serialize_entry("message", headline)?;
                }
                match &result.payload {
                    Payload::None => {}
                    Payload::UserId(id) => map.serialize_entry("userId", id)?,
                    Payload::Todo(todo) => map.serialize_entry("todo", todo)?,
                    Payload::UpdatedTodo(todo) => map.serialize_entry("updatedTodo", todo)?,
                    Payload::Todos(todos) => map.serialize_entry("todos", todos)?,
                }
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CmdMessage;
    use serde_json::json;

    #[test]
    fn failure_envelope_has_status_and_message() {
        let outcome = Outcome::from(Err::<CmdResult, _>(TodozError::invalid(
            "Invalid password.",
        )));
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({"status": "error", "message": "Invalid password."})
        );
        assert_eq!(outcome.kind(), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn user_id_envelope_uses_camel_case() {
        let id = Uuid::new_v4();
        let result = CmdResult::default()
            .with_user_id(id)
            .with_message(CmdMessage::success("Login successful."));
        let value = serde_json::to_value(Outcome::Success(result)).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Login successful.");
        assert_eq!(value["userId"], id.to_string());
    }

    #[test]
    fn updated_todo_uses_its_own_key() {
        let todo = Todo::new("Title".into(), None);
        let value =
            serde_json::to_value(Outcome::Success(CmdResult::default().with_updated_todo(todo)))
                .unwrap();
        assert!(value.get("updatedTodo").is_some());
        assert!(value.get("todo").is_none());
    }

    #[test]
    fn info_messages_reach_the_envelope() {
        let todo = Todo::new("Title".into(), None);
        let result = CmdResult::default()
            .with_updated_todo(todo)
            .with_message(CmdMessage::info("Nothing to update."));
        let value = serde_json::to_value(Outcome::Success(result)).unwrap();
        assert_eq!(value["message"], "Nothing to update.");
        assert!(value.get("updatedTodo").is_some());
    }

    #[test]
    fn listings_render_as_todos_array() {
        let todos = vec![
            Todo::new("A".into(), None),
            Todo::new("B".into(), None),
        ];
        let value =
            serde_json::to_value(Outcome::Success(CmdResult::default().with_todos(todos))).unwrap();
        assert_eq!(value["todos"].as_array().unwrap().len(), 2);
        assert!(value.get("message").is_none());
    }

    #[test]
    fn accessors_are_empty_on_failure() {
        let outcome = Outcome::failure(ErrorKind::NotFound, "gone");
        assert!(!outcome.is_success());
        assert!(outcome.user_id().is_none());
        assert!(outcome.todo().is_none());
        assert!(outcome.todos().is_empty());
        assert_eq!(outcome.message(), Some("gone"));
    }
}
