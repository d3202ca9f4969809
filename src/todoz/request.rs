//! # Requests
//!
//! The boundary input contract: an operation name plus its arguments, as they
//! arrive from JSON. Every argument is nullable here, because JSON callers can
//! omit or null any field. The typed [`TodozApi`] cannot express a missing
//! argument, so this layer reports it as an `InvalidInput` failure.
//!
//! ```text
//! {"op": "registerUser", "email": "alice@example.com", "password": "password123"}
//! {"op": "updateTodo", "userId": "...", "todoId": "...", "status": "COMPLETED"}
//! ```
//!
//! A missing field is reported at the point where the operation would have
//! checked that field. For user-scoped operations that means `userId`
//! presence, then user existence, then the remaining fields. Registration
//! checks the email completely before looking at the password. A password
//! change treats a missing old password as a mismatch and only asks for the
//! new one after the old one has been accepted.

use crate::api::{TodoFilter, TodozApi};
use crate::commands::helpers::validate_email;
use crate::error::{ErrorKind, Result, TodozError};
use crate::model::{TodoPatch, TodoStatus};
use crate::outcome::Outcome;
use crate::store::DataStore;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    RegisterUser {
        email: Option<String>,
        password: Option<String>,
    },
    LoginUser {
        email: Option<String>,
        password: Option<String>,
    },
    UpdatePassword {
        user_id: Option<Uuid>,
        old_password: Option<String>,
        new_password: Option<String>,
    },
    AddTodo {
        user_id: Option<Uuid>,
        title: Option<String>,
        details: Option<String>,
    },
    UpdateTodo {
        user_id: Option<Uuid>,
        todo_id: Option<Uuid>,
        title: Option<String>,
        details: Option<String>,
        status: Option<TodoStatus>,
    },
    DeleteTodo {
        user_id: Option<Uuid>,
        todo_id: Option<Uuid>,
    },
    GetAllTodos {
        user_id: Option<Uuid>,
    },
    GetActiveTodos {
        user_id: Option<Uuid>,
    },
    GetCompletedTodos {
        user_id: Option<Uuid>,
    },
    SearchTodos {
        user_id: Option<Uuid>,
        query: Option<String>,
    },
}

impl Request {
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Request::RegisterUser { .. } => "registerUser",
            Request::LoginUser { .. } => "loginUser",
            Request::UpdatePassword { .. } => "updatePassword",
            Request::AddTodo { .. } => "addTodo",
            Request::UpdateTodo { .. } => "updateTodo",
            Request::DeleteTodo { .. } => "deleteTodo",
            Request::GetAllTodos { .. } => "getAllTodos",
            Request::GetActiveTodos { .. } => "getActiveTodos",
            Request::GetCompletedTodos { .. } => "getCompletedTodos",
            Request::SearchTodos { .. } => "searchTodos",
        }
    }

    pub fn dispatch<S: DataStore>(self, api: &mut TodozApi<S>) -> Outcome {
        match self.try_dispatch(api) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failure(err.into()),
        }
    }

    fn try_dispatch<S: DataStore>(self, api: &mut TodozApi<S>) -> Result<Outcome> {
        let outcome = match self {
            Request::RegisterUser { email, password } => {
                let email = required(email, "Email")?;
                validate_email(&email)?;
                let password = required(password, "Password")?;
                api.register_user(&email, &password)
            }
            Request::LoginUser { email, password } => {
                let email = required(email, "Email")?;
                let password = required(password, "Password")?;
                api.login_user(&email, &password)
            }
            Request::UpdatePassword {
                user_id,
                old_password,
                new_password,
            } => {
                let user_id = existing_user(api, user_id)?;
                api.change_password(&user_id, old_password.as_deref(), new_password.as_deref())
            }
            Request::AddTodo {
                user_id,
                title,
                details,
            } => {
                let user_id = existing_user(api, user_id)?;
                let title = required(title, "Todo title")?;
                api.add_todo(&user_id, &title, details.as_deref())
            }
            Request::UpdateTodo {
                user_id,
                todo_id,
                title,
                details,
                status,
            } => {
                let user_id = existing_user(api, user_id)?;
                let todo_id = required(todo_id, "Todo ID")?;
                let patch = TodoPatch {
                    title,
                    details,
                    status,
                };
                api.update_todo(&user_id, &todo_id, &patch)
            }
            Request::DeleteTodo { user_id, todo_id } => {
                let user_id = existing_user(api, user_id)?;
                let todo_id = required(todo_id, "Todo ID")?;
                api.delete_todo(&user_id, &todo_id)
            }
            Request::GetAllTodos { user_id } => {
                api.list_todos(&existing_user(api, user_id)?, TodoFilter::All)
            }
            Request::GetActiveTodos { user_id } => {
                api.list_todos(&existing_user(api, user_id)?, TodoFilter::Active)
            }
            Request::GetCompletedTodos { user_id } => {
                api.list_todos(&existing_user(api, user_id)?, TodoFilter::Completed)
            }
            Request::SearchTodos { user_id, query } => {
                let user_id = existing_user(api, user_id)?;
                let query = required(query, "Search query")?;
                api.search_todos(&user_id, &query)
            }
        };
        Ok(outcome)
    }
}

/// Parse one JSON line and run it. Malformed input becomes a failed outcome.
pub fn handle_line<S: DataStore>(api: &mut TodozApi<S>, line: &str) -> Outcome {
    match Request::parse(line) {
        Ok(request) => {
            debug!(op = request.operation(), "dispatching request");
            request.dispatch(api)
        }
        Err(err) => Outcome::failure(
            ErrorKind::InvalidInput,
            format!("Invalid request: {}", err),
        ),
    }
}

fn required<T>(value: Option<T>, label: &str) -> Result<T> {
    value.ok_or_else(|| TodozError::invalid(format!("{} cannot be null.", label)))
}

fn existing_user<S: DataStore>(api: &TodozApi<S>, user_id: Option<Uuid>) -> Result<Uuid> {
    let user_id = required(user_id, "User ID")?;
    if !api.user_exists(&user_id) {
        return Err(TodozError::UserNotFound(user_id));
    }
    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> Request {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_camel_case_operations_and_fields() {
        let id = Uuid::new_v4();
        let parsed = request(json!({
            "op": "updateTodo",
            "userId": id,
            "todoId": id,
            "status": "COMPLETED"
        }));
        assert_eq!(
            parsed,
            Request::UpdateTodo {
                user_id: Some(id),
                todo_id: Some(id),
                title: None,
                details: None,
                status: Some(TodoStatus::Completed),
            }
        );
        assert_eq!(parsed.operation(), "updateTodo");
    }

    #[test]
    fn explicit_null_is_the_same_as_missing() {
        let parsed = request(json!({"op": "registerUser", "email": null}));
        assert_eq!(
            parsed,
            Request::RegisterUser {
                email: None,
                password: None
            }
        );
    }

    #[test]
    fn missing_fields_report_null() {
        let mut api = TodozApi::in_memory();
        let outcome = request(json!({"op": "registerUser", "password": "password123"}))
            .dispatch(&mut api);
        assert_eq!(outcome.message(), Some("Email cannot be null."));
        assert_eq!(outcome.kind(), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn user_is_resolved_before_other_nulls() {
        let mut api = TodozApi::in_memory();
        let outcome = request(json!({"op": "addTodo", "userId": Uuid::new_v4()}))
            .dispatch(&mut api);
        assert_eq!(outcome.kind(), Some(ErrorKind::NotFound));
    }

    #[test]
    fn null_title_after_user_resolution() {
        let mut api = TodozApi::in_memory();
        let user = api
            .register_user("alice@example.com", "password123")
            .user_id()
            .unwrap();
        let outcome = request(json!({"op": "addTodo", "userId": user})).dispatch(&mut api);
        assert_eq!(outcome.message(), Some("Todo title cannot be null."));
    }

    #[test]
    fn missing_query_is_rejected() {
        let mut api = TodozApi::in_memory();
        let user = api
            .register_user("alice@example.com", "password123")
            .user_id()
            .unwrap();
        let outcome = request(json!({"op": "searchTodos", "userId": user})).dispatch(&mut api);
        assert_eq!(outcome.message(), Some("Search query cannot be null."));
    }

    #[test]
    fn malformed_lines_become_failures() {
        let mut api = TodozApi::in_memory();
        let outcome = handle_line(&mut api, "{not json");
        assert_eq!(outcome.kind(), Some(ErrorKind::InvalidInput));
        assert!(outcome.message().unwrap().starts_with("Invalid request:"));

        let outcome = handle_line(&mut api, r#"{"op": "dropDatabase"}"#);
        assert!(!outcome.is_success());
    }

    #[test]
    fn full_round_through_requests() {
        let mut api = TodozApi::in_memory();
        let user = handle_line(
            &mut api,
            r#"{"op":"registerUser","email":"alice@example.com","password":"password123"}"#,
        )
        .user_id()
        .unwrap();

        let line = json!({"op": "addTodo", "userId": user, "title": "Buy Groceries"}).to_string();
        let todo = handle_line(&mut api, &line).todo().unwrap().id;

        let line = json!({"op": "updateTodo", "userId": user, "todoId": todo, "status": "completed"})
            .to_string();
        assert!(handle_line(&mut api, &line).is_success());

        let line = json!({"op": "getCompletedTodos", "userId": user}).to_string();
        assert_eq!(handle_line(&mut api, &line).todos().len(), 1);
    }

    #[test]
    fn registration_checks_the_email_before_the_password() {
        let mut api = TodozApi::in_memory();
        let outcome = handle_line(
            &mut api,
            r#"{"op":"registerUser","email":"","password":null}"#,
        );
        assert_eq!(outcome.message(), Some("Email cannot be empty."));

        let outcome = handle_line(&mut api, r#"{"op":"registerUser","email":"nope"}"#);
        assert_eq!(outcome.message(), Some("Email must contain '@'."));

        let outcome = handle_line(
            &mut api,
            r#"{"op":"registerUser","email":"alice@example.com"}"#,
        );
        assert_eq!(outcome.message(), Some("Password cannot be null."));
    }

    #[test]
    fn password_change_checks_the_old_password_first() {
        let mut api = TodozApi::in_memory();
        let user = api
            .register_user("alice@example.com", "password123")
            .user_id()
            .unwrap();

        let wrong_old = json!({"op": "updatePassword", "userId": user, "oldPassword": "nope"});
        let outcome = request(wrong_old).dispatch(&mut api);
        assert_eq!(outcome.message(), Some("Old password does not match."));
        assert_eq!(outcome.kind(), Some(ErrorKind::Unauthorized));

        let no_old = json!({"op": "updatePassword", "userId": user, "newPassword": "new-secret"});
        let outcome = request(no_old).dispatch(&mut api);
        assert_eq!(outcome.message(), Some("Old password does not match."));

        let no_new = json!({"op": "updatePassword", "userId": user, "oldPassword": "password123"});
        let outcome = request(no_new).dispatch(&mut api);
        assert_eq!(outcome.message(), Some("New password cannot be null."));

        assert!(api.login_user("alice@example.com", "password123").is_success());
    }
}
