use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::store::DataStore;

use super::helpers::find_user;

/// The returned user id acts as the bearer token for every later call.
pub fn run<S: DataStore>(store: &S, email: &str, password: &str) -> Result<CmdResult> {
    let user_id = store
        .find_user_id_by_email(email)
        .ok_or_else(|| TodozError::EmailNotFound(email.to_string()))?;
    let user = find_user(store, &user_id)?;

    if !user.password_matches(password) {
        return Err(TodozError::AuthenticationFailed("Invalid password.".into()));
    }

    Ok(CmdResult::default()
        .with_user_id(user.id)
        .with_message(CmdMessage::success("Login successful.")))
}
