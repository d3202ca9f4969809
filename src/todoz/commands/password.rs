use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{find_user, validate_password};

/// Both passwords are nullable so that JSON callers get the same check order
/// as typed ones: a missing old password is a mismatch, and a missing new
/// password is only reported once the old one has been accepted.
pub fn run<S: DataStore>(
    store: &mut S,
    min_password_length: usize,
    user_id: &Uuid,
    old_password: Option<&str>,
    new_password: Option<&str>,
) -> Result<CmdResult> {
    let mut user = find_user(store, user_id)?;
    if !old_password.is_some_and(|old| user.password_matches(old)) {
        return Err(TodozError::AuthenticationFailed(
            "Old password does not match.".into(),
        ));
    }
    let new_password =
        new_password.ok_or_else(|| TodozError::invalid("New password cannot be null."))?;
    validate_password(new_password, min_password_length, "New password")?;

    user.password = new_password.to_string();
    store.save_user(&user)?;

    Ok(CmdResult::default().with_message(CmdMessage::success("Password updated successfully.")))
}
