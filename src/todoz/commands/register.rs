use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::User;
use crate::store::DataStore;

use super::helpers::{validate_email, validate_password};

pub fn run<S: DataStore>(
    store: &mut S,
    min_password_length: usize,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    validate_email(email)?;
    validate_password(password, min_password_length, "Password")?;
    if store.email_registered(email) {
        return Err(TodozError::DuplicateEmail(email.to_string()));
    }

    let user = User::new(email.to_string(), password.to_string());
    store.insert_user(&user)?;

    Ok(CmdResult::default()
        .with_user_id(user.id)
        .with_message(CmdMessage::success("User registered successfully.")))
}
