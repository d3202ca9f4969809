use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{find_user, validate_title};

pub fn run<S: DataStore>(
    store: &mut S,
    user_id: &Uuid,
    title: &str,
    details: Option<&str>,
) -> Result<CmdResult> {
    find_user(store, user_id)?;
    validate_title(title)?;

    let todo = Todo::new(title.to_string(), details.map(str::to_string));
    store.add_todo(user_id, &todo)?;

    Ok(CmdResult::default()
        .with_todo(todo)
        .with_message(CmdMessage::success("Todo added successfully.")))
}
