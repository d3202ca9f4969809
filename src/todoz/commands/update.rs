use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoPatch;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::{find_user, validate_title};

/// Apply a partial update. Absent fields are left as they are, so an empty
/// patch succeeds and returns the todo unchanged.
pub fn run<S: DataStore>(
    store: &mut S,
    user_id: &Uuid,
    todo_id: &Uuid,
    patch: &TodoPatch,
) -> Result<CmdResult> {
    find_user(store, user_id)?;
    let mut todo = store.get_todo(user_id, todo_id)?;
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result.with_updated_todo(todo));
    }

    patch.apply(&mut todo);
    store.save_todo(user_id, &todo)?;

    result.add_message(CmdMessage::success(format!(
        "Todo updated: {}",
        todo.title
    )));
    Ok(result.with_updated_todo(todo))
}
