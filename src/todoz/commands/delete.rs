use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::find_user;

pub fn run<S: DataStore>(store: &mut S, user_id: &Uuid, todo_id: &Uuid) -> Result<CmdResult> {
    find_user(store, user_id)?;
    store.delete_todo(user_id, todo_id)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Todo deleted successfully.")))
}
