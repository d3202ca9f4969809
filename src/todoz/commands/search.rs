use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::find_user;

/// Case-insensitive substring search over title, details and the creation
/// timestamp. Results keep stored order; there is no ranking.
pub fn run<S: DataStore>(store: &S, user_id: &Uuid, query: &str) -> Result<CmdResult> {
    find_user(store, user_id)?;
    let needle = query.to_lowercase();
    let matches = store
        .list_todos(user_id)
        .into_iter()
        .filter(|t| t.matches(&needle))
        .collect();
    Ok(CmdResult::default().with_todos(matches))
}
