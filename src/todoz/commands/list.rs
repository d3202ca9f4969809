use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;
use uuid::Uuid;

use super::helpers::find_user;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn accepts(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => todo.is_active(),
            TodoFilter::Completed => todo.is_completed(),
        }
    }
}

/// List a user's todos in stored order, keeping only those the filter accepts.
pub fn run<S: DataStore>(store: &S, user_id: &Uuid, filter: TodoFilter) -> Result<CmdResult> {
    find_user(store, user_id)?;
    let listed = store
        .list_todos(user_id)
        .into_iter()
        .filter(|t| filter.accepts(t))
        .collect();
    Ok(CmdResult::default().with_todos(listed))
}
