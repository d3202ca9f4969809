//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every todoz operation, whatever sits in front of it (the
//! demo CLI, the JSON-lines request driver, tests).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the matching command function
//! - **Converts** `Result<CmdResult>` into an [`Outcome`], so no error ever
//!   escapes to the caller as `Err`
//! - **Logs** each operation through `tracing`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: validation order and index updates live in `commands/*.rs`
//! - **Formatting**: envelopes are rendered by [`crate::envelope`]
//! - **Locking**: see [`crate::shared::SharedTodozApi`] for concurrent callers
//!
//! ## Generic Over DataStore
//!
//! `TodozApi<S: DataStore>` is generic over the storage backend. Every
//! instance owns its own store, so tests construct as many independent stores
//! as they need.

use crate::commands::{self, CmdResult};
use crate::config::TodozConfig;
use crate::error::Result;
use crate::model::TodoPatch;
use crate::outcome::Outcome;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub use crate::commands::list::TodoFilter;
pub use crate::commands::{CmdMessage, MessageLevel, Payload};

/// The main API facade for todoz operations.
pub struct TodozApi<S: DataStore> {
    store: S,
    config: TodozConfig,
}

impl TodozApi<InMemoryStore> {
    /// A facade over a fresh, empty in-memory store with default settings.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new(), TodozConfig::default())
    }
}

impl<S: DataStore> TodozApi<S> {
    pub fn new(store: S, config: TodozConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TodozConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user_exists(&self, user_id: &Uuid) -> bool {
        self.store.get_user(user_id).is_ok()
    }

    pub fn register_user(&mut self, email: &str, password: &str) -> Outcome {
        debug!(email, "register_user");
        let result = commands::register::run(
            &mut self.store,
            self.config.min_password_length,
            email,
            password,
        );
        finish("register_user", result)
    }

    pub fn login_user(&self, email: &str, password: &str) -> Outcome {
        debug!(email, "login_user");
        finish(
            "login_user",
            commands::login::run(&self.store, email, password),
        )
    }

    pub fn update_password(
        &mut self,
        user_id: &Uuid,
        old_password: &str,
        new_password: &str,
    ) -> Outcome {
        self.change_password(user_id, Some(old_password), Some(new_password))
    }

    /// Nullable form of [`Self::update_password`] for the request layer.
    pub(crate) fn change_password(
        &mut self,
        user_id: &Uuid,
        old_password: Option<&str>,
        new_password: Option<&str>,
    ) -> Outcome {
        debug!(%user_id, "update_password");
        let result = commands::password::run(
            &mut self.store,
            self.config.min_password_length,
            user_id,
            old_password,
            new_password,
        );
        finish("update_password", result)
    }

    pub fn add_todo(&mut self, user_id: &Uuid, title: &str, details: Option<&str>) -> Outcome {
        debug!(%user_id, "add_todo");
        finish(
            "add_todo",
            commands::create::run(&mut self.store, user_id, title, details),
        )
    }

    pub fn update_todo(&mut self, user_id: &Uuid, todo_id: &Uuid, patch: &TodoPatch) -> Outcome {
        debug!(%user_id, %todo_id, ?patch, "update_todo");
        finish(
            "update_todo",
            commands::update::run(&mut self.store, user_id, todo_id, patch),
        )
    }

    pub fn delete_todo(&mut self, user_id: &Uuid, todo_id: &Uuid) -> Outcome {
        debug!(%user_id, %todo_id, "delete_todo");
        finish(
            "delete_todo",
            commands::delete::run(&mut self.store, user_id, todo_id),
        )
    }

    pub fn list_todos(&self, user_id: &Uuid, filter: TodoFilter) -> Outcome {
        debug!(%user_id, ?filter, "list_todos");
        finish(
            "list_todos",
            commands::list::run(&self.store, user_id, filter),
        )
    }

    pub fn get_all_todos(&self, user_id: &Uuid) -> Outcome {
        self.list_todos(user_id, TodoFilter::All)
    }

    pub fn get_active_todos(&self, user_id: &Uuid) -> Outcome {
        self.list_todos(user_id, TodoFilter::Active)
    }

    pub fn get_completed_todos(&self, user_id: &Uuid) -> Outcome {
        self.list_todos(user_id, TodoFilter::Completed)
    }

    pub fn search_todos(&self, user_id: &Uuid, query: &str) -> Outcome {
        debug!(%user_id, query, "search_todos");
        finish(
            "search_todos",
            commands::search::run(&self.store, user_id, query),
        )
    }
}

fn finish(operation: &'static str, result: Result<CmdResult>) -> Outcome {
    match &result {
        Ok(_) => info!(operation, "operation succeeded"),
        Err(err) => warn!(operation, kind = ?err.kind(), error = %err, "operation failed"),
    }
    Outcome::from(result)
}
