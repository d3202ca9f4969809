use crate::model::Todo;
use uuid::Uuid;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod login;
pub mod password;
pub mod register;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Operation-specific data carried by a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payload {
    #[default]
    None,
    /// Returned by registration and login; doubles as the caller's token.
    UserId(Uuid),
    /// A freshly created todo.
    Todo(Todo),
    /// A todo after a partial update.
    UpdatedTodo(Todo),
    /// A listing, search or filter result, in stored order.
    Todos(Vec<Todo>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub payload: Payload,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_user_id(mut self, id: Uuid) -> Self {
        self.payload = Payload::UserId(id);
        self
    }

    pub fn with_todo(mut self, todo: Todo) -> Self {
        self.payload = Payload::Todo(todo);
        self
    }

    pub fn with_updated_todo(mut self, todo: Todo) -> Self {
        self.payload = Payload::UpdatedTodo(todo);
        self
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.payload = Payload::Todos(todos);
        self
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self.payload {
            Payload::UserId(id) => Some(id),
            _ => None,
        }
    }

    /// The single todo carried by an add or update.
    pub fn todo(&self) -> Option<&Todo> {
        match &self.payload {
            Payload::Todo(todo) | Payload::UpdatedTodo(todo) => Some(todo),
            _ => None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        match &self.payload {
            Payload::Todos(todos) => todos,
            _ => &[],
        }
    }

    /// First message, used as the envelope's `message` field.
    pub fn headline(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
