//! # Todoz Architecture
//!
//! Todoz is an **in-memory record store** for user accounts and their todo
//! lists. The binary is a thin driver; everything interesting lives in the
//! library and takes plain Rust arguments.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Drivers (main.rs + cli/, request.rs)                       │
//! │  - Demo walkthrough, JSON-lines requests, stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, shared.rs)                              │
//! │  - Thin facade over commands                                │
//! │  - Every call returns an Outcome, never an Err              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation in a fixed order, then mutation               │
//! │  - Returns Result<CmdResult>                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! │  - Email, user and todo indices                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Order
//!
//! User-scoped commands resolve the user first, then the todo (if any), then
//! check field contents, and only then mutate. A failed command therefore
//! never leaves a partial write behind, and retrying with corrected input is
//! always safe.
//!
//! ## Credentials
//!
//! Passwords are stored and compared as plaintext. The user id returned by
//! registration and login is the only "token"; there are no sessions.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`shared`]: Mutex-guarded facade handle for concurrent callers
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the three indices
//! - [`model`]: `User`, `Todo`, `TodoStatus`, `TodoPatch`
//! - [`outcome`]: The success-or-failure result and its envelope shape
//! - [`envelope`]: JSON text rendering of outcomes
//! - [`request`]: Nullable JSON requests dispatched onto the facade
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod request;
pub mod shared;
pub mod store;
