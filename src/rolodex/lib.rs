//! # Rolodex Architecture
//!
//! Rolodex keeps a small contact directory (name, phone, email, favorite) in
//! a plain `;`-delimited text file. The library is UI-agnostic; the bundled
//! binary offers one-shot commands and an interactive shell on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (cli/, binary only)                               │
//! │  - clap parsing, shell loop, table rendering                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the Session                           │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Preconditions (file open, nothing unsaved)               │
//! │  - Validation, search, session mutation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DirectoryStore trait                                     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session State
//!
//! What used to be three loose flags (a file is open, there are unsaved
//! changes, search results are shown) lives in [`session::Session`], owned by
//! the API value. Every command either succeeds or leaves the session and the
//! file exactly as they were.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Messages for the user travel back in
//! [`commands::CmdResult::messages`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each user action
//! - [`session`]: Application state between actions
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry`, `EntryDraft`, `FavoriteMarker`
//! - [`validate`]: Entry validation rules
//! - [`search`]: Single-field search
//! - [`index`]: Display indexes and entry selectors
//! - [`config`]: Configuration management
//! - [`init`]: Startup wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod search;
pub mod session;
pub mod store;
pub mod validate;
