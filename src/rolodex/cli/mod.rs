//! # CLI Layer
//!
//! This module is **one possible UI client** for rolodex. It is the only place
//! that knows about terminal I/O, argument parsing and `std::process::exit`.
//!
//! Two ways in:
//!
//! - **One-shot commands** (`rolodex add --name ...`): open the directory file,
//!   run one operation, save if it changed anything, print the result.
//! - **The shell** (`rolodex shell`): a line-oriented session that keeps the
//!   directory in memory across commands, with explicit `save` and a
//!   confirmation before discarding unsaved changes.
//!
//! ## Structure
//!
//! - `setup`: clap definitions and grouped help
//! - `commands`: `run()` and the one-shot handlers
//! - `shell`: the interactive session
//! - `render`: `CmdResult` to terminal text
//! - `styles`: named console styles

mod commands;
mod render;
mod setup;
mod shell;
mod styles;

pub use commands::run;
