//! Command Engine - command registry, undo/redo history, and block commands
//!
//! This crate implements the transactional editing core of the visual
//! builder: a generic named-command registry (`Commander`) over a linear
//! undo/redo history, plus the block command set and the `BlockEditor`
//! facade the shell drives.

mod block_commands;
mod command;
mod commander;
mod editor;
mod error;
mod history;
mod host;

pub use block_commands::*;
pub use command::*;
pub use commander::*;
pub use editor::*;
pub use error::*;
pub use history::*;
pub use host::*;
