//! Commander - named command registry over a shared undo/redo history

use crate::{Command, CommandError, History, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Name of the built-in undo command
pub const UNDO: &str = "undo";
/// Name of the built-in redo command
pub const REDO: &str = "redo";

/// One advisory shortcut-to-command mapping for an external key binder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    /// Free-text shortcut string, e.g. `ctrl+z`
    pub shortcut: String,
    /// Name of the command the shortcut dispatches
    pub command: String,
}

/// The command dispatcher for one editor instance.
///
/// Holds the name-to-command registry and the linear history the recorded
/// commands share. `undo` and `redo` are built in: they traverse the history
/// instead of running a registered command, and are never recorded
/// themselves.
///
/// Commands receive only the host state `H`, never the commander, so an
/// action cannot dispatch further commands mid-flight; re-entrant invocation
/// is structurally impossible.
pub struct Commander<H, A> {
    commands: HashMap<String, Box<dyn Command<H, A>>>,
    history: History<H>,
}

impl<H, A> Commander<H, A> {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            history: History::new(),
        }
    }

    /// Create a commander whose history keeps at most `max_entries` edits
    pub fn with_history_capacity(max_entries: usize) -> Self {
        Self {
            commands: HashMap::new(),
            history: History::with_capacity(max_entries),
        }
    }

    /// Register a command, overwriting any previous command with the same
    /// name. The built-in names `undo` and `redo` are reserved.
    pub fn registry(&mut self, command: Box<dyn Command<H, A>>) -> Result<()> {
        let name = command.name().to_string();
        if name == UNDO || name == REDO {
            return Err(CommandError::ReservedName(name));
        }

        debug!(command = %name, "registered command");
        self.commands.insert(name, command);
        Ok(())
    }

    /// Dispatch a command by name.
    ///
    /// For a registered command: runs `execute`, applies the returned `redo`
    /// action once, and, unless the command opts out of the queue, records
    /// the pair (truncating any redo tail). History is touched only after
    /// the first application succeeds, so a failing command leaves the
    /// cursor and entries unchanged.
    ///
    /// `undo` and `redo` dispatch to the built-ins and ignore `args`.
    pub fn invoke(&mut self, name: &str, host: &mut H, args: &A) -> Result<()> {
        match name {
            UNDO => self.undo(host),
            REDO => self.redo(host),
            _ => {
                let (mut pair, follow_queue) = {
                    let command = self
                        .commands
                        .get_mut(name)
                        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
                    let follow_queue = command.follow_queue();
                    (command.execute(host, args)?, follow_queue)
                };

                debug!(command = name, follow_queue, "invoking command");
                (pair.redo)(host)?;

                if follow_queue {
                    self.history.record(pair);
                }
                Ok(())
            }
        }
    }

    /// Built-in undo: revert the last applied entry. A no-op at the start
    /// of history.
    pub fn undo(&mut self, host: &mut H) -> Result<()> {
        debug!("undo");
        self.history.undo(host)
    }

    /// Built-in redo: re-apply the next entry. A no-op at the end of
    /// history.
    pub fn redo(&mut self, host: &mut H) -> Result<()> {
        debug!("redo");
        self.history.redo(host)
    }

    /// Check if a command name is registered (built-ins count)
    pub fn is_registered(&self, name: &str) -> bool {
        name == UNDO || name == REDO || self.commands.contains_key(name)
    }

    /// Names of all registered commands, including the built-ins
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.push(UNDO);
        names.push(REDO);
        names
    }

    /// The advisory shortcut table for an external key binder. Shortcuts
    /// are free text and may map several strings to one command.
    pub fn shortcut_bindings(&self) -> Vec<ShortcutBinding> {
        let mut bindings = vec![
            ShortcutBinding {
                shortcut: "ctrl+z".into(),
                command: UNDO.into(),
            },
            ShortcutBinding {
                shortcut: "ctrl+y".into(),
                command: REDO.into(),
            },
            ShortcutBinding {
                shortcut: "ctrl+shift+z".into(),
                command: REDO.into(),
            },
        ];

        for (name, command) in &self.commands {
            for shortcut in command.shortcuts() {
                bindings.push(ShortcutBinding {
                    shortcut: (*shortcut).to_string(),
                    command: name.clone(),
                });
            }
        }
        bindings
    }

    /// The shared history
    pub fn history(&self) -> &History<H> {
        &self.history
    }

    /// Drop all recorded history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl<H, A> Default for Commander<H, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, A> std::fmt::Debug for Commander<H, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commander")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("history", &self.history)
            .finish()
    }
}
