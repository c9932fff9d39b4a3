//! Command contract: named operations producing an undo/redo action pair

use crate::Result;

/// A replayable side effect over the host state `H`.
///
/// Actions are invoked once immediately when their command runs and again on
/// every redo, so they must capture everything they need by value and be
/// safe to call repeatedly.
pub type Action<H> = Box<dyn FnMut(&mut H) -> Result<()> + Send>;

/// The reversible effect a command's `execute` hands back to the commander.
///
/// `redo` performs the edit; `undo`, when present, restores the state
/// captured before it. A command without an `undo` can still be recorded,
/// but undoing past it only moves the history cursor.
pub struct ActionPair<H> {
    pub undo: Option<Action<H>>,
    pub redo: Action<H>,
}

impl<H> std::fmt::Debug for ActionPair<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionPair")
            .field("undo", &self.undo.as_ref().map(|_| "Action"))
            .field("redo", &"Action")
            .finish()
    }
}

/// A named, registrable editing operation.
///
/// `H` is the host state the command edits; `A` is the typed argument
/// contract shared by one command set. `execute` computes the effect for the
/// current host state and returns it without applying it; the commander
/// applies `redo` once and decides, via `follow_queue`, whether the pair is
/// recorded into history.
pub trait Command<H, A>: Send {
    /// Unique registry key
    fn name(&self) -> &str;

    /// Advisory shortcut strings for an external key binder. Free text,
    /// neither parsed nor validated here.
    fn shortcuts(&self) -> &[&str] {
        &[]
    }

    /// Whether invocations of this command are recorded into history.
    /// Defaults to true; transient commands opt out.
    fn follow_queue(&self) -> bool {
        true
    }

    /// Compute the undo/redo pair for the current host state
    fn execute(&mut self, host: &mut H, args: &A) -> Result<ActionPair<H>>;
}
