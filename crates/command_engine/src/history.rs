//! Linear undo/redo history with a cursor over recorded entries

use crate::{ActionPair, Result};
use tracing::debug;

/// One recorded reversible edit
struct HistoryEntry<H> {
    pair: ActionPair<H>,
}

/// The command queue: an ordered list of recorded edits plus a cursor
/// marking the last applied one.
///
/// `cursor == None` means nothing is applied (the position before the first
/// entry). Recording a new edit truncates everything past the cursor, so an
/// undone edit can never resurface after an unrelated new edit. Undo past
/// the start and redo past the end are silent no-ops.
///
/// The cursor moves only after an action returns `Ok`, so a failing action
/// leaves the bookkeeping where it was.
pub struct History<H> {
    cursor: Option<usize>,
    entries: Vec<HistoryEntry<H>>,
    max_entries: usize,
}

impl<H> History<H> {
    /// Create a history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Create a history that keeps at most `max_entries` recorded edits,
    /// evicting the oldest when the limit is exceeded. The newest edit is
    /// always kept, so a capacity of zero is treated as one.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            cursor: None,
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Record a new edit at the cursor, discarding any redo tail
    pub fn record(&mut self, pair: ActionPair<H>) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(HistoryEntry { pair });

        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Revert the entry at the cursor, if any, and step back
    pub fn undo(&mut self, host: &mut H) -> Result<()> {
        let Some(index) = self.cursor else {
            debug!("undo at start of history, nothing to do");
            return Ok(());
        };

        if let Some(undo) = self.entries[index].pair.undo.as_mut() {
            undo(host)?;
        }
        self.cursor = index.checked_sub(1);
        Ok(())
    }

    /// Re-apply the entry after the cursor, if any, and step forward
    pub fn redo(&mut self, host: &mut H) -> Result<()> {
        let next = self.cursor.map_or(0, |c| c + 1);
        let Some(entry) = self.entries.get_mut(next) else {
            debug!("redo at end of history, nothing to do");
            return Ok(());
        };

        (entry.pair.redo)(host)?;
        self.cursor = Some(next);
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }

    /// Index of the last applied entry, `None` before the first
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl<H> Default for History<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> std::fmt::Debug for History<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("cursor", &self.cursor)
            .field("entries", &self.entries.len())
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
