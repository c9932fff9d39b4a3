//! Block ID generation and management

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a block placed on the canvas.
///
/// Random UUID v4 under the hood, stable across serialization. Blocks are
/// ephemeral palette drops rather than addressable document nodes, so the
/// ID surface stays small: creation, ordering, and a short form for labels
/// and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Create a new random BlockId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for block labels and log lines
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for BlockId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<BlockId> for Uuid {
    fn from(id: BlockId) -> Self {
        id.0
    }
}
