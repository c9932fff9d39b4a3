//! Page model - the container and its placed blocks

use crate::{Block, BlockId, FocusData};
use serde::{Deserialize, Serialize};

/// Dimensions of the editing canvas, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// The edited document: one container plus the blocks dropped onto it.
///
/// This is the value the shell binds to and persists; command history is
/// kept separately and never serialized with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageModel {
    /// Canvas dimensions
    pub container: Container,
    /// Placed blocks, in stacking order
    pub blocks: Vec<Block>,
}

impl PageModel {
    /// Create an empty page with the given canvas size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            container: Container::new(width, height),
            blocks: Vec::new(),
        }
    }

    /// Look up a block by ID
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Number of placed blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Partition the current block list by selection state
    pub fn focus_data(&self) -> FocusData {
        FocusData::partition(&self.blocks)
    }

    /// Select exactly the blocks with the given IDs, deselecting the rest
    pub fn set_focus(&mut self, ids: &[BlockId]) {
        for block in &mut self.blocks {
            block.focus = ids.contains(&block.id);
        }
    }

    /// Deselect all blocks
    pub fn clear_focus(&mut self) {
        for block in &mut self.blocks {
            block.focus = false;
        }
    }
}
