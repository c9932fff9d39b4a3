//! Host interface the block commands edit through

use block_model::{Block, FocusData, PageModel};

/// Capabilities the editor shell supplies to the block command set.
///
/// Commands read the committed block list and the current selection
/// partition at invocation time, and apply edits by replacing the whole
/// block list; a shell implementation hooks `update_blocks` into its own
/// render/persistence path.
pub trait EditorHost {
    /// The committed block list
    fn blocks(&self) -> &[Block];

    /// The current selection partition
    fn focus_data(&self) -> FocusData;

    /// Replace the block list with `blocks`
    fn update_blocks(&mut self, blocks: Vec<Block>);
}

impl EditorHost for PageModel {
    fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn focus_data(&self) -> FocusData {
        PageModel::focus_data(self)
    }

    fn update_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
    }
}
