//! Focus partition - the selection model over placed blocks

use crate::Block;
use serde::{Deserialize, Serialize};

/// A snapshot of the block list split by selection state.
///
/// Recomputed by the shell whenever the selection changes; commands read it
/// at invocation time and must not assume it stays current afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FocusData {
    /// Blocks currently selected
    pub focus: Vec<Block>,
    /// Blocks outside the selection, in document order
    pub un_focus: Vec<Block>,
}

impl FocusData {
    /// Partition a block list by its `focus` flags
    pub fn partition(blocks: &[Block]) -> Self {
        let (focus, un_focus) = blocks.iter().cloned().partition(|b| b.focus);
        Self { focus, un_focus }
    }

    /// Check whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.focus.is_empty()
    }

    /// Number of selected blocks
    pub fn len(&self) -> usize {
        self.focus.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(key: &str, focus: bool) -> Block {
        let mut b = Block::new(key, 0.0, 0.0);
        b.focus = focus;
        b
    }

    #[test]
    fn test_partition_splits_by_focus_flag() {
        let blocks = vec![
            block("a", true),
            block("b", false),
            block("c", true),
            block("d", false),
        ];

        let data = FocusData::partition(&blocks);
        assert_eq!(data.len(), 2);
        assert_eq!(data.un_focus.len(), 2);
        assert!(data.focus.iter().all(|b| b.focus));
        assert!(data.un_focus.iter().all(|b| !b.focus));
    }

    #[test]
    fn test_partition_preserves_order() {
        let blocks = vec![block("a", false), block("b", true), block("c", false)];
        let data = FocusData::partition(&blocks);

        assert_eq!(data.un_focus[0].component_key, "a");
        assert_eq!(data.un_focus[1].component_key, "c");
    }

    #[test]
    fn test_empty_selection() {
        let blocks = vec![block("a", false), block("b", false)];
        let data = FocusData::partition(&blocks);

        assert!(data.is_empty());
        assert_eq!(data.un_focus.len(), 2);
    }
}
