//! Block - one component instance placed on the canvas

use crate::BlockId;
use serde::{Deserialize, Serialize};

/// A component instance dropped onto the container.
///
/// The `component_key` names an entry in the palette registry; rendering it
/// is the shell's concern. `top`/`left` are pixel offsets within the
/// container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identity of this block
    pub id: BlockId,
    /// Palette key of the component this block instantiates
    pub component_key: String,
    /// Vertical offset within the container, in pixels
    pub top: f64,
    /// Horizontal offset within the container, in pixels
    pub left: f64,
    /// Whether the shell should re-center this block on first render
    /// (set for freshly dropped blocks, cleared once positioned)
    pub adjust_position: bool,
    /// Whether this block is part of the current selection
    pub focus: bool,
}

impl Block {
    /// Create a freshly dropped block at the given position.
    ///
    /// New blocks start unfocused and flagged for position adjustment, so
    /// the shell centers them under the drop point on first render.
    pub fn new(component_key: impl Into<String>, top: f64, left: f64) -> Self {
        Self {
            id: BlockId::new(),
            component_key: component_key.into(),
            top,
            left,
            adjust_position: true,
            focus: false,
        }
    }

    /// Mark or unmark this block as selected
    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }
}
