//! Block command set: the editing operations of the visual builder

use crate::{ActionPair, Command, CommandError, EditorHost, Result};
use block_model::Block;
use tracing::debug;

/// Typed argument contract shared by the block command set
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BlockArgs {
    /// No arguments; used by selection-driven commands
    #[default]
    None,
    /// Drop a new component instance at a canvas position
    Place {
        component_key: String,
        top: f64,
        left: f64,
    },
}

/// Delete the selected blocks.
///
/// Captures the full block list and the unfocused remainder at invocation
/// time; redo installs the remainder, undo restores the full list. With an
/// empty selection the edit changes nothing but is still recorded, matching
/// how toolbar delete behaves in the shell.
pub struct DeleteSelection;

impl<H: EditorHost> Command<H, BlockArgs> for DeleteSelection {
    fn name(&self) -> &str {
        "delete"
    }

    fn shortcuts(&self) -> &[&str] {
        &["backspace", "delete", "ctrl+d"]
    }

    fn execute(&mut self, host: &mut H, _args: &BlockArgs) -> Result<ActionPair<H>> {
        let before = host.blocks().to_vec();
        let after = host.focus_data().un_focus;
        // the host's partition need not be a subset of the committed list
        debug!(
            selected = before.len().saturating_sub(after.len()),
            remaining = after.len(),
            "delete selection"
        );

        Ok(ActionPair {
            undo: Some(Box::new(move |h: &mut H| {
                h.update_blocks(before.clone());
                Ok(())
            })),
            redo: Box::new(move |h: &mut H| {
                h.update_blocks(after.clone());
                Ok(())
            }),
        })
    }
}

/// Append a freshly dropped block to the canvas.
///
/// Driven by the palette drop gesture rather than a shortcut; routing it
/// through the commander makes drops undoable.
pub struct PlaceBlock;

impl<H: EditorHost> Command<H, BlockArgs> for PlaceBlock {
    fn name(&self) -> &str {
        "place"
    }

    fn execute(&mut self, host: &mut H, args: &BlockArgs) -> Result<ActionPair<H>> {
        let (component_key, top, left) = match args {
            BlockArgs::Place {
                component_key,
                top,
                left,
            } => (component_key.clone(), *top, *left),
            _ => return Err(CommandError::InvalidArguments("place".into())),
        };

        let block = Block::new(component_key.clone(), top, left);
        debug!(component = %component_key, block = %block.id.short(), top, left, "place block");

        let before = host.blocks().to_vec();
        let mut after = before.clone();
        after.push(block);

        Ok(ActionPair {
            undo: Some(Box::new(move |h: &mut H| {
                h.update_blocks(before.clone());
                Ok(())
            })),
            redo: Box::new(move |h: &mut H| {
                h.update_blocks(after.clone());
                Ok(())
            }),
        })
    }
}
