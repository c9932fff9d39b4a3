//! Block editor facade: a page model wired to a pre-registered commander

use crate::{BlockArgs, Commander, DeleteSelection, PlaceBlock, Result, ShortcutBinding};
use block_model::{BlockId, PageModel};

/// The editing surface the shell drives: owns the page model and a
/// commander with the block command set registered.
///
/// Selection changes go straight to the model (they are not edits and are
/// not recorded); everything that changes the block list goes through the
/// commander so it lands in history.
pub struct BlockEditor {
    model: PageModel,
    commander: Commander<PageModel, BlockArgs>,
}

impl BlockEditor {
    /// Create an editor over an empty default-sized page
    pub fn new() -> Self {
        Self::with_model(PageModel::default())
    }

    /// Create an editor over an existing page
    pub fn with_model(model: PageModel) -> Self {
        let mut commander = Commander::new();
        // the block command set uses no reserved names
        commander
            .registry(Box::new(DeleteSelection))
            .expect("registering delete");
        commander
            .registry(Box::new(PlaceBlock))
            .expect("registering place");

        Self { model, commander }
    }

    /// The current page
    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// Mutable access for non-edit state like selection or canvas size
    pub fn model_mut(&mut self) -> &mut PageModel {
        &mut self.model
    }

    /// The underlying commander, for history inspection and shell-registered
    /// commands
    pub fn commander(&self) -> &Commander<PageModel, BlockArgs> {
        &self.commander
    }

    /// Select exactly the given blocks
    pub fn set_focus(&mut self, ids: &[BlockId]) {
        self.model.set_focus(ids);
    }

    /// Deselect everything
    pub fn clear_focus(&mut self) {
        self.model.clear_focus();
    }

    /// Delete the selected blocks (recorded)
    pub fn delete(&mut self) -> Result<()> {
        self.commander
            .invoke("delete", &mut self.model, &BlockArgs::None)
    }

    /// Drop a new component instance at a canvas position (recorded)
    pub fn place_block(
        &mut self,
        component_key: impl Into<String>,
        top: f64,
        left: f64,
    ) -> Result<()> {
        let args = BlockArgs::Place {
            component_key: component_key.into(),
            top,
            left,
        };
        self.commander.invoke("place", &mut self.model, &args)
    }

    /// Undo the last recorded edit; a no-op with nothing to undo
    pub fn undo(&mut self) -> Result<()> {
        self.commander.undo(&mut self.model)
    }

    /// Redo the next undone edit; a no-op with nothing to redo
    pub fn redo(&mut self) -> Result<()> {
        self.commander.redo(&mut self.model)
    }

    pub fn can_undo(&self) -> bool {
        self.commander.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.commander.can_redo()
    }

    /// Advisory shortcut table for the shell's key binder
    pub fn shortcut_bindings(&self) -> Vec<ShortcutBinding> {
        self.commander.shortcut_bindings()
    }
}

impl Default for BlockEditor {
    fn default() -> Self {
        Self::new()
    }
}
