//! Integration tests for the editing flows the shell drives:
//! select/delete/undo/redo cycles over a populated page, history boundary
//! behavior, and randomized edit sequences.

use block_model::{Block, BlockId, PageModel};
use command_engine::BlockEditor;
use proptest::prelude::*;

fn five_block_page() -> PageModel {
    let mut page = PageModel::new(550.0, 400.0);
    for i in 0..5 {
        page.blocks
            .push(Block::new(format!("comp{i}"), i as f64 * 10.0, 0.0));
    }
    page
}

fn block_ids(editor: &BlockEditor) -> Vec<BlockId> {
    editor.model().blocks.iter().map(|b| b.id).collect()
}

#[test]
fn delete_two_of_five_blocks() {
    let mut editor = BlockEditor::with_model(five_block_page());
    let all = block_ids(&editor);
    editor.set_focus(&all[..2]);

    editor.delete().unwrap();

    let history = editor.commander().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), Some(0));
    assert_eq!(block_ids(&editor), all[2..].to_vec());
}

#[test]
fn undo_restores_deleted_blocks() {
    let mut editor = BlockEditor::with_model(five_block_page());
    let all = block_ids(&editor);
    editor.set_focus(&all[..2]);
    editor.delete().unwrap();

    editor.undo().unwrap();

    assert_eq!(editor.commander().history().cursor(), None);
    assert_eq!(block_ids(&editor), all);
}

#[test]
fn redo_reapplies_the_delete() {
    let mut editor = BlockEditor::with_model(five_block_page());
    let all = block_ids(&editor);
    editor.set_focus(&all[..2]);
    editor.delete().unwrap();
    editor.undo().unwrap();

    editor.redo().unwrap();

    assert_eq!(editor.commander().history().cursor(), Some(0));
    assert_eq!(block_ids(&editor), all[2..].to_vec());
}

#[test]
fn undo_on_fresh_editor_is_a_silent_noop() {
    let mut editor = BlockEditor::with_model(five_block_page());

    editor.undo().unwrap();

    assert_eq!(editor.commander().history().cursor(), None);
    assert_eq!(editor.model().block_count(), 5);
}

#[test]
fn redo_with_nothing_undone_is_a_silent_noop() {
    let mut editor = BlockEditor::with_model(five_block_page());
    let all = block_ids(&editor);
    editor.set_focus(&all[..1]);
    editor.delete().unwrap();

    editor.redo().unwrap();

    assert_eq!(editor.commander().history().cursor(), Some(0));
    assert_eq!(editor.model().block_count(), 4);
}

/// An edit made after an undo discards the undone entry: the old branch of
/// history must never resurface through redo.
#[test]
fn new_edit_after_undo_truncates_the_redo_tail() {
    let mut editor = BlockEditor::with_model(five_block_page());
    let all = block_ids(&editor);

    editor.set_focus(&all[..1]);
    editor.delete().unwrap();
    editor.set_focus(&[all[1]]);
    editor.delete().unwrap();
    assert_eq!(editor.commander().history().cursor(), Some(1));
    assert_eq!(editor.model().block_count(), 3);

    editor.undo().unwrap();
    assert_eq!(editor.commander().history().cursor(), Some(0));
    assert_eq!(editor.model().block_count(), 4);

    // brand-new edit while an entry sits beyond the cursor
    editor.set_focus(&[all[2]]);
    editor.delete().unwrap();
    let history = editor.commander().history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), Some(1));
    assert_eq!(editor.model().block_count(), 3);

    // redo must be a no-op; the discarded "delete all[1]" must not replay
    editor.redo().unwrap();
    assert_eq!(editor.model().block_count(), 3);
    assert!(block_ids(&editor).contains(&all[1]));
    assert!(!block_ids(&editor).contains(&all[2]));
}

#[test]
fn mixed_place_and_delete_history() {
    let mut editor = BlockEditor::with_model(five_block_page());

    editor.place_block("button", 50.0, 60.0).unwrap();
    assert_eq!(editor.model().block_count(), 6);

    let last = *block_ids(&editor).last().unwrap();
    editor.set_focus(&[last]);
    editor.delete().unwrap();
    assert_eq!(editor.model().block_count(), 5);

    editor.undo().unwrap();
    assert_eq!(editor.model().block_count(), 6);
    editor.undo().unwrap();
    assert_eq!(editor.model().block_count(), 5);
    assert!(!editor.can_undo());
}

#[derive(Debug, Clone)]
enum Op {
    Select(u8),
    Delete,
    Place(u8),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Select),
        Just(Op::Delete),
        (0u8..4).prop_map(Op::Place),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

proptest! {
    /// Any sequence of selections, edits, undos and redos keeps the cursor
    /// inside the history, and undoing everything walks the page back to
    /// its original block membership.
    #[test]
    fn random_edit_sequences_stay_consistent(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut editor = BlockEditor::with_model(five_block_page());
        let mut initial = block_ids(&editor);
        initial.sort();

        for op in ops {
            match op {
                Op::Select(mask) => {
                    let selected: Vec<BlockId> = editor
                        .model()
                        .blocks
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << (i % 8)) != 0)
                        .map(|(_, b)| b.id)
                        .collect();
                    editor.set_focus(&selected);
                }
                Op::Delete => editor.delete().unwrap(),
                Op::Place(k) => editor
                    .place_block(format!("comp{k}"), f64::from(k), f64::from(k))
                    .unwrap(),
                Op::Undo => editor.undo().unwrap(),
                Op::Redo => editor.redo().unwrap(),
            }

            let history = editor.commander().history();
            if let Some(cursor) = history.cursor() {
                prop_assert!(cursor < history.len());
            }
        }

        while editor.can_undo() {
            editor.undo().unwrap();
        }
        let mut final_ids = block_ids(&editor);
        final_ids.sort();
        prop_assert_eq!(final_ids, initial);
    }
}
