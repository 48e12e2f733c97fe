//! Tests for the editor model's commit/reset protocol against mock stores.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use color_eyre::eyre::{Result, eyre};
use tuirealm::Update;

use homecard::card_styles::{CardStyles, FieldEdit, StyleEdit, default_card_styles};
use homecard::stores::{ConfigStore, LayoutEditStore};
use homecard::tui::Model;
use homecard::tui::activities::Msg;

/// Config store that records every committed collection.
struct RecordingConfigStore {
    committed: Rc<RefCell<Vec<CardStyles>>>,
    fail: bool,
}

impl ConfigStore for RecordingConfigStore {
    fn set_card_styles(&mut self, styles: CardStyles) -> Result<()> {
        if self.fail {
            return Err(eyre!("store unavailable"));
        }
        self.committed.borrow_mut().push(styles);
        Ok(())
    }
}

/// Edit-mode flag observable from outside the model.
struct SharedEditState(Rc<Cell<bool>>);

impl LayoutEditStore for SharedEditState {
    fn editing(&self) -> bool {
        self.0.get()
    }

    fn start_editing(&mut self) {
        self.0.set(true);
    }
}

struct Harness {
    model: Model,
    committed: Rc<RefCell<Vec<CardStyles>>>,
    editing: Rc<Cell<bool>>,
    dismissed: Rc<Cell<u32>>,
}

impl Harness {
    fn send(&mut self, msg: Msg) {
        let _ = self.model.update(Some(msg));
    }
}

fn harness(initially_editing: bool, commit_fails: bool) -> Harness {
    let committed = Rc::new(RefCell::new(Vec::new()));
    let editing = Rc::new(Cell::new(initially_editing));
    let dismissed = Rc::new(Cell::new(0));

    let config_store = RecordingConfigStore {
        committed: Rc::clone(&committed),
        fail: commit_fails,
    };
    let edit_store = SharedEditState(Rc::clone(&editing));

    let dismissed_handle = Rc::clone(&dismissed);
    let model = Model::new(
        default_card_styles().clone(),
        Box::new(config_store),
        Box::new(edit_store),
    )
    .with_on_dismiss(move || dismissed_handle.set(dismissed_handle.get() + 1));

    Harness {
        model,
        committed,
        editing,
        dismissed,
    }
}

#[test]
fn test_field_edit_flows_into_working_copy() {
    let mut h = harness(false, false);

    h.send(Msg::FieldEdited(StyleEdit {
        key: "clockCard".to_string(),
        edit: FieldEdit::OffsetX(Some(-40)),
    }));

    assert_eq!(
        h.model.card_styles.get("clockCard").unwrap().offset_x,
        Some(-40)
    );
}

#[test]
fn test_start_manual_layout_commits_edited_collection() {
    let mut h = harness(false, false);

    // Edit first, then start: the edited collection is what gets committed
    h.send(Msg::FieldEdited(StyleEdit {
        key: "artCard".to_string(),
        edit: FieldEdit::Width(999),
    }));
    h.send(Msg::StartManualLayout);

    let committed = h.committed.borrow();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].get("artCard").unwrap().width, Some(999));
    assert!(h.editing.get());
    assert_eq!(h.dismissed.get(), 1);
    assert!(h.model.manual_layout);
}

#[test]
fn test_start_manual_layout_is_noop_while_already_editing() {
    let mut h = harness(true, false);

    h.send(Msg::StartManualLayout);

    assert!(h.committed.borrow().is_empty());
    assert_eq!(h.dismissed.get(), 0);
    assert!(!h.model.manual_layout);
}

#[test]
fn test_commit_failure_aborts_mode_transition() {
    let mut h = harness(false, true);

    h.send(Msg::StartManualLayout);

    assert!(!h.editing.get());
    assert_eq!(h.dismissed.get(), 0);
    assert!(!h.model.manual_layout);
    assert!(h.model.message.as_deref().unwrap().contains("Commit failed"));
}

#[test]
fn test_reset_discards_edits() {
    let mut h = harness(false, false);

    h.send(Msg::FieldEdited(StyleEdit {
        key: "clockCard".to_string(),
        edit: FieldEdit::Order(99),
    }));
    assert_eq!(h.model.card_styles.get("clockCard").unwrap().order, 99);

    h.send(Msg::Reset);

    assert_eq!(&h.model.card_styles, default_card_styles());
}

#[test]
fn test_reset_does_not_touch_the_store() {
    let mut h = harness(false, false);

    h.send(Msg::Reset);

    // Reset is local to the working copy; only Start manual layout commits
    assert!(h.committed.borrow().is_empty());
    assert!(!h.editing.get());
}

#[test]
fn test_status_message_clears_on_next_interaction() {
    let mut h = harness(false, false);

    h.send(Msg::Reset);
    assert!(h.model.message.is_some());

    // Any subsequent message restores the normal footer
    h.send(Msg::FieldEdited(StyleEdit {
        key: "clockCard".to_string(),
        edit: FieldEdit::Order(2),
    }));
    assert!(h.model.message.is_none());
}

#[test]
fn test_commit_failure_message_clears_on_next_interaction() {
    let mut h = harness(false, true);

    h.send(Msg::StartManualLayout);
    assert!(h.model.message.as_deref().unwrap().contains("Commit failed"));

    h.send(Msg::FocusNext);
    assert!(h.model.message.is_none());
}

#[test]
fn test_quit_sets_flag() {
    let mut h = harness(false, false);
    h.send(Msg::Quit);
    assert!(h.model.quit);
}
