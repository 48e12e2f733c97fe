//! Application model for the layout editor.

use tuirealm::Update;

use crate::card_styles::{CardStyles, default_card_styles};
use crate::stores::{ConfigStore, LayoutEditStore};

use super::activities::Msg;

/// Application model containing all state.
///
/// Owns the working copy of the card style collection and writes through
/// the injected stores. The working copy is never persisted on its own:
/// only Start manual layout hands it to the configuration store.
pub struct Model {
    /// Working copy of the card style collection
    pub card_styles: CardStyles,

    // External collaborators
    config_store: Box<dyn ConfigStore>,
    edit_store: Box<dyn LayoutEditStore>,
    on_dismiss: Option<Box<dyn FnOnce()>>,

    // UI state
    pub quit: bool,
    pub manual_layout: bool,
    pub show_help: bool,
    pub message: Option<String>,
}

impl Model {
    pub fn new(
        card_styles: CardStyles,
        config_store: Box<dyn ConfigStore>,
        edit_store: Box<dyn LayoutEditStore>,
    ) -> Self {
        Self {
            card_styles,
            config_store,
            edit_store,
            on_dismiss: None,
            quit: false,
            manual_layout: false,
            show_help: false,
            message: None,
        }
    }

    /// Register a callback invoked after manual layout mode is entered.
    pub fn with_on_dismiss(mut self, on_dismiss: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(on_dismiss));
        self
    }

    /// Whether the global layout-edit mode is already active.
    pub fn editing(&self) -> bool {
        self.edit_store.editing()
    }

    /// Replace the working collection with the bundled defaults.
    pub fn reset(&mut self) {
        self.card_styles = default_card_styles().clone();
        self.message = Some("Card styles reset to defaults".to_string());
        tracing::info!("card styles reset to bundled defaults");
    }

    /// Commit the working collection and enter manual layout mode.
    ///
    /// A no-op while edit mode is already active: nothing is committed and
    /// the mode flag is untouched. If the commit fails the mode transition
    /// is aborted and the error is surfaced in the status line.
    pub fn start_manual_layout(&mut self) {
        if self.edit_store.editing() {
            tracing::warn!("manual layout already active, ignoring");
            return;
        }

        match self.config_store.set_card_styles(self.card_styles.clone()) {
            Ok(()) => {
                self.edit_store.start_editing();
                if let Some(on_dismiss) = self.on_dismiss.take() {
                    on_dismiss();
                }
                self.manual_layout = true;
            }
            Err(e) => {
                tracing::error!("failed to commit card styles: {e:#}");
                self.message = Some(format!("Commit failed: {e}"));
            }
        }
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        // Status messages show until the next interaction
        self.message = None;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }

            Msg::FieldEdited(edit) => {
                self.card_styles.apply(&edit);
                None
            }

            Msg::Reset => {
                self.reset();
                None
            }

            Msg::StartManualLayout => {
                self.start_manual_layout();
                None
            }

            Msg::ShowHelp => {
                self.show_help = true;
                None
            }

            // Handled at the activity level
            Msg::FocusNext | Msg::FocusPrev => None,
        }
    }
}
