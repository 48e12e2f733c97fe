//! Interactive TUI for editing homepage card layout.
//!
//! Architecture: Activity-based with tui-realm for components.
//! The layout editor screen owns its Application instance and message types.

pub mod activities;
mod activity;
mod components;
mod model;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher, defaults,
    keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::card_styles::CardStyles;
use crate::stores::{JsonConfigStore, LayoutEditState};

pub use model::Model;

use activities::Msg;
use activity::{ActivityManager, Context};

// ============================================================================
// Event handling
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Replace the working collection with the bundled defaults
    Reset,
    /// Commit styles and enter manual layout mode
    StartManualLayout,
    /// Increment value by small step (1)
    ValueIncrementSmall,
    /// Decrement value by small step (1)
    ValueDecrementSmall,
    /// Increment value by large step (5)
    ValueIncrementLarge,
    /// Decrement value by large step (5)
    ValueDecrementLarge,
}

/// Global dispatcher instance - shared by all components.
/// Using LazyLock for zero-cost lazy initialization.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    // Add custom bindings
    config.bind(
        ActionBinding::builder()
            .action(AppAction::Reset)
            .key(keys::char('r'))
            .description("Reset to defaults")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::StartManualLayout)
            .key(keys::char('m'))
            .description("Drag to layout")
            .build(),
    );

    // Value adjustment bindings: [/] for small steps, {/} for large steps
    config.bind(
        ActionBinding::builder()
            .action(AppAction::ValueDecrementSmall)
            .key(keys::char('['))
            .description("Decrease value")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::ValueIncrementSmall)
            .key(keys::char(']'))
            .description("Increase value")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::ValueDecrementLarge)
            .key(keys::char('{'))
            .description("Decrease value (5x)")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::ValueIncrementLarge)
            .key(keys::char('}'))
            .description("Increase value (5x)")
            .build(),
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::Reset => Some(Msg::Reset),
        AppAction::StartManualLayout => Some(Msg::StartManualLayout),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// How the editor session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// User quit; the working copy is discarded.
    Quit,
    /// User entered manual layout mode; styles were committed to the store.
    ManualLayout,
}

/// Run the interactive layout editor.
pub fn run(styles: CardStyles, store: JsonConfigStore) -> Result<SessionOutcome> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let model = Model::new(styles, Box::new(store), Box::new(LayoutEditState::new()))
        .with_on_dismiss(|| tracing::info!("editor dismissed for manual layout"));

    // Create context and activity manager
    let context = Context { model };
    let mut manager = ActivityManager::new(context);

    // Run the activity loop
    let result = manager.run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
