//! Layout activity - the card style editing screen.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::card_styles::StyleEdit;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    ActionBar, EDITOR_FOOTER_ACTIONS, StyleTable, format_footer, render_help,
};

// ============================================================================
// Component identifiers
// ============================================================================

/// Unique identifiers for all components in LayoutActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    /// Editable card/attribute table
    StyleTable,
    /// Reset and Start-manual-layout buttons
    ActionBar,
}

// ============================================================================
// Messages
// ============================================================================

/// All possible messages that can be sent in LayoutActivity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    /// One field of one card changed
    FieldEdited(StyleEdit),

    /// Replace the working collection with the bundled defaults
    Reset,

    /// Commit the working collection and enter manual layout mode
    StartManualLayout,
}

// ============================================================================
// User events (required by tui-realm, currently unused)
// ============================================================================

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Focus management
// ============================================================================

/// All focusable component IDs in order.
const ALL_FOCUS_IDS: &[Id] = &[Id::StyleTable, Id::ActionBar];

/// Manages focus state for Tab navigation in LayoutActivity.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        Self { current_idx: 0 }
    }

    /// Get the current focus component ID.
    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::StyleTable)
    }

    /// Move focus to next component and return its ID.
    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    /// Move focus to previous component and return its ID.
    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// LayoutActivity
// ============================================================================

/// The card style editing activity.
#[derive(Default)]
pub struct LayoutActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl LayoutActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount all initial components.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let table = StyleTable::new(model.card_styles.clone());
        app.mount(Id::StyleTable, Box::new(table), vec![])?;

        let action_bar = ActionBar::new(model.editing());
        app.mount(Id::ActionBar, Box::new(action_bar), vec![])?;

        // Set initial focus
        app.active(&Id::StyleTable)?;

        Ok(())
    }

    /// Remount the table from the model's collection (after Reset).
    fn sync_table(app: &mut Application<Id, Msg, UserEvent>, model: &Model) {
        let _ = app.umount(&Id::StyleTable);
        let table = StyleTable::new(model.card_styles.clone());
        let _ = app.mount(Id::StyleTable, Box::new(table), vec![]);
    }
}

impl Activity for LayoutActivity {
    fn on_create(&mut self, context: Context) {
        self.context = Some(context);
        let mut app = Self::create_application();

        let model = &self.context.as_ref().expect("context should be set").model;
        if let Err(e) = Self::mount_components(&mut app, model) {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self.app.as_mut().expect("app should be initialized");
        let model = &mut self.context.as_mut().expect("context should be set").model;

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Length(1), // Action bar
                    Constraint::Min(5),    // Table
                    Constraint::Length(1), // Status
                ])
                .split(area);

            // Title bar
            let title = format!(" Homepage Layout - {} cards ", model.card_styles.len());
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            // Render components
            app.view(&Id::ActionBar, frame, main_rows[1]);
            app.view(&Id::StyleTable, frame, main_rows[2]);

            // Status bar
            let status = model
                .message
                .clone()
                .unwrap_or_else(|| format_footer(EDITOR_FOOTER_ACTIONS, &[("adjust", "[]/{}")]));

            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[3]);

            // Help modal overlay
            if model.show_help {
                render_help(frame);
            }
        })?;

        // Handle help modal events separately (intercepts all input when visible)
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                let mut needs_sync = false;

                for msg in messages {
                    // Handle focus changes at activity level
                    match &msg {
                        Msg::FocusNext => {
                            let next = self.focus.focus_next();
                            let _ = app.active(&next);
                        }
                        Msg::FocusPrev => {
                            let prev = self.focus.focus_prev();
                            let _ = app.active(&prev);
                        }
                        Msg::Reset => {
                            needs_sync = true;
                        }
                        _ => {}
                    }

                    // Check for quit
                    if matches!(msg, Msg::Quit) {
                        self.exit_reason = Some(ExitReason::Quit);
                        return Ok(());
                    }

                    // Process through model, handle chained messages
                    let mut current = Some(msg);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }
                }

                // Entering manual layout mode ends the session
                if model.manual_layout {
                    self.exit_reason = Some(ExitReason::ManualLayout);
                    return Ok(());
                }

                // Sync the table after a reset
                if needs_sync {
                    Self::sync_table(app, model);
                    // Restore focus after remounting
                    let _ = app.active(&self.focus.current_focus());
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
