//! Activity-based architecture for the TUI.
//!
//! The editor has a single activity, but it keeps its own tui-realm
//! Application, component IDs, and message types behind the Activity
//! lifecycle so the manager owns terminal teardown and session outcome.

use std::io::Stdout;

use color_eyre::eyre::Result;
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::SessionOutcome;
use super::activities::LayoutActivity;

/// Shared context passed to the activity.
pub struct Context {
    pub model: Model,
}

/// Exit reasons for ending the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    ManualLayout,
}

/// Activity lifecycle trait.
///
/// The activity owns its own tui-realm Application and handles its own events.
pub trait Activity {
    /// Initialize the activity with context from the manager.
    fn on_create(&mut self, context: Context);

    /// Draw the UI and handle one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Check if activity wants to exit. Returns Some(reason) to exit, None to continue.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Clean up and return the context to the manager.
    fn on_destroy(&mut self) -> Option<Context>;
}

/// Manages the activity lifecycle and maps its exit to a session outcome.
pub struct ActivityManager {
    context: Option<Context>,
}

impl ActivityManager {
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<SessionOutcome> {
        let mut activity: Box<dyn Activity> = Box::<LayoutActivity>::default();

        activity.on_create(self.context.take().expect("context should be available"));

        loop {
            activity.on_draw(terminal)?;

            if let Some(reason) = activity.will_umount() {
                let outcome = match reason {
                    ExitReason::Quit => SessionOutcome::Quit,
                    ExitReason::ManualLayout => SessionOutcome::ManualLayout,
                };
                self.context = activity.on_destroy();
                return Ok(outcome);
            }
        }
    }
}
