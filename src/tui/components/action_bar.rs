//! Reset / Start-manual-layout action bar component.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::tui::activities::{Msg, layout::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Which button is focused within the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ActionFocus {
    #[default]
    Reset,
    ManualLayout,
}

/// Action bar with the Reset and Start-manual-layout buttons.
///
/// The manual layout button is disabled (alternate label, no activation)
/// while the global layout-edit mode is already active.
pub struct ActionBar {
    props: Props,
    /// Snapshot of the layout-edit store's state at mount time
    editing: bool,
    sub_focus: ActionFocus,
}

impl ActionBar {
    pub fn new(editing: bool) -> Self {
        Self {
            props: Props::default(),
            editing,
            sub_focus: ActionFocus::Reset,
        }
    }

    fn activate(&self) -> Option<Msg> {
        match self.sub_focus {
            ActionFocus::Reset => Some(Msg::Reset),
            ActionFocus::ManualLayout => {
                if self.editing {
                    // Already in manual layout; the control is disabled
                    None
                } else {
                    Some(Msg::StartManualLayout)
                }
            }
        }
    }
}

impl MockComponent for ActionBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(40)])
            .split(area);

        // Hint text, matching the homepage dialog
        let hint = Paragraph::new("(Offset from center)")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(hint, cols[0]);

        let button_style = |active: bool, enabled: bool| {
            if !enabled {
                Style::default().fg(Color::DarkGray)
            } else if focused && active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            }
        };

        let manual_label = if self.editing {
            "[ editing homepage ]"
        } else {
            "[ Drag to layout ]"
        };

        let line = Line::from(vec![
            Span::styled(
                "[ Reset ]",
                button_style(self.sub_focus == ActionFocus::Reset, true),
            ),
            Span::raw("  "),
            Span::styled(
                manual_label,
                button_style(self.sub_focus == ActionFocus::ManualLayout, !self.editing),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), cols[1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.sub_focus = ActionFocus::Reset;
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Right) => {
                self.sub_focus = ActionFocus::ManualLayout;
                CmdResult::None
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for ActionBar {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),

            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                self.perform(Cmd::Move(CmdDirection::Left));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.perform(Cmd::Move(CmdDirection::Right));
                None
            }

            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => self.activate(),

            _ => None,
        }
    }
}
