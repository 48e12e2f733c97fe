//! Editable card style table component.
//!
//! One row per card in collection iteration order, one column per layout
//! attribute. Cells for absent width/height render a fixed `-` and accept
//! no input; unset offsets render a `null` placeholder and can be cleared
//! back to unset by confirming an empty edit buffer.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::card_styles::{CardStyle, CardStyles, FieldEdit, StyleEdit};
use crate::coerce::{parse_dimension, parse_offset, parse_order};
use crate::labels::card_label;
use crate::tui::activities::{Msg, layout::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

/// Editable attribute columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Col {
    Width,
    Height,
    Order,
    OffsetX,
    OffsetY,
    Enabled,
}

impl Col {
    fn next(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Order,
            Self::Order => Self::OffsetX,
            Self::OffsetX => Self::OffsetY,
            Self::OffsetY => Self::Enabled,
            Self::Enabled => Self::Enabled,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Width => Self::Width,
            Self::Height => Self::Width,
            Self::Order => Self::Height,
            Self::OffsetX => Self::Order,
            Self::OffsetY => Self::OffsetX,
            Self::Enabled => Self::OffsetY,
        }
    }

    /// Whether this column takes typed numeric input.
    fn is_numeric(self) -> bool {
        !matches!(self, Self::Enabled)
    }

    /// Whether negative values are meaningful in this column.
    fn is_signed(self) -> bool {
        matches!(self, Self::Order | Self::OffsetX | Self::OffsetY)
    }
}

/// Column header labels (first column is the card label).
const HEADERS: &[&str] = &["Card", "Width", "Height", "Order", "Offset X", "Offset Y", "On"];

/// Cell widths: label column plus one per attribute.
const COLUMN_CONSTRAINTS: [Constraint; 7] = [
    Constraint::Length(14),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Length(11),
    Constraint::Length(11),
    Constraint::Length(4),
];

/// Editable card/attribute table with cell-level focus.
pub struct StyleTable {
    props: Props,
    styles: CardStyles,
    row: usize,
    col: Col,
    /// Whether currently editing the focused cell
    editing: bool,
    /// Buffer for typed input during editing
    edit_buffer: String,
}

impl StyleTable {
    pub fn new(styles: CardStyles) -> Self {
        Self {
            props: Props::default(),
            styles,
            row: 0,
            col: Col::Width,
            editing: false,
            edit_buffer: String::new(),
        }
    }

    fn current_key(&self) -> Option<String> {
        self.styles.keys().nth(self.row).cloned()
    }

    fn current_record(&self) -> Option<&CardStyle> {
        let key = self.styles.keys().nth(self.row)?;
        self.styles.get(key)
    }

    /// Whether the focused cell accepts typed input. Absent width/height
    /// cells are fixed `-` placeholders.
    fn cell_editable(&self) -> bool {
        let Some(record) = self.current_record() else {
            return false;
        };
        match self.col {
            Col::Width => record.width.is_some(),
            Col::Height => record.height.is_some(),
            Col::Order | Col::OffsetX | Col::OffsetY => true,
            Col::Enabled => false,
        }
    }

    fn start_editing(&mut self) {
        if !self.col.is_numeric() || !self.cell_editable() {
            return;
        }
        let Some(record) = self.current_record() else {
            return;
        };
        // Unset offsets prefill as empty so Enter keeps them unset
        self.edit_buffer = match self.col {
            Col::Width => record.width.map(|v| v.to_string()).unwrap_or_default(),
            Col::Height => record.height.map(|v| v.to_string()).unwrap_or_default(),
            Col::Order => record.order.to_string(),
            Col::OffsetX => record.offset_x.map(|v| v.to_string()).unwrap_or_default(),
            Col::OffsetY => record.offset_y.map(|v| v.to_string()).unwrap_or_default(),
            Col::Enabled => return,
        };
        self.editing = true;
    }

    fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Coerce the buffer, merge into the local copy, and report the edit.
    fn confirm_editing(&mut self) -> Option<Msg> {
        self.editing = false;
        let key = self.current_key()?;

        let edit = match self.col {
            Col::Width => FieldEdit::Width(parse_dimension(&self.edit_buffer)),
            Col::Height => FieldEdit::Height(parse_dimension(&self.edit_buffer)),
            Col::Order => FieldEdit::Order(parse_order(&self.edit_buffer)),
            Col::OffsetX => FieldEdit::OffsetX(parse_offset(&self.edit_buffer)),
            Col::OffsetY => FieldEdit::OffsetY(parse_offset(&self.edit_buffer)),
            Col::Enabled => return None,
        };
        self.edit_buffer.clear();

        let style_edit = StyleEdit { key, edit };
        self.styles.apply(&style_edit);
        Some(Msg::FieldEdited(style_edit))
    }

    fn type_char(&mut self, c: char) {
        let signed_start = self.edit_buffer.is_empty() && self.col.is_signed();
        if c.is_ascii_digit() || (c == '-' && signed_start) {
            self.edit_buffer.push(c);
        }
    }

    fn delete_char(&mut self) {
        self.edit_buffer.pop();
    }

    fn toggle_enabled(&mut self) -> Option<Msg> {
        let key = self.current_key()?;
        let enabled = self.current_record()?.is_enabled();
        let style_edit = StyleEdit {
            key,
            edit: FieldEdit::Enabled(!enabled),
        };
        self.styles.apply(&style_edit);
        Some(Msg::FieldEdited(style_edit))
    }

    /// Step the focused numeric cell by `delta`.
    fn adjust_current(&mut self, delta: i64) -> Option<Msg> {
        if !self.cell_editable() {
            return None;
        }
        let key = self.current_key()?;
        let record = self.current_record()?;

        let edit = match self.col {
            Col::Width => {
                let current = i64::from(record.width?);
                FieldEdit::Width(u32::try_from((current + delta).max(0)).unwrap_or(u32::MAX))
            }
            Col::Height => {
                let current = i64::from(record.height?);
                FieldEdit::Height(u32::try_from((current + delta).max(0)).unwrap_or(u32::MAX))
            }
            Col::Order => FieldEdit::Order(record.order.saturating_add(delta)),
            // Stepping an unset offset starts from 0
            Col::OffsetX => {
                FieldEdit::OffsetX(Some(record.offset_x.unwrap_or(0).saturating_add(delta)))
            }
            Col::OffsetY => {
                FieldEdit::OffsetY(Some(record.offset_y.unwrap_or(0).saturating_add(delta)))
            }
            Col::Enabled => return None,
        };

        let style_edit = StyleEdit { key, edit };
        self.styles.apply(&style_edit);
        Some(Msg::FieldEdited(style_edit))
    }

    /// Text and emphasis for one cell of one record.
    fn cell_text(record: &CardStyle, col: Col) -> (String, bool) {
        match col {
            Col::Width => match record.width {
                Some(v) => (v.to_string(), false),
                None => ("-".to_string(), true),
            },
            Col::Height => match record.height {
                Some(v) => (v.to_string(), false),
                None => ("-".to_string(), true),
            },
            Col::Order => (record.order.to_string(), false),
            Col::OffsetX => match record.offset_x {
                Some(v) => (v.to_string(), false),
                None => ("null".to_string(), true),
            },
            Col::OffsetY => match record.offset_y {
                Some(v) => (v.to_string(), false),
                None => ("null".to_string(), true),
            },
            Col::Enabled => {
                let mark = if record.is_enabled() { "[x]" } else { "[ ]" };
                (mark.to_string(), false)
            }
        }
    }

    fn draw_row(&self, frame: &mut Frame, area: Rect, key: &str, record: &CardStyle, focused: bool) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(COLUMN_CONSTRAINTS)
            .split(area);

        // Card label; dimmed when the card is disabled
        let label_style = if record.is_enabled() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(card_label(key)).style(label_style), cols[0]);

        let columns = [
            Col::Width,
            Col::Height,
            Col::Order,
            Col::OffsetX,
            Col::OffsetY,
            Col::Enabled,
        ];

        for (i, col) in columns.iter().enumerate() {
            let cell_area = cols[i + 1];
            let cell_focused = focused && self.col == *col;

            if cell_focused && self.editing {
                let line = Line::from(Span::styled(
                    self.edit_buffer.clone(),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ));
                frame.render_widget(Paragraph::new(line), cell_area);
                continue;
            }

            let (text, placeholder) = Self::cell_text(record, *col);
            let style = if cell_focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if placeholder {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            frame.render_widget(Paragraph::new(text).style(style), cell_area);
        }
    }
}

impl MockComponent for StyleTable {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        // Header + one row per card
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(1), self.styles.len()));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        // Header row
        let header_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(COLUMN_CONSTRAINTS)
            .split(rows[0]);
        for (i, header) in HEADERS.iter().enumerate() {
            let widget =
                Paragraph::new(*header).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(widget, header_cols[i]);
        }

        let styles = self.styles.clone();
        for (i, (key, record)) in styles.iter().enumerate() {
            self.draw_row(frame, rows[i + 1], key, record, focused && self.row == i);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::U8(self.row as u8))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                self.row = self.row.saturating_sub(1);
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Down) => {
                if self.row + 1 < self.styles.len() {
                    self.row += 1;
                }
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Left) => {
                self.col = self.col.prev();
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Right) => {
                self.col = self.col.next();
                CmdResult::None
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for StyleTable {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        // Extract keyboard event
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Handle editing mode separately (raw key input)
        if self.editing {
            match key_event.code {
                tuirealm::event::Key::Enter => {
                    return self.confirm_editing();
                }
                tuirealm::event::Key::Esc => {
                    self.cancel_editing();
                    return None;
                }
                tuirealm::event::Key::Backspace => {
                    self.delete_char();
                    return None;
                }
                tuirealm::event::Key::Char(c) => {
                    self.type_char(c);
                    return None;
                }
                _ => return None,
            }
        }

        // Space toggles the enabled cell
        if let tuirealm::event::Key::Char(' ') = key_event.code
            && self.col == Col::Enabled
        {
            return self.toggle_enabled();
        }

        // Digits (or a minus on signed columns) start editing directly
        if let tuirealm::event::Key::Char(c) = key_event.code
            && (c.is_ascii_digit() || (c == '-' && self.col.is_signed()))
            && self.cell_editable()
        {
            self.editing = true;
            self.edit_buffer.clear();
            self.edit_buffer.push(c);
            return None;
        }

        // Use dispatcher to convert to semantic action
        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            // Tab bubbles up for component navigation
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),

            // Enter toggles the enabled cell or starts editing a numeric one
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => {
                if self.col == Col::Enabled {
                    self.toggle_enabled()
                } else {
                    self.start_editing();
                    None
                }
            }

            // Cell navigation
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                self.perform(Cmd::Move(CmdDirection::Left));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.perform(Cmd::Move(CmdDirection::Right));
                None
            }

            // Value adjustment: [/] for ±1, {/} for ±5
            AppAction::ValueDecrementSmall => self.adjust_current(-1),
            AppAction::ValueIncrementSmall => self.adjust_current(1),
            AppAction::ValueDecrementLarge => self.adjust_current(-5),
            AppAction::ValueIncrementLarge => self.adjust_current(5),

            _ => None,
        }
    }
}
