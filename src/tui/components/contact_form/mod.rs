//! # ContactForm Component
//!
//! The contact form: Name, Email, Message and a Send button.
//!
//! ## State Management
//!
//! Field values belong to the core (`ContactForm`), because the reducer
//! validates and clears them. This component owns only presentation state:
//! which element has focus, a cursor per field, and where each element was
//! last laid out (for mouse hit-tests and the terminal cursor).
//!
//! - `ContactFormState` lives in `TuiState`
//! - `ContactFormEditor` is created per event with borrowed state and values
//! - `ContactFormView` is the widget drawn inside the page's scroll view
//!
//! ```text
//! ╭ Your Name ──────────────╮
//! │ Ada Lovelace            │
//! ╰─────────────────────────╯
//! ╭ Your Email ─────────────╮
//! ╰─────────────────────────╯
//! ╭ Your Message ───────────╮
//! │ (5 lines, scrolls)      │
//! ╰─────────────────────────╯
//!  inline validation error
//!       ╭──────────────╮
//!       │ Send Message │
//!       ╰──────────────╯
//! ```

mod cursor;
mod text_wrap;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::form::{ContactForm, Field, FormError};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

use cursor::CursorState;
use text_wrap::{
    MESSAGE_LINES, TEXT_OFFSET_X, TEXT_OFFSET_Y, inner_width, next_char_boundary,
    prev_char_boundary, visible_slice, wrap_options,
};

/// Rows the form occupies.
pub const FORM_HEIGHT: u16 = 3 + 3 + (MESSAGE_LINES + 2) + 1 + 3;
/// Widest the form gets on large terminals.
const MAX_FORM_WIDTH: u16 = 72;
const SEND_WIDTH: u16 = 20;

/// Focusable elements, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Send,
}

impl Focus {
    pub const ORDER: [Focus; 4] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::Email),
        Focus::Field(Field::Message),
        Focus::Send,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Send was activated (Enter on Send, Ctrl+S, click).
    Submit,
    ContentChanged,
    FocusChanged,
}

/// Where each element sits, for a form drawn in a given area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormLayout {
    pub name: Rect,
    pub email: Rect,
    pub message: Rect,
    pub error: Rect,
    pub send: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let width = area.width.saturating_sub(4).min(MAX_FORM_WIDTH);
        let x = area.x + 2;
        let row = |dy: u16, height: u16| Rect::new(x, area.y + dy, width, height);
        let message_height = MESSAGE_LINES + 2;
        let send_y = 6 + message_height + 1;
        Self {
            name: row(0, 3),
            email: row(3, 3),
            message: row(6, message_height),
            error: row(6 + message_height, 1),
            send: Rect::new(
                x + width.saturating_sub(SEND_WIDTH) / 2,
                area.y + send_y,
                SEND_WIDTH.min(width),
                3,
            ),
        }
    }

    pub fn field(&self, field: Field) -> Rect {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn rect(&self, focus: Focus) -> Rect {
        match focus {
            Focus::Field(field) => self.field(field),
            Focus::Send => self.send,
        }
    }
}

fn slot(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Message => 2,
    }
}

/// Presentation state for the form. Must be persisted in the parent TuiState.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    pub focus: Focus,
    cursors: [CursorState; 3],
    /// Layout from the last render, in the coordinates it was drawn in
    pub layout: FormLayout,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Field(Field::Name),
            cursors: Default::default(),
            layout: FormLayout::new(Rect::new(0, 0, 80, FORM_HEIGHT)),
        }
    }

    fn cursor(&self, field: Field) -> &CursorState {
        &self.cursors[slot(field)]
    }

    fn cursor_mut(&mut self, field: Field) -> &mut CursorState {
        &mut self.cursors[slot(field)]
    }

    /// Lay the form out in `area` and bring every cursor into view.
    pub fn prepare(&mut self, form: &ContactForm, area: Rect) {
        self.layout = FormLayout::new(area);
        for field in Field::ALL {
            let width = self.layout.field(field).width;
            let value = form.value(field);
            let cursor = self.cursor_mut(field);
            cursor.clamp(value);
            if field.is_multiline() {
                cursor.follow_multiline(value, width);
            } else {
                cursor.follow_single_line(value, width);
            }
        }
    }

    /// Element under (`x`, `y`) in layout coordinates.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Focus> {
        let pos = Position { x, y };
        Focus::ORDER
            .into_iter()
            .find(|&focus| self.layout.rect(focus).contains(pos))
    }

    /// Where the terminal cursor belongs, in layout coordinates.
    pub fn cursor_position(&self, form: &ContactForm) -> Option<Position> {
        let Focus::Field(field) = self.focus else {
            return None;
        };
        let rect = self.layout.field(field);
        let value = form.value(field);
        let cursor = self.cursor(field);

        let (col, row) = if field.is_multiline() {
            let line = cursor.line(value, rect.width);
            (
                cursor.column(value, rect.width),
                line.saturating_sub(cursor.scroll),
            )
        } else {
            let col = text_wrap::display_width(&value[..cursor.pos]);
            let width = inner_width(rect.width);
            let visible = u16::try_from(col.saturating_sub(cursor.scroll)).unwrap_or(width);
            (visible.min(width), 0)
        };
        let row = u16::try_from(row).unwrap_or(MESSAGE_LINES);
        Some(Position {
            x: rect.x.saturating_add(TEXT_OFFSET_X).saturating_add(col),
            y: rect.y.saturating_add(TEXT_OFFSET_Y).saturating_add(row),
        })
    }
}

/// Transient editor pairing form state with the field values it edits.
pub struct ContactFormEditor<'a> {
    state: &'a mut ContactFormState,
    form: &'a mut ContactForm,
}

impl<'a> ContactFormEditor<'a> {
    pub fn new(state: &'a mut ContactFormState, form: &'a mut ContactForm) -> Self {
        for field in Field::ALL {
            state.cursor_mut(field).clamp(form.value(field));
        }
        Self { state, form }
    }

    fn set_focus(&mut self, focus: Focus) -> Option<FormEvent> {
        self.state.focus = focus;
        Some(FormEvent::FocusChanged)
    }

    fn insert(&mut self, field: Field, text: &str) -> Option<FormEvent> {
        let text = if field.is_multiline() {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        if text.is_empty() {
            return None;
        }
        let pos = self.state.cursor(field).pos;
        self.form.value_mut(field).insert_str(pos, &text);
        self.state.cursor_mut(field).pos = pos + text.len();
        Some(FormEvent::ContentChanged)
    }

    fn edit(&mut self, field: Field, event: &TuiEvent) -> Option<FormEvent> {
        let box_width = self.state.layout.field(field).width;
        let value = self.form.value_mut(field);
        let cursor = &mut self.state.cursors[slot(field)];
        match event {
            TuiEvent::Backspace if cursor.pos > 0 => {
                let prev = prev_char_boundary(value, cursor.pos);
                value.drain(prev..cursor.pos);
                cursor.pos = prev;
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Delete if cursor.pos < value.len() => {
                let next = next_char_boundary(value, cursor.pos);
                value.drain(cursor.pos..next);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::CursorLeft if cursor.pos > 0 => {
                cursor.pos = prev_char_boundary(value, cursor.pos);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::CursorRight if cursor.pos < value.len() => {
                cursor.pos = next_char_boundary(value, cursor.pos);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::CursorHome => {
                let line_start = value[..cursor.pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                (cursor.pos != line_start).then(|| {
                    cursor.pos = line_start;
                    FormEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = value[cursor.pos..]
                    .find('\n')
                    .map(|i| cursor.pos + i)
                    .unwrap_or(value.len());
                (cursor.pos != line_end).then(|| {
                    cursor.pos = line_end;
                    FormEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp if field.is_multiline() => cursor
                .move_vertically(value, -1, box_width)
                .then_some(FormEvent::ContentChanged),
            TuiEvent::CursorDown if field.is_multiline() => cursor
                .move_vertically(value, 1, box_width)
                .then_some(FormEvent::ContentChanged),
            _ => None,
        }
    }
}

impl EventHandler for ContactFormEditor<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let focus = self.state.focus;
        match (event, focus) {
            (TuiEvent::SendForm, _) => Some(FormEvent::Submit),
            (TuiEvent::NextFocus, _) => self.set_focus(focus.next()),
            (TuiEvent::PrevFocus, _) => self.set_focus(focus.prev()),

            (TuiEvent::Submit, Focus::Send) => Some(FormEvent::Submit),
            (TuiEvent::InputChar(' '), Focus::Send) => Some(FormEvent::Submit),
            (TuiEvent::CursorUp, Focus::Send) => self.set_focus(focus.prev()),
            (_, Focus::Send) => None,

            (TuiEvent::Submit, Focus::Field(Field::Message)) => self.insert(Field::Message, "\n"),
            (TuiEvent::Submit, Focus::Field(_)) => self.set_focus(focus.next()),
            (TuiEvent::CursorDown, Focus::Field(f)) if !f.is_multiline() => {
                self.set_focus(focus.next())
            }
            (TuiEvent::CursorUp, Focus::Field(f)) if !f.is_multiline() => match focus.prev() {
                Focus::Send => None,
                prev => self.set_focus(prev),
            },
            (TuiEvent::InputChar(c), Focus::Field(f)) => {
                let mut buf = [0u8; 4];
                self.insert(f, c.encode_utf8(&mut buf))
            }
            (TuiEvent::Paste(text), Focus::Field(f)) => self.insert(f, text),
            (event, Focus::Field(f)) => self.edit(f, event),
        }
    }
}

/// The form widget, drawn into the page's scroll view.
pub struct ContactFormView<'a> {
    pub form: &'a ContactForm,
    pub state: &'a ContactFormState,
    /// Whether the form has keyboard focus (form mode)
    pub active: bool,
    pub error: Option<&'a FormError>,
    pub sending: bool,
}

impl ContactFormView<'_> {
    fn field_block(&self, field: Field) -> Block<'static> {
        let focused = self.active && self.state.focus == Focus::Field(field);
        let border = if self.error.is_some_and(|e| e.field() == field) {
            Style::default().fg(theme::FAILURE)
        } else if focused {
            Style::default().fg(theme::ACCENT)
        } else {
            theme::muted()
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(format!(" {} ", field.label()), border))
            .padding(Padding::horizontal(1))
    }

    fn field_text(&self, field: Field, box_width: u16) -> Paragraph<'static> {
        let value = self.form.value(field);
        let focused = self.active && self.state.focus == Focus::Field(field);
        if value.is_empty() && !focused {
            return Paragraph::new(Span::styled(
                field.placeholder(),
                theme::muted().add_modifier(Modifier::ITALIC),
            ));
        }

        let cursor = self.state.cursor(field);
        let width = inner_width(box_width);
        let style = Style::default().fg(theme::TEXT);
        if field.is_multiline() {
            let lines: Vec<Line<'static>> = textwrap::wrap(value, wrap_options(width))
                .into_iter()
                .skip(cursor.scroll)
                .take(MESSAGE_LINES as usize)
                .map(|l| Line::from(Span::styled(l.into_owned(), style)))
                .collect();
            Paragraph::new(lines)
        } else {
            Paragraph::new(Span::styled(visible_slice(value, cursor.scroll, width), style))
        }
    }
}

impl Widget for ContactFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = FormLayout::new(area);

        for field in Field::ALL {
            let rect = layout.field(field);
            self.field_text(field, rect.width)
                .block(self.field_block(field))
                .render(rect, buf);
        }

        if let Some(error) = self.error {
            Line::from(Span::styled(
                format!("  ⚠ {error}"),
                Style::default().fg(theme::FAILURE),
            ))
            .render(layout.error, buf);
        }

        let focused = self.active && self.state.focus == Focus::Send;
        let style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        };
        let label = if self.sending { "Sending..." } else { "Send Message" };
        Paragraph::new(Line::from(label).centered())
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .render(layout.send, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn editor_run(state: &mut ContactFormState, form: &mut ContactForm, events: &[TuiEvent]) {
        for event in events {
            ContactFormEditor::new(state, form).handle_event(event);
        }
    }

    fn type_str(s: &str) -> Vec<TuiEvent> {
        s.chars().map(TuiEvent::InputChar).collect()
    }

    fn render_text(form: &ContactForm, state: &ContactFormState, error: Option<&FormError>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, FORM_HEIGHT)).unwrap();
        terminal
            .draw(|f| {
                let view = ContactFormView {
                    form,
                    state,
                    active: true,
                    error,
                    sending: false,
                };
                f.render_widget(view, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_focus_cycles_in_tab_order() {
        assert_eq!(Focus::Field(Field::Name).next(), Focus::Field(Field::Email));
        assert_eq!(Focus::Field(Field::Message).next(), Focus::Send);
        assert_eq!(Focus::Send.next(), Focus::Field(Field::Name));
        assert_eq!(Focus::Field(Field::Name).prev(), Focus::Send);
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();

        editor_run(&mut state, &mut form, &type_str("Ada"));
        editor_run(&mut state, &mut form, &[TuiEvent::NextFocus]);
        editor_run(&mut state, &mut form, &type_str("ada@example.com"));

        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_enter_advances_single_line_and_breaks_message() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();

        editor_run(&mut state, &mut form, &[TuiEvent::Submit, TuiEvent::Submit]);
        assert_eq!(state.focus, Focus::Field(Field::Message));

        editor_run(&mut state, &mut form, &type_str("hi"));
        editor_run(&mut state, &mut form, &[TuiEvent::Submit]);
        editor_run(&mut state, &mut form, &type_str("there"));
        assert_eq!(form.message, "hi\nthere");
    }

    #[test]
    fn test_enter_on_send_submits() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();
        state.focus = Focus::Send;
        let event = ContactFormEditor::new(&mut state, &mut form).handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(FormEvent::Submit));
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();
        let event =
            ContactFormEditor::new(&mut state, &mut form).handle_event(&TuiEvent::SendForm);
        assert_eq!(event, Some(FormEvent::Submit));
        assert_eq!(state.focus, Focus::Field(Field::Name));
    }

    #[test]
    fn test_paste_into_single_line_flattens_newlines() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();
        editor_run(&mut state, &mut form, &[TuiEvent::Paste("Ada\nLovelace".into())]);
        assert_eq!(form.name, "Ada Lovelace");
    }

    #[test]
    fn test_backspace_and_cursor_moves_are_utf8_safe() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();
        editor_run(&mut state, &mut form, &type_str("Zoë"));
        editor_run(
            &mut state,
            &mut form,
            &[TuiEvent::CursorLeft, TuiEvent::Backspace, TuiEvent::CursorEnd, TuiEvent::Backspace],
        );
        assert_eq!(form.name, "Z");
    }

    #[test]
    fn test_cursor_survives_form_clear() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();
        editor_run(&mut state, &mut form, &type_str("Ada"));
        form.clear();
        editor_run(&mut state, &mut form, &type_str("B"));
        assert_eq!(form.name, "B");
    }

    #[test]
    fn test_hit_test_finds_fields_and_send() {
        let mut state = ContactFormState::new();
        let form = ContactForm::new();
        state.prepare(&form, Rect::new(0, 10, 60, FORM_HEIGHT));
        let layout = state.layout;

        assert_eq!(
            state.hit_test(layout.email.x + 1, layout.email.y + 1),
            Some(Focus::Field(Field::Email))
        );
        assert_eq!(state.hit_test(layout.send.x + 2, layout.send.y + 1), Some(Focus::Send));
        assert_eq!(state.hit_test(0, 0), None);
    }

    #[test]
    fn test_cursor_position_tracks_typing() {
        let mut state = ContactFormState::new();
        let mut form = ContactForm::new();
        editor_run(&mut state, &mut form, &type_str("Ada"));
        state.prepare(&form, Rect::new(0, 0, 60, FORM_HEIGHT));

        let name = state.layout.name;
        assert_eq!(
            state.cursor_position(&form),
            Some(Position::new(name.x + 2 + 3, name.y + 1))
        );

        state.focus = Focus::Send;
        assert_eq!(state.cursor_position(&form), None);
    }

    #[test]
    fn test_render_shows_labels_placeholders_and_error() {
        let state = ContactFormState::new();
        let form = ContactForm::new();
        let error = FormError::Missing(Field::Email);
        let text = render_text(&form, &state, Some(&error));

        assert!(text.contains("Your Name"));
        assert!(text.contains("Your Message"));
        assert!(text.contains(Field::Email.placeholder()));
        assert!(text.contains("Send Message"));
        assert!(text.contains(&error.to_string()));
    }
}
