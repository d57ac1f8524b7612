//! # Page Component
//!
//! The single scrolling page holding every section top to bottom, with the
//! contact form embedded below the Contact section text.
//!
//! Responsibilities:
//! - Measure each section at the current width and record where it starts
//! - Render sections and the form into a `ScrollView`
//! - Keyboard/mouse scrolling, section jumps and the "active section" the
//!   nav bar highlights
//!
//! Follows the same persistent state + transient wrapper split as the other
//! components: `PageState` survives across frames, `Page` is built each frame
//! with borrowed props.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::form::{ContactForm, FormError};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::contact_form::{ContactFormState, ContactFormView, FORM_HEIGHT};
use crate::tui::components::sections::{RenderContext, SectionId, section_text};
use crate::tui::event::TuiEvent;

/// Rows moved per arrow key or wheel notch.
const LINE_STEP: u16 = 1;
const WHEEL_STEP: u16 = 3;

/// Layout and scroll state for the page.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct PageState {
    pub scroll_state: ScrollViewState,
    /// Content row each section starts on, in `SectionId::ALL` order
    pub section_tops: Vec<u16>,
    pub content_height: u16,
    /// Content row of the contact form's first line
    pub form_top: u16,
    /// Screen area the page occupied last frame
    pub area: Rect,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn viewport_height(&self) -> u16 {
        self.area.height
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height())
    }

    fn set_offset(&mut self, y: u16) {
        self.scroll_state.set_offset(Position {
            x: 0,
            y: y.min(self.max_offset()),
        });
    }

    /// Keep the offset inside the content after a resize.
    pub fn clamp_scroll(&mut self) {
        self.set_offset(self.offset());
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.set_offset(self.offset().saturating_sub(rows));
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.set_offset(self.offset().saturating_add(rows));
    }

    fn page_step(&self) -> u16 {
        self.viewport_height().saturating_sub(2).max(1)
    }

    pub fn scroll_to_top(&mut self) {
        self.set_offset(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set_offset(u16::MAX);
    }

    pub fn section_top(&self, section: SectionId) -> Option<u16> {
        self.section_tops.get(section.index()).copied()
    }

    /// Scroll so `section` starts at the top of the viewport (or as close as
    /// the end of the page allows).
    pub fn jump_to(&mut self, section: SectionId) {
        if let Some(top) = self.section_top(section) {
            self.set_offset(top);
        }
    }

    /// Scroll the minimum needed to show `rect` (content coordinates).
    pub fn reveal(&mut self, rect: Rect) {
        let offset = self.offset();
        if rect.y < offset {
            self.set_offset(rect.y);
        } else if rect.bottom() > offset + self.viewport_height() {
            self.set_offset(rect.bottom().saturating_sub(self.viewport_height()));
        }
    }

    /// The section the reader is looking at: the last one starting in the
    /// top third of the viewport. At the very bottom the last section wins.
    pub fn active_section(&self) -> SectionId {
        if self.section_tops.is_empty() {
            return SectionId::Home;
        }
        let offset = self.offset();
        if offset > 0 && offset >= self.max_offset() {
            return SectionId::ALL[SectionId::ALL.len() - 1];
        }
        let probe = offset + self.viewport_height() / 3;
        SectionId::ALL
            .into_iter()
            .zip(&self.section_tops)
            .take_while(|(_, top)| **top <= probe)
            .last()
            .map(|(id, _)| id)
            .unwrap_or(SectionId::Home)
    }

    /// Whether any part of `section` is on screen.
    pub fn is_visible(&self, section: SectionId) -> bool {
        let Some(top) = self.section_top(section) else {
            return false;
        };
        let bottom = self
            .section_top(section.next())
            .filter(|_| section != SectionId::Footer)
            .unwrap_or(self.content_height);
        let offset = self.offset();
        top < offset + self.viewport_height() && bottom > offset
    }

    /// Screen position to content position, if it falls on the page.
    pub fn to_content(&self, x: u16, y: u16) -> Option<Position> {
        if !self.area.contains(Position { x, y }) {
            return None;
        }
        Some(Position {
            x: x - self.area.x,
            y: y - self.area.y + self.offset(),
        })
    }

    /// Content position to screen position, if it is scrolled into view.
    pub fn to_screen(&self, pos: Position) -> Option<Position> {
        let offset = self.offset();
        if pos.y < offset || pos.y - offset >= self.area.height || pos.x >= self.area.width {
            return None;
        }
        Some(Position {
            x: self.area.x + pos.x,
            y: self.area.y + pos.y - offset,
        })
    }
}

impl EventHandler for PageState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_up(WHEEL_STEP),
            TuiEvent::ScrollDown => self.scroll_down(WHEEL_STEP),
            TuiEvent::ScrollPageUp => self.scroll_up(self.page_step()),
            TuiEvent::ScrollPageDown => self.scroll_down(self.page_step()),
            TuiEvent::CursorUp => self.scroll_up(LINE_STEP),
            TuiEvent::CursorDown => self.scroll_down(LINE_STEP),
            TuiEvent::CursorHome => self.scroll_to_top(),
            TuiEvent::CursorEnd => self.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the page.
pub struct Page<'a> {
    state: &'a mut PageState,
    form_state: &'a mut ContactFormState,
    ctx: RenderContext<'a>,
    form: &'a ContactForm,
    form_error: Option<&'a FormError>,
    form_active: bool,
    sending: bool,
}

impl<'a> Page<'a> {
    pub fn new(
        state: &'a mut PageState,
        form_state: &'a mut ContactFormState,
        ctx: RenderContext<'a>,
        form: &'a ContactForm,
    ) -> Self {
        Self {
            state,
            form_state,
            ctx,
            form,
            form_error: None,
            form_active: false,
            sending: false,
        }
    }

    pub fn form_error(mut self, error: Option<&'a FormError>) -> Self {
        self.form_error = error;
        self
    }

    pub fn form_active(mut self, active: bool) -> Self {
        self.form_active = active;
        self
    }

    pub fn sending(mut self, sending: bool) -> Self {
        self.sending = sending;
        self
    }
}

impl Component for Page<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for the scrollbar

        // 1. Measure sections at this width
        let mut tops = Vec::with_capacity(SectionId::ALL.len());
        let mut blocks = Vec::with_capacity(SectionId::ALL.len());
        let mut y: u16 = 0;
        for id in SectionId::ALL {
            let paragraph = Paragraph::new(section_text(id, &self.ctx)).wrap(Wrap { trim: false });
            let height = paragraph.line_count(content_width) as u16;
            tops.push(y);
            blocks.push((paragraph, Rect::new(0, y, content_width, height)));
            y = y.saturating_add(height);
            if id == SectionId::Contact {
                self.state.form_top = y;
                y = y.saturating_add(FORM_HEIGHT + 1);
            }
        }

        self.state.section_tops = tops;
        self.state.content_height = y;
        self.state.area = area;
        self.state.clamp_scroll();

        // 2. Draw into the scroll canvas
        let form_area = Rect::new(0, self.state.form_top, content_width, FORM_HEIGHT);
        self.form_state.prepare(self.form, form_area);

        let mut scroll_view = ScrollView::new(Size::new(content_width, y))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        for (paragraph, rect) in blocks {
            scroll_view.render_widget(paragraph, rect);
        }
        scroll_view.render_widget(
            ContactFormView {
                form: self.form,
                state: self.form_state,
                active: self.form_active,
                error: self.form_error,
                sending: self.sending,
            },
            form_area,
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::Field;
    use crate::test_support::test_profile;
    use crate::tui::components::contact_form::Focus;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn draw(state: &mut PageState, form_state: &mut ContactFormState, height: u16) -> String {
        let profile = test_profile();
        let form = ContactForm::default();
        let mut terminal = Terminal::new(TestBackend::new(100, height)).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext {
                    profile: &profile,
                    elapsed: Duration::ZERO,
                    year: 2026,
                };
                Page::new(state, form_state, ctx, &form).render(f, f.area());
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

    fn laid_out(height: u16) -> PageState {
        let mut state = PageState::new();
        let mut form_state = ContactFormState::new();
        draw(&mut state, &mut form_state, height);
        state
    }

    #[test]
    fn test_sections_are_stacked_in_order() {
        let state = laid_out(30);
        assert_eq!(state.section_tops.len(), SectionId::ALL.len());
        assert_eq!(state.section_tops[0], 0);
        assert!(state.section_tops.windows(2).all(|w| w[0] < w[1]));
        assert!(state.form_top > state.section_top(SectionId::Contact).unwrap());
        assert!(state.form_top < state.section_top(SectionId::Footer).unwrap());
        assert!(state.content_height > state.section_top(SectionId::Footer).unwrap());
    }

    #[test]
    fn test_jump_to_section() {
        let mut state = laid_out(20);
        state.jump_to(SectionId::Skills);
        assert_eq!(state.offset(), state.section_top(SectionId::Skills).unwrap());
        assert_eq!(state.active_section(), SectionId::Skills);

        state.jump_to(SectionId::Home);
        assert_eq!(state.offset(), 0);
        assert_eq!(state.active_section(), SectionId::Home);
    }

    #[test]
    fn test_jump_near_end_is_clamped() {
        let mut state = laid_out(20);
        state.jump_to(SectionId::Footer);
        assert_eq!(state.offset(), state.content_height - 20);
        assert_eq!(state.active_section(), SectionId::Footer);
    }

    #[test]
    fn test_scroll_never_passes_content() {
        let mut state = laid_out(20);
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.offset(), 0);

        for _ in 0..1000 {
            state.handle_event(&TuiEvent::ScrollPageDown);
        }
        assert_eq!(state.offset(), state.content_height - 20);

        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.offset(), 0);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.offset(), WHEEL_STEP);
    }

    #[test]
    fn test_reveal_scrolls_minimally() {
        let mut state = laid_out(20);
        state.reveal(Rect::new(0, 30, 10, 3));
        assert_eq!(state.offset(), 13);
        state.reveal(Rect::new(0, 20, 10, 3));
        assert_eq!(state.offset(), 13);
        state.reveal(Rect::new(0, 5, 10, 3));
        assert_eq!(state.offset(), 5);
    }

    #[test]
    fn test_coordinate_conversion() {
        let mut state = laid_out(20);
        state.scroll_down(10);
        assert_eq!(state.to_content(4, 2), Some(Position { x: 4, y: 12 }));
        assert_eq!(state.to_screen(Position { x: 4, y: 12 }), Some(Position { x: 4, y: 2 }));
        assert_eq!(state.to_screen(Position { x: 4, y: 2 }), None);
        assert_eq!(state.to_content(4, 25), None);
    }

    #[test]
    fn test_home_visibility_follows_scroll() {
        let mut state = laid_out(20);
        assert!(state.is_visible(SectionId::Home));
        state.jump_to(SectionId::Experience);
        assert!(!state.is_visible(SectionId::Home));
    }

    #[test]
    fn test_form_is_laid_out_in_content_coordinates() {
        let mut state = PageState::new();
        let mut form_state = ContactFormState::new();
        draw(&mut state, &mut form_state, 20);
        assert_eq!(form_state.layout.field(Field::Name).y, state.form_top);

        state.reveal(form_state.layout.rect(Focus::Send));
        let screen = draw(&mut state, &mut form_state, 20);
        assert!(screen.contains("Send Message"));
    }
}
