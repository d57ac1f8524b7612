//! # NavBar Component
//!
//! Sticky header: the owner's name, a numbered link per section and the
//! Download CV hint. The link of the section at the top of the viewport is
//! highlighted.
//!
//! ```text
//!  Alex Morgan  1 Home  2 About  3 Education … 7 Contact     d Download CV
//! ```
//!
//! Link positions from the last render are kept in `NavBarState` so mouse
//! clicks can be mapped back to sections.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::sections::SectionId;
use crate::tui::theme;

const DOWNLOAD_HINT: &str = " d Download CV ";

#[derive(Debug, Default)]
pub struct NavBarState {
    /// Screen rect of each link drawn last frame
    links: Vec<(SectionId, Rect)>,
}

impl NavBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section whose link is under (`x`, `y`).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<SectionId> {
        let pos = Position { x, y };
        self.links
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| *id)
    }
}

/// Transient render wrapper for the header.
pub struct NavBar<'a> {
    state: &'a mut NavBarState,
    name: &'a str,
    active: SectionId,
}

impl<'a> NavBar<'a> {
    pub fn new(state: &'a mut NavBarState, name: &'a str, active: SectionId) -> Self {
        // The footer has no link; it belongs to the contact area.
        let active = match active {
            SectionId::Footer => SectionId::Contact,
            other => other,
        };
        Self {
            state,
            name,
            active,
        }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.links.clear();

        let name = format!(" {} ", self.name);
        let mut x = area.x + name.width() as u16;
        let mut spans = vec![Span::styled(name, theme::title())];

        for (i, id) in SectionId::NAV.into_iter().enumerate() {
            let label = format!(" {} {} ", i + 1, id.label());
            let width = label.width() as u16;
            let style = if id == self.active {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(theme::TEXT)
            };
            if x + width <= area.right() {
                self.state
                    .links
                    .push((id, Rect::new(x, area.y, width, 1)));
            }
            spans.push(Span::styled(label, style));
            x += width;
        }

        frame.render_widget(Line::from(spans), area);

        let hint_width = DOWNLOAD_HINT.width() as u16;
        if x + hint_width <= area.right() {
            let hint_area = Rect::new(area.right() - hint_width, area.y, hint_width, 1);
            frame.render_widget(Span::styled(DOWNLOAD_HINT, theme::muted()), hint_area);
        }
    }
}
