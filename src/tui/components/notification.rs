//! # Notification Overlay
//!
//! Modal panel reporting the latest submission outcome. Shown while
//! `NotificationState::visible` is set; the core decides when that is.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NotificationOverlayState` lives in `TuiState` (last panel and close
//!   button positions, for mouse hit-tests)
//! - `NotificationOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::notification::{NotificationKind, NotificationState, SUBTITLE};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 8;
const CLOSE_LABEL: &str = " ✕ ";

/// Events emitted by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    Dismiss,
}

#[derive(Debug, Default)]
pub struct NotificationOverlayState {
    /// Panel drawn last frame (None = hidden)
    pub panel: Option<Rect>,
    close_button: Option<Rect>,
}

impl NotificationOverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    fn hits_close(&self, x: u16, y: u16) -> bool {
        self.close_button
            .is_some_and(|rect| rect.contains(Position { x, y }))
    }
}

impl EventHandler for NotificationOverlayState {
    type Event = OverlayEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('x') => {
                Some(OverlayEvent::Dismiss)
            }
            TuiEvent::MouseClick(x, y) if self.hits_close(*x, *y) => Some(OverlayEvent::Dismiss),
            _ => None,
        }
    }
}

/// Transient render wrapper for the overlay.
pub struct NotificationOverlay<'a> {
    state: &'a mut NotificationOverlayState,
    notification: &'a NotificationState,
}

impl<'a> NotificationOverlay<'a> {
    pub fn new(state: &'a mut NotificationOverlayState, notification: &'a NotificationState) -> Self {
        Self {
            state,
            notification,
        }
    }
}

impl Component for NotificationOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.notification.visible {
            self.state.panel = None;
            self.state.close_button = None;
            return;
        }

        let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        frame.render_widget(Clear, panel);

        let color = theme::notification_color(self.notification.kind);
        let icon = match self.notification.kind {
            NotificationKind::Success => "✓",
            NotificationKind::Failure => "✗",
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title_top(Line::from(CLOSE_LABEL).right_aligned())
            .title_bottom(Line::from(Span::styled(" Esc / Enter to close ", theme::muted())).centered());

        let body = vec![
            Line::default(),
            Line::from(Span::styled(
                icon,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                self.notification.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(theme::TEXT))).centered(),
        ];
        frame.render_widget(Paragraph::new(body).block(block), panel);

        // Title sits inside the top-right corner: "╮" is at right() - 1.
        let close_width = CLOSE_LABEL.chars().count() as u16;
        self.state.panel = Some(panel);
        self.state.close_button = Some(Rect::new(
            panel.right().saturating_sub(1 + close_width),
            panel.y,
            close_width,
            1,
        ));
    }
}

/// A `width` x `height` rect centered in `outer` (clamped to fit).
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::{Notification, NETWORK_MESSAGE, SUCCESS_MESSAGE};
    use crate::core::submission::{FailureReason, SubmissionOutcome};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn draw(notification: &Notification) -> (NotificationOverlayState, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = NotificationOverlayState::new();
        terminal
            .draw(|f| {
                NotificationOverlay::new(&mut state, notification.state()).render(f, f.area())
            })
            .unwrap();
        (state, terminal)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let notification = Notification::new();
        let (state, terminal) = draw(&notification);
        assert!(state.panel.is_none());
        assert!(!screen_text(&terminal).contains(SUBTITLE));
    }

    #[test]
    fn test_success_panel() {
        let mut notification = Notification::new();
        notification.show(SubmissionOutcome::Success);
        let (state, terminal) = draw(&notification);

        let text = screen_text(&terminal);
        assert!(text.contains(SUCCESS_MESSAGE));
        assert!(text.contains(SUBTITLE));
        assert!(text.contains('✓'));

        let panel = state.panel.unwrap();
        let corner = &terminal.backend().buffer()[(panel.x, panel.y)];
        assert_eq!(corner.fg, theme::SUCCESS);
    }

    #[test]
    fn test_failure_panel_is_red() {
        let mut notification = Notification::new();
        notification.show(SubmissionOutcome::Failure(FailureReason::NetworkError));
        let (state, terminal) = draw(&notification);

        let text = screen_text(&terminal);
        assert!(text.contains(NETWORK_MESSAGE));
        assert!(text.contains('✗'));
        let panel = state.panel.unwrap();
        assert_eq!(terminal.backend().buffer()[(panel.x, panel.y)].fg, theme::FAILURE);
        assert_ne!(theme::FAILURE, Color::Reset);
    }

    #[test]
    fn test_dismiss_keys() {
        let mut state = NotificationOverlayState::new();
        for event in [TuiEvent::Escape, TuiEvent::Submit, TuiEvent::InputChar('x')] {
            assert_eq!(state.handle_event(&event), Some(OverlayEvent::Dismiss));
        }
        assert_eq!(state.handle_event(&TuiEvent::InputChar('a')), None);
        assert_eq!(state.handle_event(&TuiEvent::NextFocus), None);
    }

    #[test]
    fn test_close_button_click() {
        let mut notification = Notification::new();
        notification.show(SubmissionOutcome::Success);
        let (mut state, terminal) = draw(&notification);

        let close = state.close_button.unwrap();
        let symbols: String = (close.x..close.right())
            .map(|x| terminal.backend().buffer()[(x, close.y)].symbol().to_string())
            .collect();
        assert!(symbols.contains('✕'));

        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(close.x + 1, close.y)),
            Some(OverlayEvent::Dismiss)
        );
        let panel = state.panel.unwrap();
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(panel.x + 2, panel.y + 3)), None);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let outer = Rect::new(0, 0, 20, 4);
        let rect = centered_rect(46, 8, outer);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
        let rect = centered_rect(10, 2, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 4, 10, 2));
    }
}
