//! Frame composition: nav bar, page, status bar and the notification overlay.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::sections::RenderContext;
use crate::tui::components::{Backdrop, NavBar, NotificationOverlay, Page};
use crate::tui::theme;
use crate::tui::{InputMode, TuiState};

const BROWSE_HINTS: &str = "↑↓ scroll  ←→ sections  1-7 jump  c contact  d CV  q quit ";
const FORM_HINTS: &str = "Tab next  Ctrl+S send  Esc back ";
const OVERLAY_HINTS: &str = "Esc/Enter/x close ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, elapsed: Duration, year: i32) {
    use Constraint::{Length, Min};
    let [nav_area, page_area, status_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let ctx = RenderContext {
        profile: &app.profile,
        elapsed,
        year,
    };
    Page::new(&mut tui.page, &mut tui.contact_form, ctx, &app.form)
        .form_error(app.form_error.as_ref())
        .form_active(tui.input_mode == InputMode::Form)
        .sending(app.is_sending())
        .render(frame, page_area);
    Backdrop::new(&tui.backdrop).render(frame, page_area);

    NavBar::new(&mut tui.nav_bar, &app.profile.name, tui.page.active_section())
        .render(frame, nav_area);

    draw_status_bar(frame, status_area, app, tui);

    NotificationOverlay::new(&mut tui.overlay, app.notification.state())
        .render(frame, frame.area());

    // Terminal cursor only while typing into a field with nothing on top
    if tui.input_mode == InputMode::Form
        && !app.notification.is_visible()
        && let Some(pos) = tui.contact_form.cursor_position(&app.form)
        && let Some(screen) = tui.page.to_screen(pos)
    {
        frame.set_cursor_position(screen);
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let hints = if app.notification.is_visible() {
        OVERLAY_HINTS
    } else {
        match tui.input_mode {
            InputMode::Browse => BROWSE_HINTS,
            InputMode::Form => FORM_HINTS,
        }
    };

    frame.render_widget(
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            Style::default().fg(theme::TEXT),
        )),
        area,
    );

    let width = hints.width() as u16;
    let status_width = app.status_message.width() as u16 + 2;
    if status_width + width <= area.width {
        let hint_area = Rect::new(area.right() - width, area.y, width, 1);
        frame.render_widget(Span::styled(hints, theme::muted()), hint_area);
    }
}
