//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Modes
//!
//! - **Browse**: arrows/wheel scroll, ←/→ and 1-7 jump between sections,
//!   `c` or Tab focuses the contact form, `d` downloads the resume.
//! - **Form**: keys go to the contact form editor. Esc returns to Browse.
//!
//! While the notification is up it captures input: only its dismiss keys,
//! Ctrl+C, and Ctrl+S in Form mode do anything. Ctrl+S sends again and the
//! new outcome replaces the notification.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (hero typewriter on screen, orbs moving): ~25fps.
//! - **Waiting** (delivery in flight, notification up): every 100ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
pub mod components;
pub mod event;
pub mod markdown;
pub mod tasks;
mod theme;
mod ui;

use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::core::action::{Action, update};
use crate::core::form::Field;
use crate::core::resume;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::sections::SectionId;
use crate::tui::components::{
    BackdropState, ContactFormEditor, ContactFormState, Focus, FormEvent, NavBarState,
    NotificationOverlayState, OverlayEvent, PageState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::tasks::EffectRunner;

const ANIMATION_FRAME: Duration = Duration::from_millis(40);
const WAITING_FRAME: Duration = Duration::from_millis(100);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Scroll and jump around the page.
    Browse,
    /// Type into the contact form. Esc switches to Browse.
    Form,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub page: PageState,
    pub contact_form: ContactFormState,
    pub nav_bar: NavBarState,
    pub overlay: NotificationOverlayState,
    pub backdrop: BackdropState,
    pub input_mode: InputMode,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            page: PageState::new(),
            contact_form: ContactFormState::new(),
            nav_bar: NavBarState::new(),
            overlay: NotificationOverlayState::new(),
            backdrop: BackdropState::new(),
            input_mode: InputMode::Browse,
        }
    }

    /// Switch to form mode with `focus`, scrolling the form into view.
    fn enter_form(&mut self, focus: Focus) {
        self.input_mode = InputMode::Form;
        self.contact_form.focus = focus;
        self.page.jump_to(SectionId::Contact);
        self.reveal_focus();
    }

    fn reveal_focus(&mut self) {
        self.page
            .reveal(self.contact_form.layout.rect(self.contact_form.focus));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock // Blinking cursors stutter under continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
        info!("Terminal modes disabled");
    }
}

/// Run the portfolio until the user quits.
///
/// Must be called from inside a tokio runtime: deliveries and dismiss
/// timers are spawned onto it.
pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Actions from background tasks
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut runner = EffectRunner::new(tx);

    let start_time = Instant::now();
    let year = chrono::Local::now().year();
    let mut needs_redraw = true;

    let result = loop {
        let orbs_moving = tui.backdrop.tick();
        let animating = orbs_moving || tui.page.is_visible(SectionId::Home);
        let waiting = app.is_sending() || app.notification.is_visible();
        if animating || waiting {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed();
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, elapsed, year)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            ANIMATION_FRAME
        } else if waiting {
            WAITING_FRAME
        } else {
            IDLE_POLL
        };

        // First event (or timeout), then everything already queued
        let mut events = Vec::new();
        match poll_event_timeout(timeout) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(e) => break Err(e),
        }
        loop {
            match poll_event_immediate() {
                Ok(Some(event)) => events.push(event),
                Ok(None) => break,
                Err(e) => {
                    warn!("Event poll failed: {}", e);
                    break;
                }
            }
        }

        let mut should_quit = false;
        for event in events {
            needs_redraw = true;
            if dispatch(&mut app, &mut tui, &mut runner, event) {
                should_quit = true;
                break;
            }
        }

        // Outcomes and expiries from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if runner.run(&app, effect) {
                should_quit = true;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

/// Route one input event. Returns true when the app should exit.
fn dispatch(app: &mut App, tui: &mut TuiState, runner: &mut EffectRunner, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit => return quit(app, runner),
        TuiEvent::MouseMove(col, row) => {
            tui.backdrop.point_at(col, row);
            return false;
        }
        _ => {}
    }

    // The notification captures input while it is up, except a resend
    if app.notification.is_visible() {
        if tui.input_mode == InputMode::Form && event == TuiEvent::SendForm {
            return submit(app, tui, runner);
        }
        if let Some(OverlayEvent::Dismiss) = tui.overlay.handle_event(&event) {
            let effect = update(app, Action::DismissNotification);
            return runner.run(app, effect);
        }
        return false;
    }

    match event {
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.page.handle_event(&event);
            return false;
        }
        TuiEvent::MouseClick(col, row) => return click(app, tui, runner, col, row),
        _ => {}
    }

    match tui.input_mode {
        InputMode::Browse => match event {
            TuiEvent::InputChar('q') => return quit(app, runner),
            TuiEvent::InputChar('c') | TuiEvent::NextFocus => {
                tui.enter_form(Focus::Field(Field::Name))
            }
            TuiEvent::PrevFocus => tui.enter_form(Focus::Send),
            TuiEvent::InputChar('d') => download_resume(app),
            TuiEvent::InputChar(c) => {
                if let Some(section) = SectionId::from_digit(c) {
                    tui.page.jump_to(section);
                }
            }
            TuiEvent::CursorLeft => tui.page.jump_to(tui.page.active_section().prev()),
            TuiEvent::CursorRight => tui.page.jump_to(tui.page.active_section().next()),
            other => {
                tui.page.handle_event(&other);
            }
        },
        InputMode::Form => {
            if event == TuiEvent::Escape {
                tui.input_mode = InputMode::Browse;
                return false;
            }
            let form_event =
                ContactFormEditor::new(&mut tui.contact_form, &mut app.form).handle_event(&event);
            match form_event {
                Some(FormEvent::Submit) => return submit(app, tui, runner),
                Some(FormEvent::FocusChanged) => tui.reveal_focus(),
                Some(FormEvent::ContentChanged) | None => {}
            }
        }
    }
    false
}

/// Mouse click outside the overlay: nav links, form elements, or blur.
fn click(app: &mut App, tui: &mut TuiState, runner: &mut EffectRunner, col: u16, row: u16) -> bool {
    if let Some(section) = tui.nav_bar.hit_test(col, row) {
        tui.page.jump_to(section);
        return false;
    }
    let Some(pos) = tui.page.to_content(col, row) else {
        return false;
    };
    match tui.contact_form.hit_test(pos.x, pos.y) {
        Some(Focus::Send) => {
            tui.input_mode = InputMode::Form;
            tui.contact_form.focus = Focus::Send;
            submit(app, tui, runner)
        }
        Some(focus) => {
            tui.input_mode = InputMode::Form;
            tui.contact_form.focus = focus;
            false
        }
        None => {
            tui.input_mode = InputMode::Browse;
            false
        }
    }
}

fn quit(app: &mut App, runner: &mut EffectRunner) -> bool {
    let effect = update(app, Action::Quit);
    runner.run(app, effect)
}

fn submit(app: &mut App, tui: &mut TuiState, runner: &mut EffectRunner) -> bool {
    let effect = update(app, Action::Submit);
    if let Some(error) = &app.form_error {
        tui.contact_form.focus = Focus::Field(error.field());
        tui.reveal_focus();
    }
    runner.run(app, effect)
}

/// "Download CV": copy the profile's resume into the download folder and
/// report where it went on the status line.
fn download_resume(app: &mut App) {
    let Some(source) = app.profile.resume.clone() else {
        app.status_message = "No resume available for download.".to_string();
        return;
    };
    let file_name = app.profile.resume_file_name();
    let result = resume::download_dir().and_then(|dir| resume::export(&source, &dir, &file_name));
    app.status_message = match result {
        Ok(path) => format!("Resume saved to {}", path.display()),
        Err(e) => {
            warn!("Resume download failed: {}", e);
            format!("Download failed: {}", e)
        }
    };
}
