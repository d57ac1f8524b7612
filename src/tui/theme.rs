//! Colours shared across components.

use ratatui::style::{Color, Modifier, Style};

use crate::core::notification::NotificationKind;
use crate::core::profile::SkillTier;

pub const ACCENT: Color = Color::Rgb(129, 140, 248);
pub const TEXT: Color = Color::Rgb(226, 232, 240);
pub const MUTED: Color = Color::DarkGray;
pub const TEAL: Color = Color::Rgb(45, 212, 191);
pub const INDIGO: Color = Color::Rgb(99, 102, 241);
pub const YELLOW: Color = Color::Rgb(250, 204, 21);
pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
pub const FAILURE: Color = Color::Rgb(248, 113, 113);

pub fn tier_color(tier: SkillTier) -> Color {
    match tier {
        SkillTier::Expert => TEAL,
        SkillTier::Proficient => INDIGO,
        SkillTier::Familiar => YELLOW,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => SUCCESS,
        NotificationKind::Failure => FAILURE,
    }
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}
