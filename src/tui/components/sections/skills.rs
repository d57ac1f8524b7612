//! Skill proficiency bars, coloured by tier.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, heading};
use crate::core::profile::Skill;
use crate::tui::theme;

const BAR_WIDTH: usize = 40;

/// Filled cells for `level` percent of `width`.
fn filled_cells(level: u8, width: usize) -> usize {
    (usize::from(level.min(100)) * width + 50) / 100
}

fn bar(skill: &Skill) -> Line<'static> {
    let color = theme::tier_color(skill.tier());
    let filled = filled_cells(skill.level, BAR_WIDTH);
    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(BAR_WIDTH - filled), theme::muted()),
        Span::styled(format!(" {:>3}%", skill.level), Style::default().fg(color)),
    ])
}

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let mut lines = heading("Skills", "Technologies I work with");

    for skill in &ctx.profile.skills {
        lines.push(Line::from(Span::styled(
            format!("  {}", skill.name),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(bar(skill));
        if !skill.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", skill.description),
                theme::muted(),
            )));
        }
        lines.push(Line::default());
    }
    Text::from(lines)
}
