//! Education timeline: one node per entry, joined by a rail.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, heading, prose};
use crate::tui::theme;

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let entries = &ctx.profile.education;
    let mut lines = heading("Education", "My academic journey");
    let rail = || Span::styled("  │ ", Style::default().fg(theme::INDIGO));

    for (i, entry) in entries.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                entry.level.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" · {}", entry.year), theme::muted()),
        ]));
        lines.push(Line::from(vec![
            rail(),
            Span::styled(entry.degree.clone(), Style::default().fg(theme::TEAL)),
        ]));
        lines.push(Line::from(vec![
            rail(),
            Span::styled(entry.institute.clone(), Style::default().fg(theme::TEXT)),
        ]));
        for mut line in prose(&entry.details, "") {
            line.spans.insert(0, rail());
            lines.push(line);
        }
        if i + 1 < entries.len() {
            lines.push(Line::from(rail()));
        }
    }
    lines.push(Line::default());
    Text::from(lines)
}
