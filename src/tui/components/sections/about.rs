use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, heading, prose};
use crate::tui::theme;

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let about = &ctx.profile.about;
    let mut lines = heading("About Me", "Get to know me better");
    lines.extend(prose(&about.bio, "  "));

    for value in &about.values {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                value.title.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", value.description),
            theme::muted(),
        )));
    }
    lines.push(Line::default());
    Text::from(lines)
}
