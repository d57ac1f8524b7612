use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use super::RenderContext;
use crate::tui::theme;

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let profile = ctx.profile;
    let socials = profile
        .socials
        .iter()
        .map(|s| s.title.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    let mut lines = vec![
        Line::from(Span::styled("─".repeat(48), theme::muted())).centered(),
        Line::default(),
        Line::from(Span::styled(profile.footer.headline.clone(), theme::title())).centered(),
    ];
    if !profile.footer.pitch.is_empty() {
        lines.push(
            Line::from(Span::styled(
                profile.footer.pitch.clone(),
                Style::default().fg(theme::TEXT),
            ))
            .centered(),
        );
    }
    lines.push(Line::default());
    if !socials.is_empty() {
        lines.push(Line::from(Span::styled(socials, Style::default().fg(theme::ACCENT))).centered());
    }
    lines.extend([
        Line::from(Span::styled(
            format!("© {} {}. All rights reserved.", ctx.year, profile.name),
            theme::muted(),
        ))
        .centered(),
        Line::from(Span::styled("Built with Rust and ratatui.", theme::muted())).centered(),
        Line::default(),
    ]);
    Text::from(lines)
}
