use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, heading, link_line};
use crate::tui::theme;

fn detail(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<10}"), theme::muted()),
        Span::styled(value.to_string(), Style::default().fg(theme::TEXT)),
    ])
}

/// Contact details above the form.
pub fn text(ctx: &RenderContext) -> Text<'static> {
    let profile = ctx.profile;
    let mut lines = heading("Get In Touch", "Have a project in mind? Let's talk.");

    lines.push(Line::from(Span::styled("  Let's Connect", theme::title())));
    lines.push(detail("Email", &profile.email));
    if let Some(phone) = &profile.phone {
        lines.push(detail("Phone", phone));
    }
    if let Some(location) = &profile.location {
        lines.push(detail("Location", location));
    }
    for social in &profile.socials {
        lines.push(link_line("  ", &format!("{:<9}", social.title), &social.url));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Press Tab to write a message, Ctrl+S to send.",
        theme::muted(),
    )));
    lines.push(Line::default());
    Text::from(lines)
}
