use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, heading, link_line, prose};
use crate::tui::theme;

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let mut lines = heading("Certifications", "Credentials I've earned");

    for cert in &ctx.profile.certifications {
        lines.push(Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                cert.title.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Issued by ", theme::muted()),
            Span::styled(cert.issuer.clone(), Style::default().fg(theme::TEAL)),
            Span::styled(format!(" · {}", cert.date), theme::muted()),
        ]));
        lines.extend(prose(&cert.details, "    "));
        if let Some(link) = &cert.link {
            lines.push(link_line("    ", "View credential:", link));
        }
        lines.push(Line::default());
    }
    Text::from(lines)
}
