use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, heading, link_line, prose};
use crate::tui::theme;

fn bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("    • ", Style::default().fg(theme::ACCENT)),
        Span::styled(text.to_string(), Style::default().fg(theme::TEXT)),
    ])
}

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let profile = ctx.profile;
    let bold = Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD);
    let mut lines = heading("Experience", "Where I've worked and what I've built");

    for job in &profile.experience {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", job.title), bold),
            Span::styled(" @ ", theme::muted()),
            Span::styled(job.company.clone(), Style::default().fg(theme::TEAL)),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", job.dates), theme::muted())));
        lines.extend(job.points.iter().map(|p| bullet(p)));
        lines.push(Line::default());
    }

    if !profile.projects.is_empty() {
        lines.push(Line::from(Span::styled("  Projects", theme::title())));
        lines.push(Line::default());
    }
    for project in &profile.projects {
        lines.push(Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(theme::ACCENT)),
            Span::styled(project.title.clone(), bold),
        ]));
        lines.extend(prose(&project.description, "    "));
        if !project.tech_stack.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("    Tech: ", theme::muted()),
                Span::styled(project.tech_stack.clone(), Style::default().fg(theme::TEAL)),
            ]));
        }
        lines.extend(project.details.iter().map(|d| bullet(d)));
        if let Some(link) = &project.live_link {
            lines.push(link_line("    ", "Live:", link));
        }
        if let Some(link) = &project.source_link {
            lines.push(link_line("    ", "Source:", link));
        }
        lines.push(Line::default());
    }
    Text::from(lines)
}
