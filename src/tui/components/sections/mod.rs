//! # Page Sections
//!
//! Each section turns part of the [`Profile`] into styled `Text`. The page
//! stacks them top to bottom in one scroll view, in [`SectionId::ALL`] order.
//!
//! Sections are plain functions of a [`RenderContext`]; they hold no state.
//! The contact form is not part of the contact text: the page renders it
//! below it as its own widget.

mod about;
mod certifications;
mod contact;
mod education;
mod experience;
mod footer;
pub mod hero;
mod skills;

use std::time::Duration;

use ratatui::text::{Line, Span, Text};

use crate::core::profile::Profile;
use crate::tui::markdown;
use crate::tui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Education,
    Certifications,
    Skills,
    Experience,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections with a link in the navigation header, numbered 1–7.
    pub const NAV: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Certifications => "Certifications",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Section for a nav digit key ('1' = Home … '7' = Contact).
    pub fn from_digit(c: char) -> Option<SectionId> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::NAV.get(i).copied())
    }

    pub fn next(self) -> SectionId {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn prev(self) -> SectionId {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// Props shared by every section renderer.
pub struct RenderContext<'a> {
    pub profile: &'a Profile,
    /// Time since startup, drives the hero typewriter.
    pub elapsed: Duration,
    /// Year printed in the footer copyright line.
    pub year: i32,
}

/// Styled text for `id`.
pub fn section_text(id: SectionId, ctx: &RenderContext) -> Text<'static> {
    match id {
        SectionId::Home => hero::text(ctx),
        SectionId::About => about::text(ctx),
        SectionId::Education => education::text(ctx),
        SectionId::Certifications => certifications::text(ctx),
        SectionId::Skills => skills::text(ctx),
        SectionId::Experience => experience::text(ctx),
        SectionId::Contact => contact::text(ctx),
        SectionId::Footer => footer::text(ctx),
    }
}

/// Centered title with a muted subtitle, framed by blank lines.
fn heading(title: &str, subtitle: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), theme::title())).centered(),
    ];
    if !subtitle.is_empty() {
        lines.push(Line::from(Span::styled(subtitle.to_string(), theme::muted())).centered());
    }
    lines.push(Line::default());
    lines
}

/// Markdown prose, with every line prefixed by `indent`.
fn prose(content: &str, indent: &'static str) -> Vec<Line<'static>> {
    markdown::render(content, theme::TEXT, theme::ACCENT)
        .lines
        .into_iter()
        .map(|mut line| {
            if !indent.is_empty() {
                line.spans.insert(0, Span::raw(indent));
            }
            line
        })
        .collect()
}

/// `label: url` line for an outbound link.
fn link_line(indent: &'static str, label: &str, url: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(indent),
        Span::styled(format!("{label} "), theme::muted()),
        Span::styled(
            url.to_string(),
            ratatui::style::Style::default()
                .fg(theme::ACCENT)
                .add_modifier(ratatui::style::Modifier::UNDERLINED),
        ),
    ])
}

#[cfg(test)]
pub(crate) fn text_to_string(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
