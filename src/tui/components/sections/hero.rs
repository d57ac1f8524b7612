//! Hero section with the tagline typewriter.
//!
//! ```text
//!  type (40ms/char)   hold (3s)   erase (20ms/char)
//! ├──────────────────┼───────────┼──────────────────┤ next tagline …
//! ```
//!
//! The typewriter is a pure function of elapsed time, so redraws need no
//! animation state.

use std::time::Duration;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::{RenderContext, prose};
use crate::tui::theme;

pub const TYPE_DELAY: Duration = Duration::from_millis(40);
pub const HOLD: Duration = Duration::from_millis(3000);
pub const ERASE_DELAY: Duration = Duration::from_millis(20);

fn cycle_ms(chars: u64) -> u64 {
    chars * TYPE_DELAY.as_millis() as u64
        + HOLD.as_millis() as u64
        + chars * ERASE_DELAY.as_millis() as u64
}

/// Which tagline is on screen at `elapsed`, and how many of its chars.
pub fn typewriter(taglines: &[String], elapsed: Duration) -> (usize, usize) {
    let lengths: Vec<u64> = taglines.iter().map(|t| t.chars().count() as u64).collect();
    let total: u64 = lengths.iter().map(|&n| cycle_ms(n)).sum();
    if total == 0 {
        return (0, 0);
    }

    let mut t = elapsed.as_millis() as u64 % total;
    for (index, &n) in lengths.iter().enumerate() {
        let cycle = cycle_ms(n);
        if t >= cycle {
            t -= cycle;
            continue;
        }
        let typing = n * TYPE_DELAY.as_millis() as u64;
        let hold = HOLD.as_millis() as u64;
        let shown = if t < typing {
            t / TYPE_DELAY.as_millis() as u64
        } else if t < typing + hold {
            n
        } else {
            n.saturating_sub((t - typing - hold) / ERASE_DELAY.as_millis() as u64)
        };
        return (index, shown as usize);
    }
    (0, 0)
}

pub fn text(ctx: &RenderContext) -> Text<'static> {
    let profile = ctx.profile;
    let (index, shown) = typewriter(&profile.taglines, ctx.elapsed);
    let typed: String = profile
        .taglines
        .get(index)
        .map(|t| t.chars().take(shown).collect())
        .unwrap_or_default();

    let mut lines = vec![
        Line::default(),
        Line::default(),
        Line::from(Span::styled("Hello, I'm", Style::default().fg(theme::TEXT))).centered(),
        Line::from(Span::styled(
            profile.name.clone(),
            theme::title().add_modifier(Modifier::UNDERLINED),
        ))
        .centered(),
        Line::default(),
        Line::from(vec![
            Span::styled(typed, Style::default().fg(theme::TEAL)),
            Span::styled("▌", Style::default().fg(theme::TEAL)),
        ])
        .centered(),
        Line::default(),
    ];
    lines.extend(prose(&profile.intro, "").into_iter().map(|l| l.centered()));
    lines.extend([
        Line::default(),
        Line::from(Span::styled(
            "↓ scroll down, or press 7 to get in touch",
            theme::muted(),
        ))
        .centered(),
        Line::default(),
    ]);
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_typewriter_types_then_holds_then_erases() {
        let taglines = vec!["abcd".to_string(), "xy".to_string()];

        assert_eq!(typewriter(&taglines, ms(0)), (0, 0));
        assert_eq!(typewriter(&taglines, ms(40)), (0, 1));
        assert_eq!(typewriter(&taglines, ms(159)), (0, 3));
        // Fully typed at 160ms, held for 3s
        assert_eq!(typewriter(&taglines, ms(160)), (0, 4));
        assert_eq!(typewriter(&taglines, ms(3159)), (0, 4));
        // Erasing at 20ms per char
        assert_eq!(typewriter(&taglines, ms(3160)), (0, 4));
        assert_eq!(typewriter(&taglines, ms(3180)), (0, 3));
        assert_eq!(typewriter(&taglines, ms(3239)), (0, 1));
        // Cycle for "abcd" is 160 + 3000 + 80 = 3240ms; then the next tagline
        assert_eq!(typewriter(&taglines, ms(3240)), (1, 0));
        assert_eq!(typewriter(&taglines, ms(3320)), (1, 2));
    }

    #[test]
    fn test_typewriter_wraps_around() {
        let taglines = vec!["ab".to_string()];
        let cycle = 80 + 3000 + 40;
        assert_eq!(typewriter(&taglines, ms(cycle + 40)), (0, 1));
    }

    #[test]
    fn test_typewriter_without_taglines() {
        assert_eq!(typewriter(&[], ms(1234)), (0, 0));
    }

    #[test]
    fn test_hero_shows_name_and_partial_tagline() {
        let profile = crate::test_support::test_profile();
        let ctx = RenderContext {
            profile: &profile,
            elapsed: Duration::from_millis(200),
            year: 2026,
        };
        let rendered = super::super::text_to_string(&text(&ctx));
        assert!(rendered.contains(&profile.name));
        let first: String = profile.taglines[0].chars().take(5).collect();
        assert!(rendered.contains(&format!("{first}▌")));
    }
}
