//! # Backdrop
//!
//! Two soft colour orbs drifting behind the page. They ease toward the mouse
//! pointer at different speeds, so the second trails the first.
//!
//! Drawn after the page: only cells without a background of their own are
//! tinted, so text stays readable and the form and overlay are untouched.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

use crate::tui::component::Component;

/// Below this distance an orb counts as settled.
const SETTLE_DISTANCE: f32 = 0.1;
/// Terminal cells are roughly twice as tall as wide.
const ROW_SCALE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Orb {
    x: f32,
    y: f32,
    /// Fraction of the remaining distance covered each tick
    ease: f32,
    /// Offset from the pointer this orb settles at
    offset: (f32, f32),
    radius: f32,
    color: (u8, u8, u8),
}

impl Orb {
    fn target(&self, pointer: (f32, f32)) -> (f32, f32) {
        (pointer.0 + self.offset.0, pointer.1 + self.offset.1)
    }

    /// Step toward `target`; true while still moving.
    fn step(&mut self, target: (f32, f32)) -> bool {
        let dx = target.0 - self.x;
        let dy = target.1 - self.y;
        if dx.abs() < SETTLE_DISTANCE && dy.abs() < SETTLE_DISTANCE {
            self.x = target.0;
            self.y = target.1;
            return false;
        }
        self.x += dx * self.ease;
        self.y += dy * self.ease;
        true
    }

    /// Tint strength (0.0..=1.0) at cell (`col`, `row`).
    fn intensity(&self, col: f32, row: f32) -> f32 {
        let dx = col - self.x;
        let dy = (row - self.y) * ROW_SCALE;
        let distance = (dx * dx + dy * dy).sqrt();
        let falloff = (1.0 - distance / self.radius).max(0.0);
        falloff * falloff
    }
}

#[derive(Debug, Clone)]
pub struct BackdropState {
    orbs: [Orb; 2],
    pointer: Option<(f32, f32)>,
}

impl Default for BackdropState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackdropState {
    pub fn new() -> Self {
        Self {
            orbs: [
                Orb {
                    x: 20.0,
                    y: 6.0,
                    ease: 0.15,
                    offset: (0.0, 0.0),
                    radius: 18.0,
                    color: (49, 46, 129),
                },
                Orb {
                    x: 60.0,
                    y: 14.0,
                    ease: 0.05,
                    offset: (10.0, 4.0),
                    radius: 26.0,
                    color: (19, 78, 74),
                },
            ],
            pointer: None,
        }
    }

    /// Latest mouse position in screen cells.
    pub fn point_at(&mut self, col: u16, row: u16) {
        self.pointer = Some((f32::from(col), f32::from(row)));
    }

    /// Advance one animation frame. Returns true while any orb is moving.
    pub fn tick(&mut self) -> bool {
        let Some(pointer) = self.pointer else {
            return false;
        };
        let mut moving = false;
        for orb in &mut self.orbs {
            let target = orb.target(pointer);
            moving |= orb.step(target);
        }
        moving
    }

    fn tint(&self, col: u16, row: u16) -> Option<Color> {
        let (col, row) = (f32::from(col), f32::from(row));
        let (mut r, mut g, mut b) = (0.0f32, 0.0f32, 0.0f32);
        for orb in &self.orbs {
            let k = orb.intensity(col, row);
            r += f32::from(orb.color.0) * k;
            g += f32::from(orb.color.1) * k;
            b += f32::from(orb.color.2) * k;
        }
        if r + g + b < 1.0 {
            return None;
        }
        let channel = |v: f32| v.clamp(0.0, 255.0) as u8;
        Some(Color::Rgb(channel(r), channel(g), channel(b)))
    }
}

/// Transient render wrapper: tints the area under the orbs.
pub struct Backdrop<'a> {
    state: &'a BackdropState,
}

impl<'a> Backdrop<'a> {
    pub fn new(state: &'a BackdropState) -> Self {
        Self { state }
    }
}

impl Component for Backdrop<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        for row in area.top()..area.bottom() {
            for col in area.left()..area.right() {
                let Some(color) = self.state.tint(col, row) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut(Position { x: col, y: row })
                    && cell.bg == Color::Reset
                {
                    cell.set_bg(color);
                }
            }
        }
    }
}
