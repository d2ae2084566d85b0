/// Screen contract shared by every state of the game flow
use crossterm::event::Event;
use ratatui::layout::Size;

use crate::config::Difficulty;

/// Terminal area the game plays in, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Position in cell units; x is the column, y the row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_cell(column: u16, row: u16) -> Self {
        Self::new(column as f32, row as f32)
    }
}

/// Requested screen change, applied by the flow controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Start(Difficulty),
    Finish { score: u32 },
    ToMenu,
}

/// Every screen implements the same per-frame contract:
/// input first, then tick, then render.
pub trait Scene {
    /// Handle one input event; returning a transition ends this screen
    fn on_input(&mut self, event: &Event) -> Option<Transition>;

    /// Advance by `dt` seconds of wall-clock time
    fn on_tick(&mut self, dt: f32) -> Option<Transition>;

    /// Draw the screen into the Ratatui frame
    fn on_render(&self, frame: &mut ratatui::Frame);
}
