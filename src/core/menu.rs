use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::config::Difficulty;
use crate::core::game::{Scene, Transition};

pub const TITLE: &str = "WORD BUILDER GAME";
const HUD_MARGIN: u16 = 2;

/// Draws one line of text at `row`, clipped to the frame.
pub fn draw_line(frame: &mut Frame, row: u16, line: Line<'_>, alignment: Alignment) {
    let area = frame.area();
    if row >= area.height {
        return;
    }
    let inset = if alignment == Alignment::Left { HUD_MARGIN.min(area.width) } else { 0 };
    let rect = Rect::new(area.x + inset, area.y + row, area.width - inset, 1);
    frame.render_widget(Paragraph::new(line).alignment(alignment), rect);
}

fn pressed_key(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.code),
        _ => None,
    }
}

/// Title screen: pick a difficulty with 1/2/3.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuScene;

impl Scene for MenuScene {
    fn on_input(&mut self, event: &Event) -> Option<Transition> {
        match pressed_key(event)? {
            KeyCode::Char(c) => Difficulty::from_digit(c).map(Transition::Start),
            _ => None,
        }
    }

    fn on_tick(&mut self, _dt: f32) -> Option<Transition> {
        None
    }

    fn on_render(&self, frame: &mut Frame) {
        let height = frame.area().height;
        let bold = Style::default().add_modifier(Modifier::BOLD);

        draw_line(
            frame,
            height / 3,
            Line::styled(TITLE, bold.fg(Color::Yellow)),
            Alignment::Center,
        );
        for (i, tier) in Difficulty::ALL.into_iter().enumerate() {
            let option = format!("{} - {}", tier.hotkey(), tier.label());
            draw_line(
                frame,
                height / 2 + i as u16 * 2,
                Line::styled(option, bold.fg(Color::Green)),
                Alignment::Center,
            );
        }
    }
}

/// Final score; Enter goes back to the menu.
#[derive(Debug, Clone, Copy)]
pub struct GameOverScene {
    pub score: u32,
}

impl GameOverScene {
    pub fn new(score: u32) -> Self {
        Self { score }
    }
}

impl Scene for GameOverScene {
    fn on_input(&mut self, event: &Event) -> Option<Transition> {
        (pressed_key(event)? == KeyCode::Enter).then_some(Transition::ToMenu)
    }

    fn on_tick(&mut self, _dt: f32) -> Option<Transition> {
        None
    }

    fn on_render(&self, frame: &mut Frame) {
        let height = frame.area().height;
        let bold = Style::default().add_modifier(Modifier::BOLD);

        draw_line(
            frame,
            height / 3,
            Line::styled("GAME OVER", bold.fg(Color::Red)),
            Alignment::Center,
        );
        draw_line(
            frame,
            height / 2,
            Line::styled(format!("Your Score: {}", self.score), bold.fg(Color::White)),
            Alignment::Center,
        );
        draw_line(
            frame,
            height / 2 + 3,
            Line::styled("Press ENTER to return to Menu", bold.fg(Color::Green)),
            Alignment::Center,
        );
    }
}
