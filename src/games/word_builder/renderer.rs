/// Playing-screen renderer: the falling field, sparks and the HUD
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::letter::FallingLetter;
use super::session::GameSession;
use crate::core::menu::draw_line;

const LETTER_COLOR: Color = Color::Rgb(0, 255, 70);
const PENDING_COLOR: Color = Color::Rgb(80, 80, 80);
const SPARK: char = '·';

/// Brightness of matched letters, pulsing with `elapsed_secs`.
pub fn glow_intensity(elapsed_secs: f32) -> u8 {
    let t_ms = elapsed_secs * 1000.0;
    (128.0 + 127.0 * (t_ms / 200.0).sin()).clamp(0.0, 255.0) as u8
}

pub fn render(frame: &mut Frame, session: &GameSession, elapsed_secs: f32) {
    let area = frame.area();
    draw_letters(frame, session, area);
    draw_particles(frame, session, area);
    draw_hud(frame, session, elapsed_secs);
}

/// Cell under (x, y) if it is on screen.
fn cell_at(area: Rect, x: f32, y: f32) -> Option<(u16, u16)> {
    let (col, row) = (x.floor(), y.floor());
    if col < 0.0 || row < 0.0 || col >= f32::from(area.width) || row >= f32::from(area.height) {
        return None;
    }
    Some((area.x + col as u16, area.y + row as u16))
}

fn draw_letters(frame: &mut Frame, session: &GameSession, area: Rect) {
    let buf = frame.buffer_mut();
    for letter in session.letters().iter().filter(|l| l.active) {
        draw_letter(buf, area, letter);
    }
}

/// One letter, one cell: the same cell `FallingLetter::hit_test` accepts.
fn draw_letter(buf: &mut Buffer, area: Rect, letter: &FallingLetter) {
    let style = Style::default().fg(LETTER_COLOR).add_modifier(Modifier::BOLD);
    if let Some(pos) = cell_at(area, letter.x, letter.y) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(letter.symbol).set_style(style);
        }
    }
}

fn draw_particles(frame: &mut Frame, session: &GameSession, area: Rect) {
    let buf = frame.buffer_mut();
    for particle in session.particles() {
        if let Some(pos) = cell_at(area, particle.x, particle.y) {
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(SPARK).set_fg(particle.color);
            }
        }
    }
}

fn draw_hud(frame: &mut Frame, session: &GameSession, elapsed_secs: f32) {
    let glow = glow_intensity(elapsed_secs);
    let progress = session.progress_index();
    let word: Vec<Span> = session
        .target_word()
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let color = if i < progress {
                Color::Rgb(glow, glow, 0)
            } else {
                PENDING_COLOR
            };
            Span::styled(format!("{c} "), Style::default().fg(color).add_modifier(Modifier::BOLD))
        })
        .collect();

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let seconds = session.remaining_time_secs().max(0.0) as u32;
    draw_line(frame, 1, Line::from(word), Alignment::Left);
    draw_line(
        frame,
        3,
        Line::styled(format!("Score: {}", session.score()), bold.fg(Color::White)),
        Alignment::Left,
    );
    draw_line(
        frame,
        4,
        Line::styled(format!("Time: {seconds}"), bold.fg(Color::Red)),
        Alignment::Left,
    );
}
