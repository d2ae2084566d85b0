/// Word Builder: click the falling letters that spell the target word
pub mod letter;
pub mod particle;
pub mod renderer;
pub mod session;

pub use letter::FallingLetter;
pub use particle::Particle;
pub use session::{ClickOutcome, GameSession, TickOutcome};

use crossterm::event::{Event, MouseButton, MouseEventKind};

use crate::core::game::{Point, Scene, Transition};

/// The Playing screen: owns the round and forwards clicks and ticks to it.
#[derive(Debug, Clone)]
pub struct PlayScene {
    session: GameSession,
    elapsed_secs: f32,
}

impl PlayScene {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            elapsed_secs: 0.0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }
}

impl Scene for PlayScene {
    fn on_input(&mut self, event: &Event) -> Option<Transition> {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                self.session.handle_click(Point::from_cell(mouse.column, mouse.row));
            }
        }
        None
    }

    fn on_tick(&mut self, dt: f32) -> Option<Transition> {
        self.elapsed_secs += dt;
        match self.session.tick(dt) {
            TickOutcome::Running => None,
            TickOutcome::TimedOut => Some(Transition::Finish {
                score: self.session.score(),
            }),
        }
    }

    fn on_render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, &self.session, self.elapsed_secs);
    }
}
