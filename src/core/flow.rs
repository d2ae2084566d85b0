//! Top-level screen controller: Menu → Playing → GameOver → Menu.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::GameConfig;
use crate::core::game::{Scene, Transition, Viewport};
use crate::core::menu::{GameOverScene, MenuScene};
use crate::games::word_builder::{GameSession, PlayScene};
use crate::words::WordList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Menu,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MenuScene),
    Playing(PlayScene),
    GameOver(GameOverScene),
}

impl Screen {
    fn scene_mut(&mut self) -> &mut dyn Scene {
        match self {
            Screen::Menu(s) => s,
            Screen::Playing(s) => s,
            Screen::GameOver(s) => s,
        }
    }

    fn scene(&self) -> &dyn Scene {
        match self {
            Screen::Menu(s) => s,
            Screen::Playing(s) => s,
            Screen::GameOver(s) => s,
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu(_) => ScreenKind::Menu,
            Screen::Playing(_) => ScreenKind::Playing,
            Screen::GameOver(_) => ScreenKind::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct GameFlow {
    screen: Screen,
    last_score: u32,
    config: GameConfig,
    words: WordList,
    viewport: Viewport,
    rng: StdRng,
}

impl GameFlow {
    pub fn new(config: GameConfig, words: WordList, rng: StdRng) -> Self {
        Self {
            screen: Screen::Menu(MenuScene),
            last_score: 0,
            config,
            words,
            viewport: Viewport::default(),
            rng,
        }
    }

    /// Dispatches a frame's events in arrival order. A transition applies to
    /// the events after it.
    pub fn on_input<I>(&mut self, events: I) -> Control
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            if is_quit(&event) {
                info!(screen = ?self.screen.kind(), "quit requested");
                return Control::Quit;
            }
            if let Event::Resize(width, height) = event {
                self.resize(Viewport::new(width, height));
                continue;
            }
            if let Some(transition) = self.screen.scene_mut().on_input(&event) {
                self.apply(transition);
            }
        }
        Control::Continue
    }

    pub fn on_tick(&mut self, dt: f32) {
        if let Some(transition) = self.screen.scene_mut().on_tick(dt) {
            self.apply(transition);
        }
    }

    pub fn on_render(&self, frame: &mut ratatui::Frame) {
        self.screen.scene().on_render(frame);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Screen::Playing(play) = &mut self.screen {
            play.session_mut().resize(viewport);
        }
    }

    fn apply(&mut self, transition: Transition) {
        self.screen = match transition {
            Transition::Start(difficulty) => {
                let session = GameSession::begin(
                    difficulty,
                    &self.config,
                    self.words.clone(),
                    self.viewport,
                    StdRng::from_rng(&mut self.rng),
                );
                Screen::Playing(PlayScene::new(session))
            }
            Transition::Finish { score } => {
                info!(score, "round over");
                self.last_score = score;
                Screen::GameOver(GameOverScene::new(score))
            }
            Transition::ToMenu => Screen::Menu(MenuScene),
        };
    }

    pub fn screen(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    pub fn session(&self) -> Option<&GameSession> {
        match &self.screen {
            Screen::Playing(play) => Some(play.session()),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        match &mut self.screen {
            Screen::Playing(play) => Some(play.session_mut()),
            _ => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Escape, or Ctrl+C since raw mode swallows the signal.
fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}
