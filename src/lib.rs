pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod words;

// Re-export for convenience
pub use crate::config::{Difficulty, DifficultyProfile, GameConfig};
pub use crate::core::flow::{Control, GameFlow, ScreenKind};
pub use crate::core::game::{Point, Scene, Transition, Viewport};
pub use crate::error::{WbResult, WordBuilderError};
pub use crate::games::word_builder::{ClickOutcome, GameSession, TickOutcome};
pub use crate::words::WordList;
