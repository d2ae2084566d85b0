pub mod engine;
pub mod flow;
pub mod game;
pub mod menu;
pub mod terminal;
