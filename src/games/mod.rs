pub mod word_builder;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const WORD_BUILDER: GameInfo = GameInfo {
    id: "word_builder",
    name: "Word Builder",
    description: "Catch falling letters with the mouse to spell words before the timer runs out",
};
