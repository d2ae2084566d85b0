use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;
use crate::error::WbResult;
use crate::games::WORD_BUILDER;

#[derive(Parser, Debug)]
#[command(name = "word-builder")]
#[command(about = WORD_BUILDER.description)]
#[command(version)]
pub struct Cli {
    /// JSON file overriding the default tuning
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Word list, one word per line (overrides the config file)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log output; the terminal itself belongs to the game
    #[arg(long, default_value = "word-builder.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> WbResult<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(words) = &self.words {
            config.words_path = words.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
