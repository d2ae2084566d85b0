use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{info, Level};
use word_builder::cli::Cli;
use word_builder::core::engine::Engine;
use word_builder::core::terminal::TerminalSession;
use word_builder::games::WORD_BUILDER;
use word_builder::{GameFlow, WordList};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.resolve_config()?;
    let words = WordList::load(&config.words_path);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(game = WORD_BUILDER.id, words = words.len(), seed = ?cli.seed, "starting {}", WORD_BUILDER.name);

    let flow = GameFlow::new(config, words, rng);
    let mut session = TerminalSession::enter()?;
    let result = Engine::new(flow).run(session.terminal()).await;

    // Restore the terminal before any error is printed.
    drop(session);
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("opening log file {}", cli.log_file.display()))?;
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}
