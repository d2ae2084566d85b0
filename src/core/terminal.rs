/// Terminal setup and teardown around the game
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::DefaultTerminal;
use std::io::stdout;
use tracing::warn;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> anyhow::Result<Self> {
        let terminal = ratatui::init();
        if let Err(e) = crossterm::execute!(stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(e.into());
        }
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = crossterm::execute!(stdout(), DisableMouseCapture) {
            warn!(error = %e, "failed to release mouse capture");
        }
        ratatui::restore();
    }
}
