use crate::core::flow::{Control, GameFlow};
use crate::core::game::Viewport;
use anyhow::Result;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Fixed-rate frame loop: buffered input, then tick, then draw.
pub struct Engine {
    flow: GameFlow,
    frame_interval: Duration,
}

impl Engine {
    pub fn new(flow: GameFlow) -> Self {
        let frame_rate = flow.config().frame_rate.max(1);
        Self {
            flow,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(frame_rate)),
        }
    }

    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.flow.resize(Viewport::from(terminal.size()?));
        info!(viewport = ?self.flow.viewport(), frame = ?self.frame_interval, "engine started");

        let mut events = EventStream::new();
        let mut pending = Vec::new();
        let mut frames = tokio::time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Input arrives whenever; it is only acted on at the next frame.
                maybe_event = events.next() => match maybe_event {
                    Some(event) => pending.push(event?),
                    None => {
                        debug!("input stream closed");
                        break;
                    }
                },

                _ = frames.tick() => {
                    let dt = last_frame.elapsed().as_secs_f32();
                    last_frame = Instant::now();

                    if self.flow.on_input(pending.drain(..)) == Control::Quit {
                        break;
                    }
                    self.flow.on_tick(dt);
                    terminal.draw(|f| self.flow.on_render(f))?;
                }
            }
        }

        info!(last_score = self.flow.last_score(), "engine stopped");
        Ok(())
    }
}
