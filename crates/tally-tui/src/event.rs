use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        Self {
            tick_rate,
            frame_rate: tick_rate,
        }
    }

    /// Handler that polls at `frame_rate` while transitions are running
    pub fn with_frame_rate(tick_rate_ms: u64, frame_rate: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate: frame_rate.min(Duration::from_millis(tick_rate_ms)),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        Self::poll(self.tick_rate)
    }

    /// Poll using the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        Self::poll(self.frame_rate)
    }

    fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
