//! Keyboard-aware pacing for interactive runs.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use tui_life::engine::{scaled_delay, Control, Pacer};
use tui_life::input::handle_key_event;
use tui_life::types::Command;

/// How often input is polled while paused.
const PAUSE_POLL: Duration = Duration::from_millis(100);

/// Speed steps allowed in either direction. Each step halves or doubles the delay.
const MAX_SPEED_SHIFT: i32 = 8;

/// Waits between generations while listening for keys.
///
/// - `q` / `Esc` / Ctrl-C: quit
/// - `p` / space: pause and resume
/// - `+` / `-`: faster / slower
#[derive(Debug, Default)]
pub struct KeyboardPacer {
    paused: bool,
    speed_shift: i32,
}

impl KeyboardPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay until the next generation at the current speed.
    pub fn delay_for(&self, base: Duration) -> Duration {
        scaled_delay(base, self.speed_shift)
    }

    /// Update pause and speed state for one command.
    pub fn apply(&mut self, command: Command) -> Control {
        match command {
            Command::Quit => return Control::Quit,
            Command::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            Command::SpeedUp => {
                self.speed_shift = (self.speed_shift + 1).min(MAX_SPEED_SHIFT);
                debug!(shift = self.speed_shift, "speed up");
            }
            Command::SlowDown => {
                self.speed_shift = (self.speed_shift - 1).max(-MAX_SPEED_SHIFT);
                debug!(shift = self.speed_shift, "slow down");
            }
        }
        Control::Continue
    }
}

impl Pacer for KeyboardPacer {
    fn wait(&mut self, delay: Duration) -> Result<Control> {
        let mut started = Instant::now();
        let mut deadline = started + self.delay_for(delay);

        loop {
            let timeout = if self.paused {
                PAUSE_POLL
            } else {
                let left = deadline.saturating_duration_since(Instant::now());
                if left.is_zero() {
                    return Ok(Control::Continue);
                }
                left
            };

            if !event::poll(timeout)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(command) = handle_key_event(key) else {
                continue;
            };

            let was_paused = self.paused;
            if self.apply(command) == Control::Quit {
                return Ok(Control::Quit);
            }
            if was_paused && !self.paused {
                // Resuming starts a fresh wait
                started = Instant::now();
            }
            deadline = started + self.delay_for(delay);
        }
    }
}
