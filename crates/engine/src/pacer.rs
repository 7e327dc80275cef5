//! Pacing between generations.
//!
//! After each generation the driver hands control to a [`Pacer`], which
//! waits (or not) and decides whether the run goes on.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use tui_life_types::{MAX_TICK_MS, MIN_TICK_MS};

/// What the driver should do after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Waits between generations.
pub trait Pacer {
    /// Called once after every generation with the configured delay.
    fn wait(&mut self, delay: Duration) -> Result<Control>;
}

/// Sleeps for the configured delay. Never stops the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, delay: Duration) -> Result<Control> {
        thread::sleep(delay);
        Ok(Control::Continue)
    }
}

/// Returns immediately. For benches, tests and dumping output.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn wait(&mut self, _delay: Duration) -> Result<Control> {
        Ok(Control::Continue)
    }
}

/// Scale a base delay by `2^-shift`, clamped to the keyboard speed range.
///
/// Positive shifts speed the run up, negative shifts slow it down.
pub fn scaled_delay(base: Duration, shift: i32) -> Duration {
    let base_ms = base.as_millis().min(u64::MAX as u128) as u64;
    let shift = shift.clamp(-16, 16);
    let ms = if shift >= 0 {
        base_ms >> shift
    } else {
        base_ms.saturating_mul(1u64 << (-shift))
    };
    Duration::from_millis(ms.clamp(MIN_TICK_MS, MAX_TICK_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_pacer_continues() {
        let mut pacer = InstantPacer;
        assert_eq!(pacer.wait(Duration::from_secs(60)).unwrap(), Control::Continue);
    }

    #[test]
    fn sleep_pacer_zero_delay() {
        let mut pacer = SleepPacer;
        assert_eq!(pacer.wait(Duration::ZERO).unwrap(), Control::Continue);
    }

    #[test]
    fn scaled_delay_halves_and_doubles() {
        let base = Duration::from_millis(200);
        assert_eq!(scaled_delay(base, 0), base);
        assert_eq!(scaled_delay(base, 1), Duration::from_millis(100));
        assert_eq!(scaled_delay(base, -1), Duration::from_millis(400));
    }

    #[test]
    fn scaled_delay_is_clamped() {
        let base = Duration::from_millis(200);
        assert_eq!(scaled_delay(base, 30), Duration::from_millis(MIN_TICK_MS));
        assert_eq!(scaled_delay(base, -30), Duration::from_millis(MAX_TICK_MS));
    }
}
