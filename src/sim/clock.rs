//! Session timing
//!
//! Wall-clock time is injected as [`Instant`] arguments so the rest of
//! the simulation stays deterministic under test.

use std::time::{Duration, Instant};

/// Running time for one play-through, plus pause credit.
///
/// Banners freeze the frame loop without stopping the wall clock; the
/// session adds a matching credit so the displayed time excludes them.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    started: Instant,
    credit: Duration,
}

impl GameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            credit: Duration::ZERO,
        }
    }

    /// Begin a fresh run at `now`, dropping any accumulated credit.
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
        self.credit = Duration::ZERO;
    }

    /// Discount a pause of the given length from future readings.
    pub fn add_credit(&mut self, pause: Duration) {
        self.credit += pause;
    }

    /// Milliseconds of play time at `now`, never negative.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        let raw = now.saturating_duration_since(self.started);
        raw.saturating_sub(self.credit).as_millis() as u64
    }
}

/// Render elapsed milliseconds as `MM:SS:FF`.
///
/// The last pair is the millisecond remainder modulo 100, a fast-moving
/// counter rather than true centiseconds.
pub fn format_clock(elapsed_ms: u64) -> String {
    let seconds = elapsed_ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 60,
        seconds % 60,
        elapsed_ms % 100
    )
}
