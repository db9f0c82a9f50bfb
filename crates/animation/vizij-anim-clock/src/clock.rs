//! Animation clock: anchor + extrapolation.
//!
//! The clock stores a single `(anchor_frame, anchor_time)` pair and the two
//! rate parameters. The raw virtual frame at any timestamp is a straight line
//! through the anchor with slope `frame_rate * play_rate`. Rate changes
//! rebase the anchor at the current value first, so the line bends but never
//! jumps.

use serde::{Deserialize, Serialize};

/// Lazy, unbounded frame clock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimClock {
    anchor_frame: f64,
    anchor_time: f64,
    frame_rate: f64,
    play_rate: f64,
}

impl AnimClock {
    /// New clock anchored at frame 0 at time `now`.
    pub fn new(frame_rate: f64, play_rate: f64, now: f64) -> Self {
        Self {
            anchor_frame: 0.0,
            anchor_time: now,
            frame_rate,
            play_rate,
        }
    }

    #[inline]
    pub fn anchor_frame(&self) -> f64 {
        self.anchor_frame
    }

    #[inline]
    pub fn anchor_time(&self) -> f64 {
        self.anchor_time
    }

    #[inline]
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    #[inline]
    pub fn play_rate(&self) -> f64 {
        self.play_rate
    }

    /// Frames advanced per second of `now`; negative runs backwards.
    #[inline]
    pub fn effective_rate(&self) -> f64 {
        self.frame_rate * self.play_rate
    }

    /// Raw virtual frame at `now`. Unbounded; folding happens in the mode mapper.
    #[inline]
    pub fn raw_frame(&self, now: f64) -> f64 {
        let rate = self.effective_rate();
        if rate == 0.0 {
            // Avoid 0 * inf when `now` is far from the anchor.
            return self.anchor_frame;
        }
        self.anchor_frame + (now - self.anchor_time) * rate
    }

    /// Pin the clock so that `raw_frame(now) == frame`.
    #[inline]
    pub fn rebase(&mut self, frame: f64, now: f64) {
        log::trace!(
            "clock rebase: frame {} -> {} at t={}",
            self.anchor_frame,
            frame,
            now
        );
        self.anchor_frame = frame;
        self.anchor_time = now;
    }

    /// Swap the play rate, holding the raw frame at `now` fixed.
    pub fn set_play_rate(&mut self, play_rate: f64, now: f64) {
        let current = self.raw_frame(now);
        self.rebase(current, now);
        self.play_rate = play_rate;
    }

    /// Swap the native frame rate, holding the raw frame at `now` fixed.
    pub fn set_frame_rate(&mut self, frame_rate: f64, now: f64) {
        let current = self.raw_frame(now);
        self.rebase(current, now);
        self.frame_rate = frame_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_frame_extrapolates_from_anchor() {
        let clock = AnimClock::new(24.0, 1.0, 10.0);
        assert_eq!(clock.raw_frame(10.0), 0.0);
        assert_eq!(clock.raw_frame(11.0), 24.0);
        assert_eq!(clock.raw_frame(9.5), -12.0);
    }

    #[test]
    fn rate_change_keeps_current_value() {
        let mut clock = AnimClock::new(10.0, 1.0, 0.0);
        assert_eq!(clock.raw_frame(2.0), 20.0);
        clock.set_play_rate(-0.5, 2.0);
        assert_eq!(clock.raw_frame(2.0), 20.0);
        assert_eq!(clock.raw_frame(4.0), 10.0);
        clock.set_frame_rate(30.0, 4.0);
        assert_eq!(clock.raw_frame(4.0), 10.0);
        assert_eq!(clock.raw_frame(5.0), -5.0);
    }

    #[test]
    fn zero_rate_freezes() {
        let mut clock = AnimClock::new(24.0, 1.0, 0.0);
        clock.set_play_rate(0.0, 0.5);
        assert_eq!(clock.raw_frame(0.5), 12.0);
        assert_eq!(clock.raw_frame(1.0e9), 12.0);
        assert_eq!(clock.raw_frame(f64::INFINITY), 12.0);
    }
}
