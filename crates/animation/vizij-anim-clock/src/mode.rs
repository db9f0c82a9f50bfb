//! Playback-mode mapper: folds the clock's unbounded value into a play window.
//!
//! The mapper works in *window progress*: how many frames the clock has moved
//! past the window start, measured in the window's own direction. A window
//! with `to < from` is walked downward, so its position is
//! `from - progress` rather than `from + progress`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{floor_i, floor_mod, ping_pong};

/// The four playback states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Fixed pose; the clock is ignored.
    #[default]
    Hold,
    /// Single traversal of the window, then hold at the last frame.
    Play,
    /// Endless wraparound.
    Loop,
    /// Endless back-and-forth.
    Pingpong,
}

impl PlayMode {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hold => "hold",
            Self::Play => "play",
            Self::Loop => "loop",
            Self::Pingpong => "pingpong",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Active play window. `to` may precede `from` (reverse traversal) and may
/// lie outside the animation's frame range (multiple passes).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayWindow {
    pub from: f64,
    pub to: f64,
}

impl PlayWindow {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Zero-length window sitting on `frame`.
    pub fn at(frame: f64) -> Self {
        Self {
            from: frame,
            to: frame,
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.to < self.from
    }

    /// `1.0` for forward windows, `-1.0` for reverse ones.
    #[inline]
    pub fn direction(&self) -> f64 {
        if self.is_reverse() {
            -1.0
        } else {
            1.0
        }
    }

    /// Distance between the endpoints, always non-negative.
    #[inline]
    pub fn span(&self) -> f64 {
        (self.to - self.from).abs()
    }

    /// Frames covered by one traversal, endpoints inclusive.
    #[inline]
    pub fn length(&self) -> f64 {
        self.span() + 1.0
    }

    /// Whole frames the window's endpoints fall on.
    #[inline]
    fn whole_bounds(&self) -> (i64, i64) {
        let (a, b) = (floor_i(self.from), floor_i(self.to));
        (a.min(b), a.max(b))
    }

    /// Absolute frame for a progress value inside the window.
    #[inline]
    pub fn position(&self, progress: f64) -> f64 {
        self.from + self.direction() * progress
    }

    /// Progress that lands on `frame`, clamped onto the window's endpoints.
    pub fn progress_of(&self, frame: f64) -> f64 {
        let lo = self.from.min(self.to);
        let hi = self.from.max(self.to);
        let f = frame.clamp(lo, hi);
        (f - self.from) * self.direction()
    }
}

/// Fractional reported frame for `progress` frames into `window`.
pub fn fold_fframe(mode: PlayMode, window: &PlayWindow, progress: f64) -> f64 {
    match mode {
        PlayMode::Hold => window.from,
        // A one-frame loop is a hold on that frame, not a sweep across it.
        PlayMode::Loop if window.span() == 0.0 => window.from,
        PlayMode::Play => window.position(progress.clamp(0.0, window.length())),
        PlayMode::Loop => window.position(floor_mod(progress, window.length())),
        PlayMode::Pingpong => window.position(ping_pong(progress, window.span())),
    }
}

/// Whole reported frame for `progress` frames into `window`, peeking
/// `offset` whole frames further along the clock.
///
/// Always the floor of the folded position. Hold ignores the offset; Play
/// saturates at the window's last whole frame instead of running past it.
pub fn fold_frame(mode: PlayMode, window: &PlayWindow, progress: f64, offset: i64) -> i64 {
    match mode {
        PlayMode::Hold => floor_i(window.from),
        PlayMode::Play => {
            let (lo, hi) = window.whole_bounds();
            floor_i(fold_fframe(mode, window, progress + offset as f64)).clamp(lo, hi)
        }
        PlayMode::Loop | PlayMode::Pingpong => {
            floor_i(fold_fframe(mode, window, progress + offset as f64))
        }
    }
}

/// Fractional frame to hold when playback stops at `progress`.
///
/// Same as [`fold_fframe`] except that Play never rests past `to`, so the
/// held whole frame is the one being reported.
pub fn rest_fframe(mode: PlayMode, window: &PlayWindow, progress: f64) -> f64 {
    match mode {
        PlayMode::Play => window.position(progress.clamp(0.0, window.span())),
        _ => fold_fframe(mode, window, progress),
    }
}

/// Whether `mode` is still advancing at `progress` given the sign of the
/// effective rate.
pub fn still_playing(mode: PlayMode, window: &PlayWindow, progress: f64, rate: f64) -> bool {
    match mode {
        PlayMode::Hold => false,
        PlayMode::Play => {
            if rate < 0.0 {
                progress > 0.0
            } else {
                progress < window.length()
            }
        }
        PlayMode::Loop | PlayMode::Pingpong => true,
    }
}
