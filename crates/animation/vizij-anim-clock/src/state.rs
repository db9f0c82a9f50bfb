//! AnimationState: one committed version of an animatable's playback state.
//!
//! Queries are pure functions of the state and a timestamp. Mutations take
//! the timestamp at which they happen so the clock can be rebased there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::AnimClock;
use crate::math::floor_mod_i;
use crate::mode::{fold_fframe, fold_frame, rest_fframe, still_playing, PlayMode, PlayWindow};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    num_frames: i64,
    mode: PlayMode,
    window: PlayWindow,
    clock: AnimClock,
}

impl AnimationState {
    /// Fresh state: holding frame 0, zero frames, anchored at `now`.
    pub fn new(frame_rate: f64, play_rate: f64, now: f64) -> Self {
        Self {
            num_frames: 0,
            mode: PlayMode::Hold,
            window: PlayWindow::at(0.0),
            clock: AnimClock::new(frame_rate, play_rate, now),
        }
    }

    #[inline]
    pub fn num_frames(&self) -> i64 {
        self.num_frames
    }

    #[inline]
    pub fn play_mode(&self) -> PlayMode {
        self.mode
    }

    #[inline]
    pub fn window(&self) -> PlayWindow {
        self.window
    }

    #[inline]
    pub fn clock(&self) -> &AnimClock {
        &self.clock
    }

    #[inline]
    pub fn frame_rate(&self) -> f64 {
        self.clock.frame_rate()
    }

    #[inline]
    pub fn play_rate(&self) -> f64 {
        self.clock.play_rate()
    }

    #[inline]
    pub fn effective_frame_rate(&self) -> f64 {
        self.clock.effective_rate()
    }

    // ---- queries ----

    /// Frames travelled into the window at `now`, unbounded.
    #[inline]
    fn progress(&self, now: f64) -> f64 {
        self.clock.raw_frame(now) - self.window.from
    }

    /// Fractional frame in window coordinates (not wrapped to `num_frames`).
    pub fn full_fframe(&self, now: f64) -> f64 {
        fold_fframe(self.mode, &self.window, self.progress(now))
    }

    /// Whole frame in window coordinates, `offset` frames ahead.
    pub fn full_frame(&self, now: f64, offset: i64) -> i64 {
        fold_frame(self.mode, &self.window, self.progress(now), offset)
    }

    /// `full_fframe - full_frame(0)`, in `[0, 1)` except where Play pins its
    /// whole frame to the window end.
    pub fn frac(&self, now: f64) -> f64 {
        let progress = self.progress(now);
        fold_fframe(self.mode, &self.window, progress)
            - fold_frame(self.mode, &self.window, progress, 0) as f64
    }

    /// Current frame wrapped into `[0, num_frames)`; `0` with no frames.
    pub fn frame(&self, now: f64, num_frames: i64) -> i64 {
        wrap_frame(self.full_frame(now, 0), num_frames)
    }

    /// Frame following [`frame`](Self::frame), wrapped the same way.
    pub fn next_frame(&self, now: f64, num_frames: i64) -> i64 {
        wrap_frame(self.full_frame(now, 1), num_frames)
    }

    pub fn is_playing(&self, now: f64) -> bool {
        still_playing(
            self.mode,
            &self.window,
            self.progress(now),
            self.clock.effective_rate(),
        )
    }

    // ---- mutations ----

    /// Single pass over `[from, to]`, starting from the far end when the
    /// effective rate is negative.
    pub fn play_range(&mut self, from: f64, to: f64, now: f64) {
        let window = PlayWindow::new(from, to);
        let start = if self.clock.effective_rate() < 0.0 {
            window.length()
        } else {
            0.0
        };
        self.enter(PlayMode::Play, window, start, now);
    }

    /// Endless wraparound over `[from, to]`.
    pub fn loop_range(&mut self, restart: bool, from: f64, to: f64, now: f64) {
        self.enter_cyclic(PlayMode::Loop, restart, PlayWindow::new(from, to), now);
    }

    /// Endless back-and-forth over `[from, to]`.
    pub fn pingpong_range(&mut self, restart: bool, from: f64, to: f64, now: f64) {
        self.enter_cyclic(PlayMode::Pingpong, restart, PlayWindow::new(from, to), now);
    }

    /// Hold `frame` regardless of the clock.
    pub fn pose(&mut self, frame: f64, now: f64) {
        self.enter(PlayMode::Hold, PlayWindow::at(frame), 0.0, now);
    }

    /// Hold the frame currently being reported.
    pub fn stop(&mut self, now: f64) {
        let here = rest_fframe(self.mode, &self.window, self.progress(now));
        self.pose(here, now);
    }

    pub fn set_play_rate(&mut self, play_rate: f64, now: f64) {
        self.clock.set_play_rate(play_rate, now);
    }

    pub fn set_frame_rate(&mut self, frame_rate: f64, now: f64) {
        self.clock.set_frame_rate(frame_rate, now);
    }

    pub fn set_num_frames(&mut self, num_frames: i64) {
        self.num_frames = num_frames;
    }

    fn enter_cyclic(&mut self, mode: PlayMode, restart: bool, window: PlayWindow, now: f64) {
        let start = if restart {
            0.0
        } else {
            window.progress_of(self.full_fframe(now))
        };
        self.enter(mode, window, start, now);
    }

    fn enter(&mut self, mode: PlayMode, window: PlayWindow, progress: f64, now: f64) {
        self.mode = mode;
        self.window = window;
        self.clock.rebase(window.from + progress, now);
    }

    /// Human-readable rendering at `now`.
    pub fn summary(&self, now: f64, num_frames: i64) -> Summary<'_> {
        Summary {
            state: self,
            now,
            num_frames,
        }
    }
}

#[inline]
fn wrap_frame(full: i64, num_frames: i64) -> i64 {
    if num_frames <= 0 {
        return 0;
    }
    floor_mod_i(full, num_frames)
}

/// Diagnostic view of an [`AnimationState`] at a fixed timestamp.
pub struct Summary<'a> {
    state: &'a AnimationState,
    now: f64,
    num_frames: i64,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state;
        match s.mode {
            PlayMode::Hold => write!(f, "hold, frame {}", s.window.from)?,
            mode => write!(
                f,
                "{}, frames {} to {}, frame {:.3}",
                mode,
                s.window.from,
                s.window.to,
                s.full_fframe(self.now)
            )?,
        }
        write!(
            f,
            " ({} of {} frames), {} fps x {}",
            s.frame(self.now, self.num_frames),
            self.num_frames.max(0),
            s.frame_rate(),
            s.play_rate()
        )?;
        if s.mode != PlayMode::Hold {
            let status = if s.is_playing(self.now) {
                "playing"
            } else {
                "done"
            };
            write!(f, ", {status}")?;
        }
        Ok(())
    }
}
