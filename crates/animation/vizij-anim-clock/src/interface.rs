//! AnimInterface: the query/mutation surface consumers call.
//!
//! Methods:
//! - mutations: play/loop/pingpong (whole animation or a range), pose, stop,
//!   set_play_rate, set_frame_rate, set_num_frames, apply (command form)
//! - queries: frame, next_frame, frac, full_frame, full_fframe, is_playing,
//!   play_mode, rates, num_frames, snapshot
//!
//! All methods take `&self`; an `AnimInterface` can sit behind an `Arc` and be
//! driven from a logic thread while a render thread queries it. Every
//! mutation publishes one whole new [`AnimationState`] version, and every query
//! evaluates a single snapshot against a single timestamp.

use std::fmt;
use std::sync::Arc;

use crate::commands::PlaybackCommand;
use crate::config::Config;
use crate::hooks::{NoHooks, PlaybackHooks};
use crate::mode::{PlayMode, PlayWindow};
use crate::state::AnimationState;
use crate::time::{SystemClock, TimeSource};
use crate::versioned::{Snapshot, Versioned};

pub struct AnimInterface<H = NoHooks> {
    state: Versioned<AnimationState>,
    time: Arc<dyn TimeSource>,
    hooks: H,
}

impl AnimInterface<NoHooks> {
    /// Interface on the system clock with no owner hooks.
    pub fn new(cfg: &Config) -> Self {
        Self::with_parts(cfg, Arc::new(SystemClock::new()), NoHooks)
    }
}

impl Default for AnimInterface<NoHooks> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<H: PlaybackHooks> AnimInterface<H> {
    pub fn with_parts(cfg: &Config, time: Arc<dyn TimeSource>, hooks: H) -> Self {
        let state = AnimationState::new(cfg.default_frame_rate, cfg.default_play_rate, time.now());
        Self {
            state: Versioned::new(state),
            time,
            hooks,
        }
    }

    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Current timestamp of the underlying time source.
    #[inline]
    pub fn now(&self) -> f64 {
        self.time.now()
    }

    /// Committed state at the time of the call.
    pub fn snapshot(&self) -> Arc<Snapshot<AnimationState>> {
        self.state.read()
    }

    /// Number of mutations committed so far.
    pub fn version(&self) -> u64 {
        self.state.version()
    }

    // ---- mutations ----

    /// Play the whole animation once.
    pub fn play(&self) {
        let to = self.default_to();
        self.play_range(0.0, to);
    }

    /// Play `[from, to]` once, then hold at `to`.
    pub fn play_range(&self, from: f64, to: f64) {
        if !window_is_finite("play", from, to) {
            return;
        }
        log::debug!("play frames {from} to {to}");
        self.commit(true, |s, now| s.play_range(from, to, now));
    }

    /// Loop the whole animation.
    pub fn loop_all(&self, restart: bool) {
        let to = self.default_to();
        self.loop_range(restart, 0.0, to);
    }

    /// Loop over `[from, to]`. With `restart == false` the current frame is
    /// kept (clamped into the new window) instead of jumping to `from`.
    pub fn loop_range(&self, restart: bool, from: f64, to: f64) {
        if !window_is_finite("loop", from, to) {
            return;
        }
        log::debug!("loop frames {from} to {to} (restart={restart})");
        if from == to {
            log::debug!("loop window is a single frame; holding {from}");
        }
        self.commit(true, |s, now| s.loop_range(restart, from, to, now));
    }

    /// Ping-pong over the whole animation.
    pub fn pingpong(&self, restart: bool) {
        let to = self.default_to();
        self.pingpong_range(restart, 0.0, to);
    }

    /// Ping-pong over `[from, to]`; `restart` as in [`loop_range`](Self::loop_range).
    pub fn pingpong_range(&self, restart: bool, from: f64, to: f64) {
        if !window_is_finite("pingpong", from, to) {
            return;
        }
        log::debug!("pingpong frames {from} to {to} (restart={restart})");
        if from == to {
            log::debug!("pingpong window is a single frame; holding {from}");
        }
        self.commit(true, |s, now| s.pingpong_range(restart, from, to, now));
    }

    /// Hold a single frame.
    pub fn pose(&self, frame: f64) {
        if !frame.is_finite() {
            log::warn!("pose ignored: non-finite frame {frame}");
            return;
        }
        log::debug!("pose frame {frame}");
        self.commit(true, |s, now| s.pose(frame, now));
    }

    /// Hold the current frame. Not a new playback decision, so the
    /// activation hook is not called.
    pub fn stop(&self) {
        log::debug!("stop");
        self.commit(false, |s, now| s.stop(now));
    }

    /// Change the play-rate multiplier without moving the current frame.
    /// Negative plays backwards; zero freezes.
    pub fn set_play_rate(&self, play_rate: f64) {
        if !play_rate.is_finite() {
            log::warn!("set_play_rate ignored: non-finite rate {play_rate}");
            return;
        }
        self.commit(true, |s, now| s.set_play_rate(play_rate, now));
    }

    /// Change the native frame rate without moving the current frame.
    pub fn set_frame_rate(&self, frame_rate: f64) {
        if !frame_rate.is_finite() {
            log::warn!("set_frame_rate ignored: non-finite rate {frame_rate}");
            return;
        }
        self.commit(true, |s, now| s.set_frame_rate(frame_rate, now));
    }

    /// Store the frame count used when the hooks do not provide one.
    pub fn set_num_frames(&self, num_frames: i64) {
        if num_frames < 0 {
            log::warn!("negative frame count {num_frames}; frame queries will report 0");
        }
        self.state.write(|s| s.set_num_frames(num_frames));
    }

    /// Apply a data-driven command with the same effect as the direct call.
    pub fn apply(&self, cmd: PlaybackCommand) {
        match cmd {
            PlaybackCommand::Play { from, to } => {
                let (from, to) = self.resolve_window(from, to);
                self.play_range(from, to);
            }
            PlaybackCommand::Loop { restart, from, to } => {
                let (from, to) = self.resolve_window(from, to);
                self.loop_range(restart, from, to);
            }
            PlaybackCommand::Pingpong { restart, from, to } => {
                let (from, to) = self.resolve_window(from, to);
                self.pingpong_range(restart, from, to);
            }
            PlaybackCommand::Pose { frame } => self.pose(frame),
            PlaybackCommand::Stop => self.stop(),
            PlaybackCommand::SetPlayRate { rate } => self.set_play_rate(rate),
            PlaybackCommand::SetFrameRate { rate } => self.set_frame_rate(rate),
            PlaybackCommand::SetNumFrames { num_frames } => self.set_num_frames(num_frames),
        }
    }

    // ---- queries ----

    /// Frame count: the hooks' answer if any, else the stored count.
    pub fn num_frames(&self) -> i64 {
        let stored = self.state.read().num_frames();
        self.resolve_num_frames(stored)
    }

    /// Current frame in `[0, num_frames)`, or `0` if there are no frames.
    pub fn frame(&self) -> i64 {
        let (s, now) = self.read_at_now();
        s.frame(now, self.resolve_num_frames(s.num_frames()))
    }

    /// Frame to blend toward from [`frame`](Self::frame). Equals `frame()` at
    /// the end of a single play and while holding.
    pub fn next_frame(&self) -> i64 {
        let (s, now) = self.read_at_now();
        s.next_frame(now, self.resolve_num_frames(s.num_frames()))
    }

    /// `full_fframe() - full_frame()`; its magnitude is the blend weight
    /// toward [`next_frame`](Self::next_frame).
    pub fn frac(&self) -> f64 {
        let (s, now) = self.read_at_now();
        s.frac(now)
    }

    /// Whole frame in window coordinates, not wrapped to the frame count.
    pub fn full_frame(&self) -> i64 {
        self.full_frame_at_offset(0)
    }

    /// Whole frame `offset` frames ahead of the current one, without
    /// advancing anything.
    pub fn full_frame_at_offset(&self, offset: i64) -> i64 {
        let (s, now) = self.read_at_now();
        s.full_frame(now, offset)
    }

    /// Fractional frame in window coordinates.
    pub fn full_fframe(&self) -> f64 {
        let (s, now) = self.read_at_now();
        s.full_fframe(now)
    }

    pub fn is_playing(&self) -> bool {
        let (s, now) = self.read_at_now();
        s.is_playing(now)
    }

    pub fn play_mode(&self) -> PlayMode {
        self.state.read().play_mode()
    }

    pub fn play_window(&self) -> PlayWindow {
        self.state.read().window()
    }

    pub fn play_rate(&self) -> f64 {
        self.state.read().play_rate()
    }

    pub fn frame_rate(&self) -> f64 {
        self.state.read().frame_rate()
    }

    /// `frame_rate * play_rate`.
    pub fn effective_frame_rate(&self) -> f64 {
        self.state.read().effective_frame_rate()
    }

    // ---- plumbing ----

    fn commit(&self, activate: bool, f: impl FnOnce(&mut AnimationState, f64)) {
        let now = self.time.now();
        self.state.write(|s| f(s, now));
        if activate {
            self.hooks.on_playback_activated();
        }
    }

    fn read_at_now(&self) -> (Arc<Snapshot<AnimationState>>, f64) {
        let snapshot = self.state.read();
        (snapshot, self.time.now())
    }

    #[inline]
    fn resolve_num_frames(&self, stored: i64) -> i64 {
        self.hooks.num_frames().unwrap_or(stored)
    }

    fn default_to(&self) -> f64 {
        self.num_frames().saturating_sub(1).max(0) as f64
    }

    fn resolve_window(&self, from: Option<f64>, to: Option<f64>) -> (f64, f64) {
        let to = match to {
            Some(to) => to,
            None => self.default_to(),
        };
        (from.unwrap_or(0.0), to)
    }
}

fn window_is_finite(op: &str, from: f64, to: f64) -> bool {
    if from.is_finite() && to.is_finite() {
        true
    } else {
        log::warn!("{op} ignored: non-finite window {from} to {to}");
        false
    }
}

impl<H: PlaybackHooks> fmt::Display for AnimInterface<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, now) = self.read_at_now();
        let n = self.resolve_num_frames(s.num_frames());
        write!(f, "{}", s.summary(now, n))
    }
}

impl<H> fmt::Debug for AnimInterface<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state.read();
        f.debug_struct("AnimInterface")
            .field("version", &s.version())
            .field("state", &**s)
            .finish_non_exhaustive()
    }
}
