//! Vizij Animation Clock (engine-agnostic)
//!
//! Lazily evaluated animation timing: given a native frame rate, a play rate
//! and a play mode (hold, play once, loop, ping-pong), derive the current
//! frame position from elapsed time on demand. Nothing ticks in the
//! background; each query reads one committed state snapshot and "now".
//!
//! Layers, bottom-up:
//! - `clock`: anchor + extrapolation, rebased on every rate change
//! - `mode`: folds the unbounded clock value into the active play window
//! - `state`/`versioned`: snapshot state and atomic publication
//! - `interface`: the consumer-facing `AnimInterface`

pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod hooks;
pub mod interface;
pub mod math;
pub mod mode;
pub mod state;
pub mod time;
pub mod versioned;

// Re-exports for consumers (adapters)
pub use clock::AnimClock;
pub use commands::PlaybackCommand;
pub use config::Config;
pub use error::ConfigError;
pub use hooks::{NoHooks, PlaybackHooks};
pub use interface::AnimInterface;
pub use mode::{PlayMode, PlayWindow};
pub use state::AnimationState;
pub use time::{ManualClock, SystemClock, TimeSource};
pub use versioned::{Snapshot, Versioned};
