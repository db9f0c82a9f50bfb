//! Capabilities supplied by the object that owns an animation.

/// Late-bound behavior of an animatable object.
///
/// Both methods have defaults, so an owner only overrides what it needs.
pub trait PlaybackHooks: Send + Sync {
    /// Authoritative frame count, consulted on every frame query.
    ///
    /// `None` defers to the count stored with `set_num_frames`.
    fn num_frames(&self) -> Option<i64> {
        None
    }

    /// Called once after each user-initiated playback change has been
    /// committed. Never called for `stop`.
    fn on_playback_activated(&self) {}
}

/// Owner with no frame provider and no activation handling.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl PlaybackHooks for NoHooks {}

impl<H: PlaybackHooks + ?Sized> PlaybackHooks for std::sync::Arc<H> {
    fn num_frames(&self) -> Option<i64> {
        (**self).num_frames()
    }

    fn on_playback_activated(&self) {
        (**self).on_playback_activated()
    }
}
