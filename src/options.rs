/// Default duration of an animated [`crate::ScrollLogic::scroll_to`].
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 250.0;

/// Number of drag samples after which the history is trimmed.
pub const DEFAULT_HISTORY_LIMIT: usize = 60;

/// Number of newest drag samples kept when the history is trimmed.
pub const DEFAULT_HISTORY_RETAIN: usize = 30;

/// Window used to measure release velocity, and the idle time after which a release no
/// longer counts as a flick.
pub const DEFAULT_VELOCITY_LOOKBACK_MS: f64 = 100.0;

/// Movement needed before an interaction turns into a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Configuration for [`crate::ScrollLogic`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Enables animations for deceleration, snap back and `scroll_to`.
    ///
    /// When disabled, every offset change is applied immediately and a release never
    /// decelerates.
    pub animating: bool,

    /// Duration of animations started by `scroll_to`/`scroll_by` and by snap back.
    pub animation_duration_ms: f64,

    /// Lets content be dragged past its edges (at reduced speed) and spring back on release.
    pub bouncing: bool,

    pub history_limit: usize,
    pub history_retain: usize,

    pub velocity_lookback_ms: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            animating: true,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            bouncing: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            history_retain: DEFAULT_HISTORY_RETAIN,
            velocity_lookback_ms: DEFAULT_VELOCITY_LOOKBACK_MS,
        }
    }
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animating(mut self, animating: bool) -> Self {
        self.animating = animating;
        self
    }

    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_bouncing(mut self, bouncing: bool) -> Self {
        self.bouncing = bouncing;
        self
    }

    /// Sets the history trimming policy.
    ///
    /// `retain` is capped at `limit`, and `limit` is at least 2 so a velocity can always be
    /// measured.
    pub fn with_history(mut self, limit: usize, retain: usize) -> Self {
        self.history_limit = limit.max(2);
        self.history_retain = retain.min(self.history_limit);
        self
    }

    pub fn with_velocity_lookback_ms(mut self, lookback_ms: f64) -> Self {
        self.velocity_lookback_ms = lookback_ms;
        self
    }
}
