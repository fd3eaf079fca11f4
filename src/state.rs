/// Interaction state of a [`crate::ScrollLogic`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No interaction and no animation.
    #[default]
    Resting,
    /// A pointer is down but has not moved past the drag threshold yet.
    Interacting,
    /// The offset tracks the pointer 1:1 (or slower past an edge).
    Dragging,
    /// A `scroll_to` animation or a deceleration is in flight.
    Animating,
}

/// A lightweight snapshot of the engine's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Last evaluated offset.
    pub offset: f64,
    pub max_offset: f64,
    pub phase: Phase,
}

impl ScrollState {
    /// Whether the offset currently lies outside `[0, max_offset]`.
    pub fn is_overscrolled(&self) -> bool {
        self.offset < 0.0 || self.offset > self.max_offset
    }
}
