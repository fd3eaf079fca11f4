//! Closed-form momentum math.
//!
//! Deceleration is modelled as a velocity (offset per 60 Hz frame) that is multiplied by
//! [`FRICTION_PER_FRAME`] every frame until it drops below [`MIN_VELOCITY_BEFORE_TERMINATING`].
//! Instead of stepping that recurrence, the whole decay is summed up front and replayed as a
//! single eased [`crate::Animation`].

/// Frame rate the velocity unit is expressed in. Nothing here actually runs at this rate.
pub const FPS: f64 = 60.0;

/// Velocity multiplier applied per frame.
pub const FRICTION_PER_FRAME: f64 = 0.95;

/// Per-frame velocity below which deceleration ends.
pub const MIN_VELOCITY_BEFORE_TERMINATING: f64 = 0.1;

/// Per-frame release velocity needed to start deceleration at all.
pub const MIN_VELOCITY_FOR_DECELERATION: f64 = 1.0;

/// Overscroll divisor: dragging past an edge moves at a third of the finger speed.
pub const EDGE_RESISTANCE: f64 = 3.0;

/// The projected outcome of releasing with a given velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deceleration {
    /// Signed initial velocity, offset per frame.
    pub velocity: f64,
    /// Frames until the velocity falls below the stop threshold.
    pub frames: f64,
    /// Total signed distance travelled, rounded to an integer.
    pub distance: f64,
    /// The same distance before rounding.
    pub raw_distance: f64,
    pub duration_ms: f64,
}

impl Deceleration {
    /// Plans the decay for `velocity`.
    ///
    /// Returns `None` when the velocity is too small to produce any motion (including
    /// non-finite input).
    pub fn plan(velocity: f64) -> Option<Self> {
        let speed = velocity.abs();
        if !speed.is_finite() || speed <= MIN_VELOCITY_BEFORE_TERMINATING {
            return None;
        }

        let frames = (MIN_VELOCITY_BEFORE_TERMINATING.ln() - speed.ln()) / FRICTION_PER_FRAME.ln();
        // Finite geometric series over the frames until termination.
        let distance = velocity * (1.0 - FRICTION_PER_FRAME.powf(frames)) / (1.0 - FRICTION_PER_FRAME);
        let duration_ms = frames / FPS * 1000.0;

        Some(Self {
            velocity,
            frames,
            distance: round_offset(distance),
            raw_distance: distance,
            duration_ms,
        })
    }
}

/// Converts a movement of `moved` over `elapsed_ms` into offset per frame.
pub fn velocity_per_frame(moved: f64, elapsed_ms: f64) -> f64 {
    moved / elapsed_ms * (1000.0 / FPS)
}

/// Rounds to the nearest integer offset (halves round up).
pub fn round_offset(value: f64) -> f64 {
    (value + 0.5).floor()
}
