use crate::Easing;

/// One in-flight animation, evaluated lazily against the current time.
///
/// The descriptor never changes once created. The engine asks it for a position with
/// [`Animation::sample`] whenever the offset is queried, so irregular polling cannot drift.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub from: f64,
    pub distance: f64,
}

impl Animation {
    pub fn new(start_ms: f64, duration_ms: f64, easing: Easing, from: f64, distance: f64) -> Self {
        Self {
            start_ms,
            duration_ms,
            easing,
            from,
            distance,
        }
    }

    /// The offset this animation settles on.
    pub fn end(&self) -> f64 {
        self.from + self.distance
    }

    /// Elapsed fraction of the animation at `now_ms`.
    ///
    /// Not clamped: values `>= 1` mean the animation is over. A non-positive duration is
    /// treated as already finished.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (now_ms - self.start_ms) / self.duration_ms
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Unrounded, unclamped position at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> f64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.end();
        }
        self.from + self.distance * self.easing.sample(p.max(0.0))
    }
}
