/// Overshoot tension of [`Easing::EaseOutBack`].
///
/// Shares its value with the edge resistance applied while dragging past a boundary.
pub const BACK_TENSION: f64 = 3.0;

/// Easing curves used by [`crate::Animation`].
///
/// All curves map `[0, 1]` onto `[0, 1]` with `sample(0) == 0` and `sample(1) == 1`.
/// `EaseOutBack` leaves the range in between (it overshoots the end before settling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Used for a fresh programmatic scroll.
    EaseInOutCubic,
    /// Used for a programmatic scroll that interrupts a running animation.
    EaseOutCubic,
    /// Used for in-bounds deceleration.
    EaseOutExpo,
    /// Used for deceleration redirected onto a boundary.
    EaseOutBack,
}

impl Easing {
    pub fn sample(self, p: f64) -> f64 {
        match self {
            Self::EaseInOutCubic => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    let u = p - 1.0;
                    4.0 * u * u * u + 1.0
                }
            }
            Self::EaseOutCubic => {
                let u = p - 1.0;
                u * u * u + 1.0
            }
            Self::EaseOutExpo => {
                // 1 - 2^-10 is not quite 1.
                if p >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * p)
                }
            }
            Self::EaseOutBack => {
                let s = BACK_TENSION;
                let u = p - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
        Easing::EaseOutExpo,
        Easing::EaseOutBack,
    ];

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for easing in ALL {
            assert!(approx(easing.sample(0.0), 0.0), "{easing:?} at 0");
            assert_eq!(easing.sample(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_cubic_is_symmetric_around_midpoint() {
        let e = Easing::EaseInOutCubic;
        assert!(approx(e.sample(0.5), 0.5));
        assert!(approx(e.sample(0.25), 0.0625));
        assert!(approx(e.sample(0.25) + e.sample(0.75), 1.0));
    }

    #[test]
    fn ease_out_curves_are_front_loaded() {
        assert!(Easing::EaseOutCubic.sample(0.5) > 0.8);
        assert!(approx(Easing::EaseOutExpo.sample(0.1), 0.5));
    }

    #[test]
    fn ease_out_back_overshoots_by_a_quarter_at_midpoint() {
        let e = Easing::EaseOutBack;
        assert!(approx(e.sample(0.5), 1.25));
        assert!(e.sample(0.9) > 1.0);
    }

    #[test]
    fn monotonic_curves_never_decrease() {
        for easing in [
            Easing::EaseInOutCubic,
            Easing::EaseOutCubic,
            Easing::EaseOutExpo,
        ] {
            let mut prev = easing.sample(0.0);
            for i in 1..=100 {
                let v = easing.sample(i as f64 / 100.0);
                assert!(v >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }
}
