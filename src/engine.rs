use crate::error::{check_offset, check_timestamp};
use crate::history::PositionHistory;
use crate::kinetics::{
    Deceleration, EDGE_RESISTANCE, MIN_VELOCITY_FOR_DECELERATION, round_offset,
    velocity_per_frame,
};
use crate::options::DRAG_THRESHOLD;
use crate::{Animation, Clock, Easing, Phase, Result, ScrollOptions, ScrollState, SystemClock};

/// A headless single-axis kinetic scroll engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never schedules work on its own.
/// - Your adapter drives it with geometry (`configure`) and pointer input
///   (`begin_interaction` / `interact` / `end_interaction`).
/// - Your renderer polls [`ScrollLogic::current_offset`] on whatever cadence it likes. Animations
///   are evaluated from the clock at query time, so skipped or irregular polls never drift.
///
/// Offsets grow as content moves towards its end: dragging the pointer towards smaller input
/// offsets scrolls forward.
#[derive(Clone, Debug)]
pub struct ScrollLogic<C = SystemClock> {
    options: ScrollOptions,
    clock: C,

    container_length: f64,
    content_length: f64,
    max_offset: f64,
    scroll_offset: f64,
    scheduled_offset: f64,

    is_interacting: bool,
    is_dragging: bool,
    scrolling_complete: bool,
    animation: Option<Animation>,
    is_decelerating: bool,

    history: PositionHistory,
    initial_touch_offset: f64,
    last_touch_offset: f64,
    last_touch_move: f64,
    deceleration_velocity: f64,
}

impl ScrollLogic<SystemClock> {
    /// Creates an engine driven by the system clock.
    pub fn new(options: ScrollOptions) -> Self {
        Self::with_clock(options, SystemClock::new())
    }
}

impl Default for ScrollLogic<SystemClock> {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

impl<C: Clock> ScrollLogic<C> {
    pub fn with_clock(options: ScrollOptions, clock: C) -> Self {
        sdebug!(
            animating = options.animating,
            bouncing = options.bouncing,
            animation_duration_ms = options.animation_duration_ms,
            "ScrollLogic::new"
        );
        Self {
            options,
            clock,
            container_length: 0.0,
            content_length: 0.0,
            max_offset: 0.0,
            scroll_offset: 0.0,
            scheduled_offset: 0.0,
            is_interacting: false,
            is_dragging: false,
            scrolling_complete: true,
            animation: None,
            is_decelerating: false,
            history: PositionHistory::new(),
            initial_touch_offset: 0.0,
            last_touch_offset: 0.0,
            last_touch_move: 0.0,
            deceleration_velocity: 0.0,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replaces the options. Takes effect for subsequent operations only: a running animation
    /// keeps its descriptor.
    pub fn set_options(&mut self, options: ScrollOptions) {
        strace!(
            animating = options.animating,
            bouncing = options.bouncing,
            "ScrollLogic::set_options"
        );
        self.options = options;
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ------------------------------------------------------------------------------------------
    // Geometry & query
    // ------------------------------------------------------------------------------------------

    /// Sets the visible length of the container and the full length of the content.
    ///
    /// Lengths are rounded to integers. Negative or non-finite lengths count as zero. The
    /// current offset is then re-applied with an animated `scroll_to`, so an offset that
    /// fell out of range glides back in. Interaction state is left alone.
    pub fn configure(&mut self, container_length: f64, content_length: f64) {
        self.container_length = normalize_length(container_length);
        self.content_length = normalize_length(content_length);
        self.max_offset = (self.content_length - self.container_length).max(0.0);
        sdebug!(
            container_length = self.container_length,
            content_length = self.content_length,
            max_offset = self.max_offset,
            "configure"
        );

        // Without bouncing the offset may not leave the range, not even while gliding back.
        if !self.options.bouncing {
            self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset);
        }
        self.scroll_to_clamped(self.scroll_offset, true);
    }

    pub fn container_length(&self) -> f64 {
        self.container_length
    }

    pub fn content_length(&self) -> f64 {
        self.content_length
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Evaluates the offset at the clock's current time.
    pub fn current_offset(&mut self) -> f64 {
        let now = self.clock.now_ms();
        self.evaluate(now)
    }

    /// Evaluates the offset at an explicit time on the engine clock's timeline.
    pub fn offset_at(&mut self, now_ms: f64) -> Result<f64> {
        let now = check_timestamp(now_ms)?;
        Ok(self.evaluate(now))
    }

    fn evaluate(&mut self, now: f64) -> f64 {
        let Some(animation) = self.animation else {
            return self.scroll_offset;
        };

        if animation.is_done(now) {
            let end = animation.end();
            self.scroll_offset = if self.options.bouncing {
                end
            } else {
                end.clamp(0.0, self.max_offset)
            };
            self.finish_animation();
            strace!(offset = self.scroll_offset, "animation complete");
            return self.scroll_offset;
        }

        let mut offset = animation.sample(now);

        // Without bouncing, anything crossing an edge is cut off right there.
        if !self.options.bouncing && (offset < 0.0 || offset > self.max_offset) {
            offset = offset.clamp(0.0, self.max_offset);
            self.finish_animation();
            strace!(offset, "animation cut at boundary");
        }

        self.scroll_offset = round_offset(offset);
        self.scroll_offset
    }

    fn finish_animation(&mut self) {
        self.animation = None;
        self.is_decelerating = false;
        self.scrolling_complete = true;
    }

    /// Returns the last evaluated offset without advancing any animation.
    pub fn last_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// The offset the engine is heading to: the end of the running animation, or the current
    /// offset when idle.
    pub fn scheduled_offset(&self) -> f64 {
        self.scheduled_offset
    }

    pub fn is_resting(&self) -> bool {
        !self.is_interacting && self.animation.is_none()
    }

    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the running animation is a release deceleration (as opposed to a `scroll_to`).
    pub fn is_decelerating(&self) -> bool {
        self.is_decelerating
    }

    /// Whether the last gesture or animation has come to rest.
    pub fn is_scrolling_complete(&self) -> bool {
        self.scrolling_complete
    }

    /// Release velocity measured by the last `end_interaction`, in offset per 60 Hz frame.
    pub fn deceleration_velocity(&self) -> f64 {
        self.deceleration_velocity
    }

    pub fn animation(&self) -> Option<Animation> {
        self.animation
    }

    pub fn phase(&self) -> Phase {
        if self.is_dragging {
            Phase::Dragging
        } else if self.is_interacting {
            Phase::Interacting
        } else if self.animation.is_some() {
            Phase::Animating
        } else {
            Phase::Resting
        }
    }

    /// Returns a lightweight snapshot of the current state.
    ///
    /// The offset is the last evaluated one; call `current_offset` first for a fresh value.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            max_offset: self.max_offset,
            phase: self.phase(),
        }
    }

    // ------------------------------------------------------------------------------------------
    // Programmatic scrolling
    // ------------------------------------------------------------------------------------------

    /// Scrolls to `offset`, clamped to `[0, max_offset]`.
    ///
    /// Any running animation is dropped first; the offset stays at its last evaluated value.
    /// When the clamped target equals that value nothing is animated, but the target is still
    /// published so internal state is guaranteed to be in sync.
    pub fn scroll_to(&mut self, offset: f64, animate: bool) -> Result<()> {
        let offset = check_offset(offset)?;
        self.scroll_to_clamped(offset, animate);
        Ok(())
    }

    /// Scrolls relative to the scheduled target.
    ///
    /// Consecutive animated calls accumulate instead of restarting from a mid-animation
    /// snapshot.
    pub fn scroll_by(&mut self, delta: f64, animate: bool) -> Result<()> {
        let delta = check_offset(delta)?;
        let base = if self.animation.is_some() {
            self.scheduled_offset
        } else {
            self.scroll_offset
        };
        self.scroll_to_clamped(base + delta, animate);
        Ok(())
    }

    fn scroll_to_clamped(&mut self, offset: f64, mut animate: bool) {
        let was_animating = self.animation.take().is_some();
        self.is_decelerating = false;

        let offset = offset.clamp(0.0, self.max_offset);
        if offset == self.scroll_offset {
            animate = false;
        }

        self.publish(offset, animate, was_animating);
    }

    fn publish(&mut self, offset: f64, animate: bool, was_animating: bool) {
        self.scheduled_offset = offset;

        if animate && self.options.animating {
            // Continue the previous motion's momentum instead of easing in again.
            let easing = if was_animating {
                Easing::EaseOutCubic
            } else {
                Easing::EaseInOutCubic
            };
            let from = self.scroll_offset;
            self.animation = Some(Animation::new(
                self.clock.now_ms(),
                self.options.animation_duration_ms,
                easing,
                from,
                offset - from,
            ));
            self.scrolling_complete = false;
            strace!(from, to = offset, ?easing, "publish animated");
        } else {
            self.animation = None;
            self.scroll_offset = offset;
            if !self.is_interacting {
                self.scrolling_complete = true;
            }
            strace!(offset, "publish");
        }
    }

    // ------------------------------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------------------------------

    /// Starts a gesture at input `offset`.
    ///
    /// Stops any running animation immediately, freezing the offset at its last evaluated
    /// value.
    pub fn begin_interaction(&mut self, offset: f64, timestamp: f64) -> Result<()> {
        let offset = check_offset(offset)?;
        let timestamp = check_timestamp(timestamp)?;
        sdebug!(offset, timestamp, "begin_interaction");

        self.animation = None;
        self.is_decelerating = false;
        self.scheduled_offset = self.scroll_offset;

        self.initial_touch_offset = offset;
        self.last_touch_offset = offset;
        self.last_touch_move = timestamp;

        self.is_interacting = true;
        self.is_dragging = false;
        self.scrolling_complete = false;
        self.history.clear();
        Ok(())
    }

    /// Feeds a pointer move. Ignored unless a gesture is in progress.
    pub fn interact(&mut self, offset: f64, timestamp: f64) -> Result<()> {
        let offset = check_offset(offset)?;
        let timestamp = check_timestamp(timestamp)?;
        if !self.is_interacting {
            return Ok(());
        }

        let limit = self.options.history_limit;
        let retain = self.options.history_retain;

        if self.is_dragging {
            let distance = offset - self.last_touch_offset;
            let mut next = self.scroll_offset - distance;

            if next < 0.0 || next > self.max_offset {
                if self.options.bouncing {
                    next = self.scroll_offset - distance / EDGE_RESISTANCE;
                } else {
                    next = next.clamp(0.0, self.max_offset);
                }
            }

            let next = round_offset(next);
            self.history.push(next, timestamp, limit, retain);
            strace!(offset = next, timestamp, "drag");
            self.publish(next, false, false);
        } else {
            self.history
                .push(self.scroll_offset, timestamp, limit, retain);
            if (offset - self.initial_touch_offset).abs() >= DRAG_THRESHOLD {
                self.is_dragging = true;
                strace!(offset, timestamp, "drag threshold crossed");
            }
        }

        self.last_touch_offset = offset;
        self.last_touch_move = timestamp;
        Ok(())
    }

    /// Ends the gesture at `timestamp`.
    ///
    /// An overscrolled offset springs back into bounds. Otherwise a fast enough release starts
    /// a deceleration. A gesture that never turned into a drag simply ends.
    pub fn end_interaction(&mut self, timestamp: f64) -> Result<()> {
        let timestamp = check_timestamp(timestamp)?;
        if !self.is_interacting {
            return Ok(());
        }

        let was_dragging = self.is_dragging;
        self.is_interacting = false;
        self.is_dragging = false;

        // A press can land on a snap back and freeze it past the edge, so this also runs for
        // gestures that never became a drag.
        if self.is_overscrolled() {
            sdebug!(offset = self.scroll_offset, "end_interaction: snap back");
            self.history.clear();
            self.scroll_to_clamped(self.scroll_offset, true);
            return Ok(());
        }

        if !was_dragging {
            sdebug!(timestamp, "end_interaction without drag");
            self.scrolling_complete = true;
        } else if self.options.animating {
            self.release(timestamp);
        } else {
            self.scrolling_complete = true;
        }

        self.history.clear();
        Ok(())
    }

    /// Abandons the gesture without any deceleration, e.g. when the platform cancels the
    /// touch. An overscrolled offset still springs back.
    pub fn cancel_interaction(&mut self) {
        if !self.is_interacting {
            return;
        }
        sdebug!(offset = self.scroll_offset, "cancel_interaction");

        self.is_interacting = false;
        self.is_dragging = false;
        self.history.clear();

        if self.is_overscrolled() {
            self.scroll_to_clamped(self.scroll_offset, true);
        } else {
            self.scrolling_complete = true;
        }
    }

    fn is_overscrolled(&self) -> bool {
        self.scroll_offset < 0.0 || self.scroll_offset > self.max_offset
    }

    fn release(&mut self, timestamp: f64) {
        let lookback = self.options.velocity_lookback_ms;

        // The pointer rested before lifting: no flick.
        if timestamp - self.last_touch_move > lookback {
            sdebug!(idle_ms = timestamp - self.last_touch_move, "release after pause");
            self.scrolling_complete = true;
            return;
        }

        let (Some(start), Some(newest)) = (
            self.history.window_start(self.last_touch_move, lookback),
            self.history.newest(),
        ) else {
            self.scrolling_complete = true;
            return;
        };

        let elapsed = newest.timestamp - start.timestamp;
        if elapsed <= 0.0 {
            self.scrolling_complete = true;
            return;
        }

        self.deceleration_velocity = velocity_per_frame(self.scroll_offset - start.offset, elapsed);
        if self.deceleration_velocity.abs() > MIN_VELOCITY_FOR_DECELERATION {
            self.start_deceleration();
        } else {
            sdebug!(velocity = self.deceleration_velocity, "release too slow");
            self.scrolling_complete = true;
        }
    }

    fn start_deceleration(&mut self) {
        let Some(plan) = Deceleration::plan(self.deceleration_velocity) else {
            self.scrolling_complete = true;
            return;
        };

        let from = self.scroll_offset;
        let mut animation = Animation::new(
            self.clock.now_ms(),
            plan.duration_ms,
            Easing::EaseOutExpo,
            from,
            plan.distance,
        );

        // Judged on the unrounded travel, so a flick ending a fraction past the edge still
        // counts as overshooting.
        let projected = from + plan.raw_distance;
        let overshoots = projected < 0.0 || projected > self.max_offset;
        if self.options.bouncing && overshoots {
            let edge = if projected < 0.0 { 0.0 } else { self.max_offset };
            animation.distance = edge - from;
            animation.easing = Easing::EaseOutBack;
            animation.duration_ms /= EDGE_RESISTANCE;
        }

        sdebug!(
            velocity = plan.velocity,
            distance = animation.distance,
            duration_ms = animation.duration_ms,
            redirected = self.options.bouncing && overshoots,
            "start_deceleration"
        );

        self.scheduled_offset = animation.end().clamp(0.0, self.max_offset);
        self.animation = Some(animation);
        self.is_decelerating = true;
        self.scrolling_complete = false;
    }
}

fn normalize_length(length: f64) -> f64 {
    if length.is_finite() {
        round_offset(length).max(0.0)
    } else {
        0.0
    }
}
