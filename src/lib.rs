//! A headless single-axis kinetic scroll engine.
//!
//! `scroll-logic` turns a stream of pointer positions and timestamps into a scroll offset:
//! 1:1 drag tracking, rubber-band resistance past the edges, momentum after release, and
//! eased programmatic scrolling.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - container and content lengths along the scroll axis (`configure`)
//! - pointer input collapsed to one coordinate plus a timestamp in milliseconds
//!   (`begin_interaction` / `interact` / `end_interaction`)
//! - a render loop that polls `current_offset` and applies the result
//!
//! There is no timer and no thread. Every animation is a single immutable [`Animation`]
//! evaluated against a [`Clock`] when the offset is queried. Deceleration is computed in
//! closed form up front rather than stepped frame by frame.
//!
//! ```
//! use scroll_logic::{ManualClock, ScrollLogic, ScrollOptions};
//!
//! let clock = ManualClock::new(0.0);
//! let mut scroller = ScrollLogic::with_clock(ScrollOptions::default(), clock.clone());
//! scroller.configure(500.0, 2000.0);
//! assert_eq!(scroller.max_offset(), 1500.0);
//!
//! scroller.scroll_to(300.0, true).unwrap();
//! clock.advance(250.0);
//! assert_eq!(scroller.current_offset(), 300.0);
//! assert!(scroller.is_resting());
//! ```
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod animation;
mod clock;
mod easing;
mod engine;
mod error;
mod history;
pub mod kinetics;
mod options;
mod state;


pub use animation::Animation;
pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::{BACK_TENSION, Easing};
pub use engine::ScrollLogic;
pub use error::{Result, ScrollError};
pub use options::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_RETAIN,
    DEFAULT_VELOCITY_LOOKBACK_MS, DRAG_THRESHOLD, ScrollOptions,
};
pub use state::{Phase, ScrollState};
