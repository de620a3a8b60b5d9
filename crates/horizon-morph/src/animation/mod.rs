//! Animation curves for the morphing button.
//!
//! Clocks (from `horizon_morph_core`) produce linear progress; this module
//! turns that progress into values:
//!
//! - [`Easing`] / [`ease`] remap progress to perceived motion
//! - [`Interval`] restricts progress to a sub-range before easing
//! - [`Tween`] maps the eased value onto an output range
//!
//! # Example
//!
//! ```
//! use horizon_morph::animation::{Easing, Interval, Tween};
//!
//! let width = Tween::new(320.0_f32, 60.0);
//! let curve = Interval::full(Easing::EaseInOut);
//! assert_eq!(width.evaluate(&curve, 0.0), 320.0);
//! assert_eq!(width.evaluate(&curve, 1.0), 60.0);
//! ```

mod easing;
mod interval;

pub use easing::{Easing, ease};
pub use interval::{Interval, Lerp, PROGRESS_DOMAIN_END, Tween};
