//! Intervals and tweens.
//!
//! An [`Interval`] restricts clock progress to a sub-range and eases it; a
//! [`Tween`] maps the eased value onto a concrete output range. Composing the
//! two turns raw clock progress into a width, a margin or an opacity.

use super::easing::{Easing, ease};

/// End of the progress domain used for every morph curve.
///
/// Progress past this point is treated as complete, so the final thousandth
/// of a run holds the end value.
pub const PROGRESS_DOMAIN_END: f32 = 0.999;

/// A sub-range of clock progress with an easing curve.
///
/// Progress before `begin` maps to `0.0`, progress after `end` maps to `1.0`,
/// and progress inside is rescaled to `[0, 1]` and eased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    begin: f32,
    end: f32,
    easing: Easing,
}

impl Interval {
    /// Create an interval over `[begin, end]`.
    ///
    /// `begin` must be less than `end`; both should lie within `[0, 1]`.
    pub const fn new(begin: f32, end: f32, easing: Easing) -> Self {
        Self { begin, end, easing }
    }

    /// The standard morph domain, `[0.0, 0.999]`.
    pub const fn full(easing: Easing) -> Self {
        Self::new(0.0, PROGRESS_DOMAIN_END, easing)
    }

    /// The first half of the progress domain, `[0.0, 0.5]`.
    pub const fn first_half(easing: Easing) -> Self {
        Self::new(0.0, 0.5, easing)
    }

    /// Start of the interval.
    pub fn begin(&self) -> f32 {
        self.begin
    }

    /// End of the interval.
    pub fn end(&self) -> f32 {
        self.end
    }

    /// Map raw clock progress through the interval and its curve.
    pub fn transform(&self, progress: f32) -> f32 {
        let t = ((progress - self.begin) / (self.end - self.begin)).clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        ease(self.easing, t)
    }
}

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    /// Interpolate from `self` to `other` by `t` in `[0, 1]`.
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// A `begin → end` value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    /// Value at `t = 0`.
    pub begin: T,
    /// Value at `t = 1`.
    pub end: T,
}

impl<T: Lerp> Tween<T> {
    /// Create a tween.
    pub const fn new(begin: T, end: T) -> Self {
        Self { begin, end }
    }

    /// Value at already-eased `t`.
    pub fn lerp(&self, t: f32) -> T {
        if t <= 0.0 {
            self.begin
        } else if t >= 1.0 {
            self.end
        } else {
            self.begin.lerp(self.end, t)
        }
    }

    /// Value at raw clock `progress`, passed through `interval` first.
    pub fn evaluate(&self, interval: &Interval, progress: f32) -> T {
        self.lerp(interval.transform(progress))
    }
}
