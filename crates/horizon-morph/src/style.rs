//! Style settings for the morphing button.
//!
//! Timings and metrics are peripheral to the state machine, so they live in
//! one serde-backed struct that can be loaded from TOML. Every field has a
//! default; a file only needs the values it overrides.
//!
//! ```
//! use horizon_morph::MorphStyle;
//!
//! let style = MorphStyle::from_toml_str(r#"
//! loading_duration_ms = 400
//! collapsed_width = 48.0
//!
//! [expanded]
//! width = 1280.0
//! height = 720.0
//! "#).unwrap();
//! assert_eq!(style.loading_duration().as_millis(), 400);
//! assert_eq!(style.resting_width, MorphStyle::default().resting_width);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{ButtonError, Result};
use crate::geometry::Size;

/// Timings and metrics of a morphing button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphStyle {
    /// Length of the entrance reveal.
    pub reveal_duration_ms: u64,
    /// Length of the loading squeeze (and of its reversal).
    pub loading_duration_ms: u64,
    /// Length of the full-screen expansion.
    pub transition_duration_ms: u64,
    /// Width at rest.
    pub resting_width: f32,
    /// Height at rest and while loading.
    pub resting_height: f32,
    /// Width while squeezed.
    pub collapsed_width: f32,
    /// Corner radius at rest; the expansion squares it off.
    pub corner_radius: f32,
    /// Curve applied to every morph.
    pub easing: Easing,
    /// Size the transition expands to, normally the host screen size.
    pub expanded: Size,
}

impl Default for MorphStyle {
    fn default() -> Self {
        Self {
            reveal_duration_ms: 800,
            loading_duration_ms: 700,
            transition_duration_ms: 600,
            resting_width: 320.0,
            resting_height: 60.0,
            collapsed_width: 60.0,
            corner_radius: 30.0,
            easing: Easing::EaseInOut,
            expanded: Size::new(1080.0, 1920.0),
        }
    }
}

impl MorphStyle {
    /// Parse a style from TOML and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let style: Self = toml::from_str(text)?;
        style.validate()?;
        Ok(style)
    }

    /// Write the style as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Set the expansion target, typically from the host canvas size.
    pub fn with_expanded_size(mut self, expanded: Size) -> Self {
        self.expanded = expanded;
        self
    }

    /// Set the curve used by every morph.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set all three durations.
    pub fn with_durations(mut self, reveal: Duration, loading: Duration, transition: Duration) -> Self {
        self.reveal_duration_ms = whole_millis(reveal);
        self.loading_duration_ms = whole_millis(loading);
        self.transition_duration_ms = whole_millis(transition);
        self
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    pub fn loading_duration(&self) -> Duration {
        Duration::from_millis(self.loading_duration_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Check that durations are non-zero and metrics are usable.
    pub fn validate(&self) -> Result<()> {
        for (property, value) in [
            ("reveal_duration_ms", self.reveal_duration_ms),
            ("loading_duration_ms", self.loading_duration_ms),
            ("transition_duration_ms", self.transition_duration_ms),
        ] {
            if value == 0 {
                return Err(ButtonError::invalid_style(property, "duration must be non-zero"));
            }
        }

        for (property, value) in [
            ("resting_width", self.resting_width),
            ("resting_height", self.resting_height),
            ("collapsed_width", self.collapsed_width),
            ("corner_radius", self.corner_radius),
            ("expanded.width", self.expanded.width),
            ("expanded.height", self.expanded.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ButtonError::invalid_style(
                    property,
                    format!("expected a finite, non-negative value, got {value}"),
                ));
            }
        }

        if self.collapsed_width > self.resting_width {
            return Err(ButtonError::invalid_style(
                "collapsed_width",
                "must not exceed resting_width",
            ));
        }

        Ok(())
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
