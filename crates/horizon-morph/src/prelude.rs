//! Prelude module for Horizon Morph.
//!
//! ```ignore
//! use horizon_morph::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::button::{
    ButtonContent, ButtonState, MorphButton, MorphButtonConfig, RenderNode, TriggerHandle,
    TriggerOutcome,
};

// ============================================================================
// Configuration and geometry
// ============================================================================

pub use crate::animation::Easing;
pub use crate::geometry::{Color, EdgeInsets, GeometrySnapshot, Size};
pub use crate::style::MorphStyle;

// ============================================================================
// Collaborators and errors
// ============================================================================

pub use crate::error::{ButtonError, Result};
pub use crate::navigation::{Navigator, Route};

// ============================================================================
// Core
// ============================================================================

pub use horizon_morph_core::{AnimationClock, ClockDirection, Signal};
