//! Discrete button states.

use std::fmt;

/// The state of a morphing button. Exactly one is active at a time.
///
/// The state doubles as the geometry tag consumed by
/// [`render_node`](super::render_node): each animating state selects one
/// interpolation row and one clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Entrance reveal in progress.
    #[default]
    Initial,
    /// At rest and accepting triggers.
    Normal,
    /// Squeezed, with the trigger action in flight.
    Loading,
    /// Expanding over the screen ahead of navigation.
    Transitioning,
}

impl ButtonState {
    /// Whether a trigger is accepted in this state.
    #[inline]
    pub fn is_interactive(self) -> bool {
        self == Self::Normal
    }

    /// Whether this state animates with a clock of its own.
    #[inline]
    pub fn is_animated(self) -> bool {
        self != Self::Normal
    }

    /// Lowercase name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Normal => "normal",
            Self::Loading => "loading",
            Self::Transitioning => "transitioning",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
