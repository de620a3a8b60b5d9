//! Error types for the morphing button.

use horizon_morph_core::ClockError;

/// The payload a trigger action fails with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for button operations.
pub type Result<T> = std::result::Result<T, ButtonError>;

/// Errors that can occur in the morphing button.
#[derive(Debug, thiserror::Error)]
pub enum ButtonError {
    /// The user-supplied trigger action failed.
    ///
    /// Carries the action's own error unchanged; use
    /// [`action_error`](Self::action_error) to downcast it.
    #[error("trigger action failed: {0}")]
    Action(#[source] BoxError),

    /// An animation clock could not be driven.
    #[error("animation clock error: {0}")]
    Clock(#[from] ClockError),

    /// A style value is out of range.
    #[error("invalid style property '{property}': {message}")]
    InvalidStyle {
        property: &'static str,
        message: String,
    },

    /// Style TOML could not be parsed.
    #[error("failed to parse style: {0}")]
    StyleParse(#[from] toml::de::Error),

    /// Style could not be written as TOML.
    #[error("failed to serialize style: {0}")]
    StyleSerialize(#[from] toml::ser::Error),
}

impl ButtonError {
    /// Create an invalid style error.
    pub fn invalid_style(property: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidStyle {
            property,
            message: message.into(),
        }
    }

    /// The trigger action's failure payload, if this is an action failure.
    pub fn action_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Action(error) => Some(error.as_ref()),
            _ => None,
        }
    }

    /// Take the trigger action's failure payload, if this is an action failure.
    pub fn into_action_error(self) -> Option<BoxError> {
        match self {
            Self::Action(error) => Some(error),
            _ => None,
        }
    }
}
