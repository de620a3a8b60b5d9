//! Construction configuration for a morphing button.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::error::BoxError;
use crate::geometry::{Color, EdgeInsets};
use crate::navigation::Route;
use crate::style::MorphStyle;

/// The asynchronous work a trigger starts.
///
/// Called once per accepted trigger; the returned future is awaited with no
/// timeout.
pub type TriggerAction = Arc<dyn Fn() -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// Everything a [`MorphButton`](super::MorphButton) is built from.
///
/// # Example
///
/// ```
/// use horizon_morph::{Color, EdgeInsets, MorphButtonConfig};
///
/// let config = MorphButtonConfig::new(
///     "Sign in",
///     Color::from_rgb8(0x3D, 0x5A, 0xFE),
///     "home",
///     EdgeInsets::symmetric(24.0, 16.0),
/// )
/// .with_action(|| async { Ok::<(), std::io::Error>(()) });
/// assert!(config.on_trigger.is_some());
/// ```
#[derive(Clone)]
pub struct MorphButtonConfig {
    /// Text shown while at rest.
    pub label: String,
    /// Fill color of the button surface.
    pub accent_color: Color,
    /// Where to navigate after the expansion.
    pub destination: Route,
    /// Margin around the button at rest; the expansion shrinks it to zero.
    pub outer_margin: EdgeInsets,
    /// Work to run on trigger. Without one, a trigger goes straight to the
    /// expansion once the squeeze has played.
    pub on_trigger: Option<TriggerAction>,
    /// Timings and metrics.
    pub style: MorphStyle,
}

impl MorphButtonConfig {
    /// Create a configuration with no trigger action and the default style.
    pub fn new(
        label: impl Into<String>,
        accent_color: Color,
        destination: impl Into<Route>,
        outer_margin: EdgeInsets,
    ) -> Self {
        Self {
            label: label.into(),
            accent_color,
            destination: destination.into(),
            outer_margin,
            on_trigger: None,
            style: MorphStyle::default(),
        }
    }

    /// Set the trigger action.
    ///
    /// The action's error type is boxed unchanged, so observers can downcast
    /// it back to `E`.
    pub fn with_action<F, Fut, E>(mut self, action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        self.on_trigger = Some(Arc::new(move || {
            action()
                .map(|result| result.map_err(Into::<BoxError>::into))
                .boxed()
        }));
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: MorphStyle) -> Self {
        self.style = style;
        self
    }
}

impl fmt::Debug for MorphButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphButtonConfig")
            .field("label", &self.label)
            .field("accent_color", &self.accent_color)
            .field("destination", &self.destination)
            .field("outer_margin", &self.outer_margin)
            .field("on_trigger", &self.on_trigger.is_some())
            .field("style", &self.style)
            .finish()
    }
}
