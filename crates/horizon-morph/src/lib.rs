//! Horizon Morph - an animated morphing button.
//!
//! The button reveals itself, squeezes into a spinner while a user-supplied
//! action runs, and then either expands over the whole screen and navigates
//! away, or springs back to rest when the action fails.
//!
//! This crate re-exports the core primitives from `horizon_morph_core`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use futures_util::FutureExt;
//! use horizon_morph::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let config = MorphButtonConfig::new(
//!         "Sign in",
//!         Color::from_rgb8(0x3D, 0x5A, 0xFE),
//!         "home",
//!         EdgeInsets::symmetric(24.0, 16.0),
//!     )
//!     .with_action(|| async { Ok::<(), std::io::Error>(()) });
//!
//!     let navigator = Arc::new(|route: &Route| {
//!         println!("navigating to {route}");
//!         async {}.boxed()
//!     });
//!     let button = MorphButton::new(config, navigator)?;
//!
//!     button.state_changed().connect(|state| println!("now {state}"));
//!     let frame = button.render();
//!     println!("{:?}", frame.geometry);
//!     Ok(())
//! }
//! ```

pub use horizon_morph_core::*;

pub mod animation;
pub mod button;
mod error;
pub mod geometry;
pub mod navigation;
pub mod prelude;
pub mod style;

pub use button::{
    ButtonContent, ButtonState, MorphButton, MorphButtonConfig, RenderNode, TriggerAction,
    TriggerHandle, TriggerOutcome,
};
pub use error::{BoxError, ButtonError, Result};
pub use geometry::{Color, EdgeInsets, GeometrySnapshot, Point, Rect, Size};
pub use navigation::{Navigator, Route};
pub use style::MorphStyle;
