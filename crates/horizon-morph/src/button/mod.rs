//! The morphing button widget.
//!
//! - [`MorphButton`]: the state machine driving three animation clocks
//! - [`ButtonState`]: the four mutually exclusive states
//! - [`MorphButtonConfig`]: construction configuration
//! - [`render_node`] / [`geometry`]: the pure render selector

mod config;
mod machine;
mod render;
mod state;

pub use config::{MorphButtonConfig, TriggerAction};
pub use machine::{MorphButton, TriggerHandle, TriggerOutcome};
pub use render::{ButtonContent, RenderNode, geometry, render_node};
pub use state::ButtonState;
