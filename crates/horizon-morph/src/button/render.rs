//! Render selector.
//!
//! A pure mapping from `(state, clock progress)` to what the host should
//! draw. Each state has one interpolation row; states that do not animate a
//! value use a constant tween for it.

use crate::animation::{Interval, Tween};
use crate::geometry::{Color, EdgeInsets, GeometrySnapshot};
use crate::style::MorphStyle;

use super::config::MorphButtonConfig;
use super::state::ButtonState;

/// What is drawn inside the button surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonContent {
    /// A plain filled surface.
    Surface,
    /// A progress spinner.
    Spinner,
    /// The label, with the surface acting as the tap target.
    Label { text: String },
}

/// A renderable description of the button.
///
/// Hosts must compose the node as the top-most layer of its container so
/// the expansion can cover the whole screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub state: ButtonState,
    pub geometry: GeometrySnapshot,
    pub content: ButtonContent,
    pub color: Color,
}

impl RenderNode {
    /// Whether the node exposes a tap target.
    pub fn is_interactive(&self) -> bool {
        matches!(self.content, ButtonContent::Label { .. })
    }
}

/// One interpolation row: a tween per output and the curves driving them.
struct MorphRow {
    width: Tween<f32>,
    height: Tween<f32>,
    margin: Tween<EdgeInsets>,
    corner_radius: Tween<f32>,
    opacity: Tween<f32>,
    curve: Interval,
    corner_curve: Interval,
}

fn morph_row(state: ButtonState, style: &MorphStyle, outer_margin: EdgeInsets) -> MorphRow {
    let curve = Interval::full(style.easing);
    let resting = MorphRow {
        width: Tween::new(style.resting_width, style.resting_width),
        height: Tween::new(style.resting_height, style.resting_height),
        margin: Tween::new(outer_margin, outer_margin),
        corner_radius: Tween::new(style.corner_radius, style.corner_radius),
        opacity: Tween::new(1.0, 1.0),
        curve,
        corner_curve: curve,
    };

    match state {
        ButtonState::Initial => MorphRow {
            width: Tween::new(0.0, style.resting_width),
            opacity: Tween::new(0.0, 1.0),
            ..resting
        },
        ButtonState::Normal => resting,
        ButtonState::Loading => MorphRow {
            width: Tween::new(style.resting_width, style.collapsed_width),
            ..resting
        },
        ButtonState::Transitioning => MorphRow {
            width: Tween::new(style.collapsed_width, style.expanded.width),
            height: Tween::new(style.resting_height, style.expanded.height),
            margin: Tween::new(outer_margin, EdgeInsets::ZERO),
            corner_radius: Tween::new(style.corner_radius, 0.0),
            corner_curve: Interval::first_half(style.easing),
            ..resting
        },
    }
}

/// Geometry of the button in `state` at clock `progress`.
///
/// `progress` is the raw progress of the state's own clock; it is ignored
/// for [`ButtonState::Normal`].
pub fn geometry(
    state: ButtonState,
    progress: f32,
    style: &MorphStyle,
    outer_margin: EdgeInsets,
) -> GeometrySnapshot {
    let row = morph_row(state, style, outer_margin);
    GeometrySnapshot {
        width: row.width.evaluate(&row.curve, progress),
        height: row.height.evaluate(&row.curve, progress),
        margin: row.margin.evaluate(&row.curve, progress),
        corner_radius: row.corner_radius.evaluate(&row.corner_curve, progress),
        opacity: row.opacity.evaluate(&row.curve, progress),
    }
}

/// Select the render output for `state` at clock `progress`.
pub fn render_node(state: ButtonState, progress: f32, config: &MorphButtonConfig) -> RenderNode {
    let content = match state {
        ButtonState::Initial | ButtonState::Transitioning => ButtonContent::Surface,
        ButtonState::Loading => ButtonContent::Spinner,
        ButtonState::Normal => ButtonContent::Label {
            text: config.label.clone(),
        },
    };

    RenderNode {
        state,
        geometry: geometry(state, progress, &config.style, config.outer_margin),
        content,
        color: config.accent_color,
    }
}
