//! Logging facilities for Horizon Morph.
//!
//! Horizon Morph uses the `tracing` crate for instrumentation. Nothing in the
//! library installs a subscriber; to see logs, install one in the host
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_morph=debug,horizon_morph_core::clock=trace")
//!     .init();
//! ```

/// Span names used throughout Horizon Morph for tracing.
pub mod span_names {
    /// A trigger sequence: squeeze, action, and the resulting branch.
    pub const TRIGGER: &str = "horizon_morph::trigger";
    /// The hand-off to the navigation collaborator.
    pub const NAVIGATION: &str = "horizon_morph::navigation";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_morph_core";
    /// Animation clock target.
    pub const CLOCK: &str = "horizon_morph_core::clock";
    /// Signal/slot target.
    pub const SIGNAL: &str = "horizon_morph_core::signal";
    /// Button state machine target.
    pub const BUTTON: &str = "horizon_morph::button";
    /// Navigation collaborator target.
    pub const NAVIGATION: &str = "horizon_morph::navigation";
}
