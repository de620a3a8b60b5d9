//! Core systems for Horizon Morph.
//!
//! This crate provides the widget-independent building blocks of the
//! morphing button:
//!
//! - **Animation Clocks**: time-driven progress generators with forward and
//!   reverse playback, completion notification and idempotent disposal
//! - **Signal/Slot System**: type-safe observer notifications
//! - **Logging**: `tracing` targets and span names for every subsystem
//!
//! # Clock Example
//!
//! ```no_run
//! use std::time::Duration;
//! use horizon_morph_core::{AnimationClock, ClockDirection};
//!
//! # async fn run() -> horizon_morph_core::Result<()> {
//! let clock = AnimationClock::new("loading", Duration::from_millis(500));
//! clock.completed().connect(|direction| {
//!     println!("finished {:?}", direction);
//! });
//! clock.start(ClockDirection::Forward)?;
//! clock.await_completion().await?;
//! # Ok(())
//! # }
//! ```

pub mod clock;
mod error;
pub mod logging;
pub mod signal;

pub use clock::{AnimationClock, ClockDirection, ClockStatus};
pub use error::{ClockError, Result};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
