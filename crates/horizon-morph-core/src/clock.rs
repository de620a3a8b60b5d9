//! Animation clocks.
//!
//! An [`AnimationClock`] produces a normalized progress value in `[0, 1]`
//! from elapsed wall-clock time. Progress is not ticked: it is sampled on
//! demand from the run's start instant, so a renderer can query it at any
//! frame rate. Completion is the only thing scheduled; each run spawns one
//! Tokio task that sleeps until the target bound is reached and then
//! notifies observers exactly once.
//!
//! Clocks use [`tokio::time::Instant`], so tests running on a paused runtime
//! drive them deterministically.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use horizon_morph_core::{AnimationClock, ClockDirection};
//!
//! # async fn run() -> horizon_morph_core::Result<()> {
//! let clock = AnimationClock::new("reveal", Duration::from_millis(300));
//! clock.start(ClockDirection::Forward)?;
//! clock.await_completion().await?;
//! assert_eq!(clock.progress(), 1.0);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::{ClockError, Result};
use crate::logging::targets;
use crate::signal::Signal;

/// The direction a clock run travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockDirection {
    /// Towards progress `1.0`.
    #[default]
    Forward,
    /// Towards progress `0.0`.
    Reverse,
}

impl ClockDirection {
    /// The progress bound a run in this direction ends at.
    #[inline]
    pub fn target(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => 0.0,
        }
    }
}

/// Coarse status of a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStatus {
    /// Idle at progress `0.0`.
    #[default]
    Dismissed,
    /// Running towards `1.0`.
    Forward,
    /// Running towards `0.0`.
    Reverse,
    /// Idle at progress `1.0`.
    Completed,
    /// Stopped somewhere between the bounds.
    Idle,
}

impl ClockStatus {
    /// Check if a run is in progress.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Forward | Self::Reverse)
    }
}

/// Last run event, broadcast to completion waiters.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RunEvent {
    Idle,
    Completed {
        generation: u64,
        direction: ClockDirection,
    },
    Disposed,
}

/// An in-flight run.
struct Run {
    started_at: Instant,
    origin: f32,
    task: JoinHandle<()>,
}

struct ClockState {
    duration: Duration,
    /// Progress while idle; unused while a run is active.
    value: f32,
    direction: ClockDirection,
    run: Option<Run>,
    complete: bool,
    /// Bumped on every start, stop and dispose so stale runs never notify.
    generation: u64,
    disposed: bool,
}

impl ClockState {
    fn progress_at(&self, now: Instant) -> f32 {
        let Some(run) = &self.run else {
            return self.value;
        };

        let delta = if self.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(run.started_at).as_secs_f32()
                / self.duration.as_secs_f32()
        };

        match self.direction {
            ClockDirection::Forward => (run.origin + delta).min(1.0),
            ClockDirection::Reverse => (run.origin - delta).max(0.0),
        }
    }

    /// Cancel any active run, freezing progress where it is.
    fn halt(&mut self, now: Instant) {
        self.value = self.progress_at(now);
        if let Some(run) = self.run.take() {
            run.task.abort();
        }
        self.generation += 1;
    }
}

struct ClockShared {
    name: String,
    state: Mutex<ClockState>,
    events: watch::Sender<RunEvent>,
    completed: Signal<ClockDirection>,
}

impl ClockShared {
    fn finish(&self, generation: u64) {
        let direction = {
            let mut state = self.state.lock();
            if state.disposed || state.complete || state.generation != generation {
                return;
            }
            // The run's own task is the caller; dropping the handle detaches it.
            state.run = None;
            state.value = state.direction.target();
            state.complete = true;
            state.direction
        };

        tracing::trace!(target: targets::CLOCK, clock = %self.name, ?direction, generation, "clock run completed");
        self.events.send_replace(RunEvent::Completed {
            generation,
            direction,
        });
        self.completed.emit(direction);
    }
}

/// A time-driven progress generator.
///
/// See the [module documentation](self) for the timing model. Dropping the
/// clock disposes it.
pub struct AnimationClock {
    shared: Arc<ClockShared>,
}

impl AnimationClock {
    /// Create an idle clock at progress `0.0`.
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        let (events, _) = watch::channel(RunEvent::Idle);
        Self {
            shared: Arc::new(ClockShared {
                name: name.into(),
                state: Mutex::new(ClockState {
                    duration,
                    value: 0.0,
                    direction: ClockDirection::Forward,
                    run: None,
                    complete: false,
                    generation: 0,
                    disposed: false,
                }),
                events,
                completed: Signal::new(),
            }),
        }
    }

    /// The name used to identify this clock in logs.
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Time a full `0.0 → 1.0` run takes.
    pub fn duration(&self) -> Duration {
        self.shared.state.lock().duration
    }

    /// Set the full-run duration. Takes effect on the next `start`.
    pub fn set_duration(&self, duration: Duration) {
        self.shared.state.lock().duration = duration;
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.value_at(Instant::now())
    }

    /// Progress as it would be sampled at `instant`.
    pub fn value_at(&self, instant: Instant) -> f32 {
        self.shared.state.lock().progress_at(instant)
    }

    /// Direction of the current or most recent run.
    pub fn direction(&self) -> ClockDirection {
        self.shared.state.lock().direction
    }

    /// Whether the most recent run reached its target bound.
    pub fn is_complete(&self) -> bool {
        self.shared.state.lock().complete
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.shared.state.lock().run.is_some()
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.shared.state.lock().disposed
    }

    /// Coarse status of the clock.
    pub fn status(&self) -> ClockStatus {
        let state = self.shared.state.lock();
        if state.run.is_some() {
            return match state.direction {
                ClockDirection::Forward => ClockStatus::Forward,
                ClockDirection::Reverse => ClockStatus::Reverse,
            };
        }
        if state.value >= 1.0 {
            ClockStatus::Completed
        } else if state.value <= 0.0 {
            ClockStatus::Dismissed
        } else {
            ClockStatus::Idle
        }
    }

    /// Signal emitted once per run when the run reaches its target bound.
    pub fn completed(&self) -> &Signal<ClockDirection> {
        &self.shared.completed
    }

    /// Begin advancing progress from its current value towards the bound for
    /// `direction`.
    ///
    /// The run takes the fraction of [`duration`](Self::duration) that
    /// remains to the bound. Starting while another run is active supersedes
    /// it; the superseded run never completes. Starting at the bound already
    /// completes immediately.
    pub fn start(&self, direction: ClockDirection) -> Result<()> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| ClockError::NoRuntime)?;
        let now = Instant::now();

        let mut state = self.shared.state.lock();
        if state.disposed {
            return Err(ClockError::Disposed);
        }

        state.halt(now);
        state.direction = direction;
        state.complete = false;
        let generation = state.generation;
        let origin = state.value;
        let target = direction.target();

        tracing::debug!(
            target: targets::CLOCK,
            clock = %self.shared.name,
            ?direction,
            origin,
            generation,
            "clock run started"
        );

        if origin == target || state.duration.is_zero() {
            drop(state);
            self.shared.finish(generation);
            return Ok(());
        }

        let remaining = state.duration.mul_f32((target - origin).abs());
        let shared: Weak<ClockShared> = Arc::downgrade(&self.shared);
        let task = handle.spawn(async move {
            tokio::time::sleep_until(now + remaining).await;
            if let Some(shared) = shared.upgrade() {
                shared.finish(generation);
            }
        });
        state.run = Some(Run {
            started_at: now,
            origin,
            task,
        });

        Ok(())
    }

    /// Freeze progress at its current value without completing.
    pub fn stop(&self) {
        let mut state = self.shared.state.lock();
        if state.run.is_some() {
            state.halt(Instant::now());
        }
    }

    /// Stop and rewind to progress `0.0`.
    pub fn reset(&self) {
        self.set_progress(0.0);
    }

    /// Stop and jump to `progress` (clamped to `[0, 1]`).
    pub fn set_progress(&self, progress: f32) {
        let mut state = self.shared.state.lock();
        state.halt(Instant::now());
        state.value = progress.clamp(0.0, 1.0);
        state.complete = false;
    }

    /// A future that resolves when the current run reaches its bound.
    ///
    /// If the current run has already completed, resolves immediately. If
    /// the clock is idle or the current run is superseded, waits for the next
    /// run to complete. Resolves with [`ClockError::Cancelled`] if the clock
    /// is disposed first.
    pub fn await_completion(
        &self,
    ) -> impl Future<Output = Result<ClockDirection>> + Send + 'static {
        let mut events = self.shared.events.subscribe();
        let generation = self.shared.state.lock().generation;

        async move {
            loop {
                let event = *events.borrow_and_update();
                match event {
                    RunEvent::Disposed => return Err(ClockError::Cancelled),
                    RunEvent::Completed {
                        generation: completed,
                        direction,
                    } if completed >= generation => return Ok(direction),
                    _ => {}
                }
                if events.changed().await.is_err() {
                    return Err(ClockError::Cancelled);
                }
            }
        }
    }

    /// Cancel any pending run and release its timer task.
    ///
    /// Idempotent. Pending completion waiters resolve with
    /// [`ClockError::Cancelled`]; the `completed` signal is disconnected and
    /// never fires again.
    pub fn dispose(&self) {
        {
            let mut state = self.shared.state.lock();
            if state.disposed {
                return;
            }
            state.halt(Instant::now());
            state.disposed = true;
        }

        tracing::trace!(target: targets::CLOCK, clock = %self.shared.name, "clock disposed");
        self.shared.events.send_replace(RunEvent::Disposed);
        self.shared.completed.disconnect_all();
    }
}

impl Drop for AnimationClock {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for AnimationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("AnimationClock")
            .field("name", &self.shared.name)
            .field("duration", &state.duration)
            .field("direction", &state.direction)
            .field("running", &state.run.is_some())
            .field("complete", &state.complete)
            .field("disposed", &state.disposed)
            .finish()
    }
}
