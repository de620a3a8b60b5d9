//! The morphing button state machine.
//!
//! [`MorphButton`] owns three [`AnimationClock`]s, one per animated state,
//! and sequences them against the user's trigger action:
//!
//! ```text
//! Initial --reveal done--> Normal --trigger--> Loading
//! Loading --squeeze done + action ok-->   Transitioning --expansion done--> navigate
//! Loading --squeeze done + action err--> (reverse squeeze) --> Normal, error re-raised
//! ```
//!
//! The squeeze always plays to completion before the action's outcome is
//! acted on, even when the action resolves first. Triggers outside `Normal`
//! are ignored.
//!
//! All work runs on the Tokio runtime the button was created in. Use a
//! current-thread runtime to keep every transition on one thread.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use futures_util::future::BoxFuture;
use horizon_morph_core::logging::{span_names, targets};
use horizon_morph_core::{AnimationClock, ClockDirection, ClockError, Signal};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::error::{BoxError, ButtonError, Result};
use crate::navigation::{Navigator, Route};

use super::config::MorphButtonConfig;
use super::render::{RenderNode, render_node};
use super::state::ButtonState;

/// How an accepted trigger ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The expansion completed and navigation to the route was issued.
    Navigated(Route),
    /// The button was disposed before the sequence finished.
    Disposed,
}

/// Observes the sequence started by an accepted trigger.
#[derive(Debug)]
pub struct TriggerHandle {
    receiver: oneshot::Receiver<Result<TriggerOutcome>>,
}

impl TriggerHandle {
    /// Wait for the sequence to finish.
    ///
    /// An action failure is returned as [`ButtonError::Action`] once the
    /// squeeze has reversed and the button is back in `Normal`. Disposal
    /// mid-flight yields `Ok(TriggerOutcome::Disposed)`, never an error.
    pub async fn wait(self) -> Result<TriggerOutcome> {
        self.receiver.await.unwrap_or(Ok(TriggerOutcome::Disposed))
    }
}

struct ButtonInner {
    config: MorphButtonConfig,
    navigator: Arc<dyn Navigator>,
    runtime: Handle,
    state: Mutex<ButtonState>,
    reveal: AnimationClock,
    loading: AnimationClock,
    transition: AnimationClock,
    disposed: AtomicBool,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    state_changed: Signal<ButtonState>,
    trigger_failed: Signal<String>,
    navigated: Signal<Route>,
}

impl ButtonInner {
    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Move to `next`, notifying observers. No-op once disposed.
    fn enter(&self, next: ButtonState) -> bool {
        if self.is_disposed() {
            return false;
        }

        let previous = std::mem::replace(&mut *self.state.lock(), next);
        if previous == next {
            return false;
        }

        tracing::debug!(target: targets::BUTTON, from = %previous, to = %next, "state changed");
        self.state_changed.emit(next);
        true
    }

    async fn run_trigger(
        self: Arc<Self>,
        squeeze: impl Future<Output = std::result::Result<ClockDirection, ClockError>>,
        action: Option<BoxFuture<'static, std::result::Result<(), BoxError>>>,
    ) -> Result<TriggerOutcome> {
        let outcome = match action {
            Some(action) => {
                let (squeezed, outcome) = tokio::join!(squeeze, action);
                if let Err(error) = squeezed {
                    return settle(error);
                }
                outcome
            }
            None => {
                if let Err(error) = squeeze.await {
                    return settle(error);
                }
                Ok(())
            }
        };

        match outcome {
            Ok(()) => self.run_transition().await,
            Err(error) => self.run_recovery(error).await,
        }
    }

    async fn run_transition(&self) -> Result<TriggerOutcome> {
        if !self.enter(ButtonState::Transitioning) {
            return Ok(TriggerOutcome::Disposed);
        }

        if let Err(error) = self.play(&self.transition, ClockDirection::Forward).await {
            return settle(error);
        }
        if self.is_disposed() {
            return Ok(TriggerOutcome::Disposed);
        }

        let destination = self.config.destination.clone();
        tracing::info!(target: targets::NAVIGATION, %destination, "replacing current screen");
        self.navigator
            .replace_current_screen(&destination)
            .instrument(tracing::debug_span!(target: targets::NAVIGATION, span_names::NAVIGATION, %destination))
            .await;

        self.navigated.emit(destination.clone());
        Ok(TriggerOutcome::Navigated(destination))
    }

    async fn run_recovery(&self, error: BoxError) -> Result<TriggerOutcome> {
        tracing::warn!(target: targets::BUTTON, %error, "trigger action failed, reversing squeeze");

        if let Err(clock_error) = self.play(&self.loading, ClockDirection::Reverse).await {
            return settle(clock_error);
        }
        if !self.enter(ButtonState::Normal) {
            return Ok(TriggerOutcome::Disposed);
        }

        self.trigger_failed.emit(error.to_string());
        Err(ButtonError::Action(error))
    }

    /// Run `clock` to the bound for `direction`.
    async fn play(
        &self,
        clock: &AnimationClock,
        direction: ClockDirection,
    ) -> std::result::Result<ClockDirection, ClockError> {
        clock.start(direction)?;
        clock.await_completion().await
    }
}

/// Map a clock failure to the trigger result: disposal ends quietly.
fn settle(error: ClockError) -> Result<TriggerOutcome> {
    if error.is_disposal() {
        Ok(TriggerOutcome::Disposed)
    } else {
        Err(error.into())
    }
}

/// An animated button that squeezes while its action runs, then either
/// expands over the screen and navigates, or springs back on failure.
///
/// Only one instance should share a layout slot; the host layout is
/// responsible for that. Dropping the button disposes it.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use futures_util::FutureExt;
/// use horizon_morph::{Color, EdgeInsets, MorphButton, MorphButtonConfig, Route};
///
/// # async fn run() -> horizon_morph::Result<()> {
/// let config = MorphButtonConfig::new("Sign in", Color::WHITE, "home", EdgeInsets::all(16.0))
///     .with_action(|| async { Ok::<(), std::io::Error>(()) });
/// let navigator = Arc::new(|route: &Route| {
///     println!("go to {route}");
///     async {}.boxed()
/// });
///
/// let button = MorphButton::new(config, navigator)?;
/// // ... once the host sees `Normal` and the user taps:
/// if let Some(handle) = button.trigger() {
///     handle.wait().await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct MorphButton {
    inner: Arc<ButtonInner>,
}

impl MorphButton {
    /// Create the button in `Initial` and start its entrance reveal.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: MorphButtonConfig, navigator: Arc<dyn Navigator>) -> Result<Self> {
        config.style.validate()?;
        let runtime = Handle::try_current().map_err(|_| ClockError::NoRuntime)?;

        let reveal = AnimationClock::new("reveal", config.style.reveal_duration());
        let loading = AnimationClock::new("loading", config.style.loading_duration());
        let transition = AnimationClock::new("transition", config.style.transition_duration());
        let inner = Arc::new(ButtonInner {
            config,
            navigator,
            runtime,
            state: Mutex::new(ButtonState::Initial),
            reveal,
            loading,
            transition,
            disposed: AtomicBool::new(false),
            tasks: Mutex::new(Vec::new()),
            state_changed: Signal::new(),
            trigger_failed: Signal::new(),
            navigated: Signal::new(),
        });

        let weak: Weak<ButtonInner> = Arc::downgrade(&inner);
        inner.reveal.completed().connect(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.enter(ButtonState::Normal);
            }
        });
        inner.reveal.start(ClockDirection::Forward)?;

        tracing::debug!(target: targets::BUTTON, label = %inner.config.label, "morph button created");
        Ok(Self { inner })
    }

    /// The configuration the button was built from.
    pub fn config(&self) -> &MorphButtonConfig {
        &self.inner.config
    }

    /// The current state.
    pub fn state(&self) -> ButtonState {
        *self.inner.state.lock()
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }

    /// Progress of the clock owned by the current state, or `None` in
    /// `Normal`, which owns no clock.
    pub fn clock_progress(&self) -> Option<f32> {
        self.progress_in(self.state())
    }

    /// Sample the current state and clock and select what to draw.
    pub fn render(&self) -> RenderNode {
        let state = self.state();
        let progress = self.progress_in(state).unwrap_or(1.0);
        render_node(state, progress, &self.inner.config)
    }

    /// Progress of the clock owned by `state`.
    fn progress_in(&self, state: ButtonState) -> Option<f32> {
        let _runtime = self.inner.runtime.enter();
        match state {
            ButtonState::Initial => Some(self.inner.reveal.progress()),
            ButtonState::Normal => None,
            ButtonState::Loading => Some(self.inner.loading.progress()),
            ButtonState::Transitioning => Some(self.inner.transition.progress()),
        }
    }

    /// Emitted on every state change with the new state.
    pub fn state_changed(&self) -> &Signal<ButtonState> {
        &self.inner.state_changed
    }

    /// Emitted with the failure text after a failed trigger has returned the
    /// button to `Normal`.
    pub fn trigger_failed(&self) -> &Signal<String> {
        &self.inner.trigger_failed
    }

    /// Emitted once navigation to the destination has been issued.
    pub fn navigated(&self) -> &Signal<Route> {
        &self.inner.navigated
    }

    /// Handle a user tap.
    ///
    /// In `Normal`, moves to `Loading`, starts the squeeze and the trigger
    /// action, and returns a handle to the resulting sequence. In any other
    /// state, or once disposed, does nothing and returns `None`.
    ///
    /// May be called from any thread; the sequence runs on the runtime the
    /// button was created in.
    #[tracing::instrument(skip(self), target = "horizon_morph::button", level = "debug")]
    pub fn trigger(&self) -> Option<TriggerHandle> {
        let inner = &self.inner;
        let _runtime = inner.runtime.enter();
        {
            let mut state = inner.state.lock();
            if inner.is_disposed() || !state.is_interactive() {
                tracing::debug!(target: targets::BUTTON, state = %*state, "trigger ignored");
                return None;
            }
            *state = ButtonState::Loading;
        }
        tracing::debug!(target: targets::BUTTON, from = %ButtonState::Normal, to = %ButtonState::Loading, "state changed");
        inner.state_changed.emit(ButtonState::Loading);

        if let Err(error) = inner.loading.start(ClockDirection::Forward) {
            tracing::warn!(target: targets::BUTTON, %error, "could not start squeeze");
            inner.enter(ButtonState::Normal);
            return None;
        }
        let squeeze = inner.loading.await_completion();
        let action = inner.config.on_trigger.as_ref().map(|action| action());

        let (sender, receiver) = oneshot::channel();
        let sequence = Arc::clone(inner)
            .run_trigger(squeeze, action)
            .instrument(tracing::debug_span!(target: targets::BUTTON, span_names::TRIGGER, label = %inner.config.label));
        let task = inner.runtime.spawn(async move {
            let _ = sender.send(sequence.await);
        });

        let mut tasks = inner.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(task);

        Some(TriggerHandle { receiver })
    }

    /// Tear the button down.
    ///
    /// Cancels every clock and any in-flight trigger sequence: no further
    /// state changes, navigation or failure reports happen afterwards.
    /// Idempotent.
    pub fn dispose(&self) {
        let inner = &self.inner;
        if inner.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let _runtime = inner.runtime.enter();

        for task in inner.tasks.lock().drain(..) {
            task.abort();
        }
        inner.reveal.dispose();
        inner.loading.dispose();
        inner.transition.dispose();

        tracing::debug!(target: targets::BUTTON, state = %self.state(), "morph button disposed");
    }
}

impl Drop for MorphButton {
    fn drop(&mut self) {
        self.dispose();
    }
}

static_assertions::assert_impl_all!(MorphButton: Send, Sync);

impl std::fmt::Debug for MorphButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphButton")
            .field("label", &self.inner.config.label)
            .field("state", &self.state())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
