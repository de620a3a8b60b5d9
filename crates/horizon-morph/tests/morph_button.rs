//! End-to-end tests for the morphing button sequences.
//!
//! All tests run on a paused Tokio clock, so timer deadlines are hit exactly
//! and the default style timings apply: reveal 800ms, squeeze 700ms,
//! expansion 600ms.

use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use horizon_morph::{
    ButtonError, ButtonState, Color, EdgeInsets, MorphButton, MorphButtonConfig, Navigator, Route,
    TriggerOutcome,
};
use parking_lot::Mutex;
use tokio::time::{Instant, sleep};

const REVEAL: Duration = Duration::from_millis(800);
const SQUEEZE: Duration = Duration::from_millis(700);
const EXPANSION: Duration = Duration::from_millis(600);

#[derive(Debug, thiserror::Error)]
#[error("offline")]
struct Offline;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

type Visits = Arc<Mutex<Vec<(Route, Instant)>>>;

fn recording_navigator() -> (Arc<dyn Navigator>, Visits) {
    let visits: Visits = Arc::default();
    let recorder = visits.clone();
    let navigator = Arc::new(move |route: &Route| {
        recorder.lock().push((route.clone(), Instant::now()));
        async {}.boxed()
    });
    (navigator, visits)
}

fn config() -> MorphButtonConfig {
    MorphButtonConfig::new(
        "Continue",
        Color::from_rgb8(0x3D, 0x5A, 0xFE),
        "home",
        EdgeInsets::symmetric(24.0, 16.0),
    )
}

fn record_states(button: &MorphButton) -> Arc<Mutex<Vec<ButtonState>>> {
    let states = Arc::new(Mutex::new(Vec::new()));
    let recorder = states.clone();
    button
        .state_changed()
        .connect(move |state| recorder.lock().push(*state));
    states
}

/// Build a button and let its reveal finish.
async fn revealed(config: MorphButtonConfig) -> (MorphButton, Visits) {
    init_tracing();
    let (navigator, visits) = recording_navigator();
    let button = MorphButton::new(config, navigator).unwrap();
    // Past the deadline, so the reveal task has run before we look.
    sleep(REVEAL + Duration::from_millis(10)).await;
    assert_eq!(button.state(), ButtonState::Normal);
    (button, visits)
}

#[tokio::test(start_paused = true)]
async fn test_reveal_enters_normal_once() {
    init_tracing();
    let (navigator, _) = recording_navigator();
    let button = MorphButton::new(config(), navigator).unwrap();
    let states = record_states(&button);

    sleep(REVEAL / 2).await;
    assert_eq!(button.state(), ButtonState::Initial);
    let halfway = button.render();
    assert!(halfway.geometry.width > 0.0);
    assert!(halfway.geometry.width < button.config().style.resting_width);

    sleep(REVEAL).await;
    assert_eq!(button.state(), ButtonState::Normal);
    assert_eq!(*states.lock(), vec![ButtonState::Normal]);
    assert!(button.render().is_interactive());
}

#[tokio::test(start_paused = true)]
async fn test_success_navigates_after_expansion() {
    let config = config().with_action(|| async {
        sleep(Duration::from_millis(100)).await;
        Ok::<(), Offline>(())
    });
    let (button, visits) = revealed(config).await;
    let states = record_states(&button);
    let navigated = Arc::new(Mutex::new(Vec::new()));
    let recorder = navigated.clone();
    button
        .navigated()
        .connect(move |route| recorder.lock().push(route.clone()));

    let started = Instant::now();
    let handle = button.trigger().unwrap();
    assert_eq!(button.state(), ButtonState::Loading);

    let outcome = handle.wait().await.unwrap();
    assert_eq!(outcome, TriggerOutcome::Navigated(Route::new("home")));
    assert_eq!(
        *states.lock(),
        vec![ButtonState::Loading, ButtonState::Transitioning]
    );

    let visits = visits.lock();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].0, Route::new("home"));
    assert!(visits[0].1 >= started + SQUEEZE + EXPANSION);
    assert_eq!(*navigated.lock(), vec![Route::new("home")]);

    let frame = button.render();
    assert_eq!(frame.geometry.margin, EdgeInsets::ZERO);
    assert_eq!(frame.geometry.corner_radius, 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_failure_reverses_squeeze_then_reports() {
    let config = config().with_action(|| async { Err::<(), _>(Offline) });
    let (button, visits) = revealed(config).await;
    let states = record_states(&button);
    let failures = Arc::new(Mutex::new(Vec::new()));
    let recorder = failures.clone();
    button
        .trigger_failed()
        .connect(move |message| recorder.lock().push(message.clone()));

    let started = Instant::now();
    let result = button.trigger().unwrap().wait().await;

    assert!(Instant::now() >= started + SQUEEZE * 2);
    match result {
        Err(ButtonError::Action(error)) => assert!(error.downcast_ref::<Offline>().is_some()),
        other => panic!("expected action error, got {other:?}"),
    }
    assert_eq!(button.state(), ButtonState::Normal);
    assert_eq!(*states.lock(), vec![ButtonState::Loading, ButtonState::Normal]);
    assert_eq!(*failures.lock(), vec!["offline".to_string()]);
    assert!(visits.lock().is_empty());

    let rest = button.render();
    assert_eq!(rest.geometry.width, button.config().style.resting_width);
}

#[tokio::test(start_paused = true)]
async fn test_button_is_reusable_after_failure() {
    let attempts = Arc::new(Mutex::new(0));
    let counter = attempts.clone();
    let config = config().with_action(move || {
        let attempt = {
            let mut attempts = counter.lock();
            *attempts += 1;
            *attempts
        };
        async move {
            if attempt == 1 {
                Err(Offline)
            } else {
                Ok(())
            }
        }
    });
    let (button, visits) = revealed(config).await;

    assert!(button.trigger().unwrap().wait().await.is_err());
    let outcome = button.trigger().unwrap().wait().await.unwrap();
    assert_eq!(outcome, TriggerOutcome::Navigated(Route::new("home")));
    assert_eq!(*attempts.lock(), 2);
    assert_eq!(visits.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_success_holds_squeezed_size() {
    let config = config().with_action(|| async {
        sleep(Duration::from_secs(2)).await;
        Ok::<(), Offline>(())
    });
    let (button, visits) = revealed(config).await;
    let collapsed_width = button.config().style.collapsed_width;

    let handle = button.trigger().unwrap();
    sleep(SQUEEZE + Duration::from_millis(300)).await;
    assert_eq!(button.state(), ButtonState::Loading);
    assert_eq!(button.clock_progress(), Some(1.0));
    assert_eq!(button.render().geometry.width, collapsed_width);
    assert!(visits.lock().is_empty());

    sleep(Duration::from_millis(1100)).await;
    assert_eq!(button.state(), ButtonState::Transitioning);

    let outcome = handle.wait().await.unwrap();
    assert_eq!(outcome, TriggerOutcome::Navigated(Route::new("home")));
    assert_eq!(visits.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_failure_holds_then_reverses() {
    let config = config().with_action(|| async {
        sleep(Duration::from_secs(2)).await;
        Err::<(), _>(Offline)
    });
    let (button, visits) = revealed(config).await;
    let states = record_states(&button);
    let collapsed_width = button.config().style.collapsed_width;

    let started = Instant::now();
    let handle = button.trigger().unwrap();
    sleep(SQUEEZE + Duration::from_millis(300)).await;
    assert_eq!(button.state(), ButtonState::Loading);
    assert_eq!(button.clock_progress(), Some(1.0));
    assert_eq!(button.render().geometry.width, collapsed_width);

    let result = handle.wait().await;
    assert!(Instant::now() >= started + Duration::from_secs(2) + SQUEEZE);
    match result {
        Err(ButtonError::Action(error)) => assert!(error.downcast_ref::<Offline>().is_some()),
        other => panic!("expected action error, got {other:?}"),
    }
    assert_eq!(*states.lock(), vec![ButtonState::Loading, ButtonState::Normal]);
    assert!(visits.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_trigger_from_host_thread() {
    let config = config().with_action(|| async { Ok::<(), Offline>(()) });
    let (button, visits) = revealed(config).await;
    let button = Arc::new(button);
    let states = record_states(&button);

    let remote = button.clone();
    let handle = std::thread::spawn(move || remote.trigger())
        .join()
        .unwrap()
        .expect("tap from a host thread is accepted");

    assert_eq!(button.state(), ButtonState::Loading);
    let outcome = handle.wait().await.unwrap();
    assert_eq!(outcome, TriggerOutcome::Navigated(Route::new("home")));
    assert_eq!(
        *states.lock(),
        vec![ButtonState::Loading, ButtonState::Transitioning]
    );
    assert_eq!(visits.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_instant_action_waits_for_squeeze() {
    let config = config().with_action(|| async { Ok::<(), Offline>(()) });
    let (button, _) = revealed(config).await;

    let handle = button.trigger().unwrap();
    sleep(SQUEEZE / 2).await;
    assert_eq!(button.state(), ButtonState::Loading);
    let progress = button.clock_progress().unwrap();
    assert!(progress > 0.0 && progress < 1.0);

    sleep(SQUEEZE).await;
    assert_eq!(button.state(), ButtonState::Transitioning);
    assert!(handle.wait().await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_retrigger_is_ignored_while_busy() {
    let config = config().with_action(|| async { Ok::<(), Offline>(()) });
    let (button, visits) = revealed(config).await;

    let handle = button.trigger().unwrap();
    assert!(button.trigger().is_none());

    sleep(SQUEEZE + EXPANSION / 4).await;
    assert_eq!(button.state(), ButtonState::Transitioning);
    assert!(button.trigger().is_none());

    handle.wait().await.unwrap();
    assert_eq!(visits.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_without_action_goes_straight_to_expansion() {
    let (button, visits) = revealed(config()).await;
    let states = record_states(&button);

    let started = Instant::now();
    let outcome = button.trigger().unwrap().wait().await.unwrap();

    assert_eq!(outcome, TriggerOutcome::Navigated(Route::new("home")));
    assert_eq!(
        *states.lock(),
        vec![ButtonState::Loading, ButtonState::Transitioning]
    );
    assert!(visits.lock()[0].1 >= started + SQUEEZE + EXPANSION);
}

#[tokio::test(start_paused = true)]
async fn test_dispose_mid_loading_is_quiet() {
    let config = config().with_action(|| async {
        sleep(Duration::from_secs(10)).await;
        Err::<(), _>(Offline)
    });
    let (button, visits) = revealed(config).await;
    let states = record_states(&button);
    let failures = Arc::new(Mutex::new(0));
    let recorder = failures.clone();
    button.trigger_failed().connect(move |_| *recorder.lock() += 1);

    let handle = button.trigger().unwrap();
    sleep(SQUEEZE / 2).await;
    button.dispose();

    assert_eq!(handle.wait().await.unwrap(), TriggerOutcome::Disposed);
    sleep(Duration::from_secs(20)).await;

    assert_eq!(button.state(), ButtonState::Loading);
    assert_eq!(*states.lock(), vec![ButtonState::Loading]);
    assert!(visits.lock().is_empty());
    assert_eq!(*failures.lock(), 0);
    assert!(button.trigger().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dispose_mid_expansion_skips_navigation() {
    let (button, visits) = revealed(config()).await;

    let handle = button.trigger().unwrap();
    sleep(SQUEEZE + EXPANSION / 2).await;
    assert_eq!(button.state(), ButtonState::Transitioning);
    drop(button);

    assert_eq!(handle.wait().await.unwrap(), TriggerOutcome::Disposed);
    sleep(EXPANSION).await;
    assert!(visits.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_expansion_corner_squares_by_midpoint() {
    let (button, _) = revealed(config()).await;
    let corner_radius = button.config().style.corner_radius;

    let handle = button.trigger().unwrap();
    sleep(SQUEEZE + Duration::from_millis(50)).await;
    let early = button.render();
    assert_eq!(early.state, ButtonState::Transitioning);
    assert!(early.geometry.corner_radius > 0.0);
    assert!(early.geometry.corner_radius < corner_radius);

    sleep(Duration::from_millis(300)).await;
    let late = button.render();
    assert_eq!(late.state, ButtonState::Transitioning);
    assert_eq!(late.geometry.corner_radius, 0.0);
    assert!(late.geometry.width < button.config().style.expanded.width);

    handle.wait().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_render_always_matches_state() {
    let config = config().with_action(|| async {
        sleep(Duration::from_millis(250)).await;
        Ok::<(), Offline>(())
    });
    init_tracing();
    let (navigator, _) = recording_navigator();
    let button = MorphButton::new(config, navigator).unwrap();

    let mut handle = None;
    for _ in 0..60 {
        if handle.is_none() && button.state() == ButtonState::Normal {
            handle = button.trigger();
        }
        let frame = button.render();
        assert_eq!(frame.state, button.state());
        assert_eq!(frame.is_interactive(), button.state() == ButtonState::Normal);
        sleep(Duration::from_millis(50)).await;
    }

    assert!(handle.is_some());
    assert_eq!(button.state(), ButtonState::Transitioning);
}
