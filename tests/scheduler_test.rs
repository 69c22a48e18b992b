//! State machine and ticker together, with a simulated clock.

use std::time::{Duration, Instant};

use tui_life::core::AppState;
use tui_life::engine::Ticker;
use tui_life::types::{Action, Event};

const STEP: Duration = Duration::from_millis(10);

/// Advance simulated time in `STEP` increments, delivering due ticks.
fn run_for(state: &mut AppState, ticker: &mut Ticker, now: &mut Instant, total: Duration) {
    let end = *now + total;
    while *now < end {
        *now += STEP;
        if ticker.take_due(*now) {
            let effect = state.update(Event::Tick {
                at_ms: ticker.elapsed_ms(*now),
            });
            ticker.apply(effect, *now);
        }
    }
}

fn setup() -> (AppState, Ticker, Instant) {
    let now = Instant::now();
    let mut state = AppState::new();
    state.update(Event::Resize {
        height: 10,
        width: 20,
    });
    (state, Ticker::new(now), now)
}

#[test]
fn test_paused_session_never_arms_the_timer() {
    let (mut state, mut ticker, mut now) = setup();
    run_for(&mut state, &mut ticker, &mut now, Duration::from_secs(1));
    assert!(!ticker.is_armed());
    assert_eq!(state.generation(), 0);
}

#[test]
fn test_one_generation_per_interval() {
    let (mut state, mut ticker, mut now) = setup();
    let effect = state.update(Event::Key(Action::TogglePause));
    ticker.apply(effect, now);

    run_for(&mut state, &mut ticker, &mut now, Duration::from_millis(1000));
    assert_eq!(state.generation(), 10);
    assert!(ticker.is_armed());
}

#[test]
fn test_pause_resume_does_not_double_the_rate() {
    let (mut state, mut ticker, mut now) = setup();
    let effect = state.update(Event::Key(Action::TogglePause));
    ticker.apply(effect, now);
    run_for(&mut state, &mut ticker, &mut now, Duration::from_millis(150));
    assert_eq!(state.generation(), 1);

    // Pause and resume before the pending tick arrives.
    let effect = state.update(Event::Key(Action::TogglePause));
    ticker.apply(effect, now);
    let effect = state.update(Event::Key(Action::TogglePause));
    ticker.apply(effect, now);

    run_for(&mut state, &mut ticker, &mut now, Duration::from_millis(500));
    assert_eq!(state.generation(), 6);
}

#[test]
fn test_pausing_lets_the_pending_tick_lapse() {
    let (mut state, mut ticker, mut now) = setup();
    let effect = state.update(Event::Key(Action::TogglePause));
    ticker.apply(effect, now);
    run_for(&mut state, &mut ticker, &mut now, Duration::from_millis(100));
    assert_eq!(state.generation(), 1);

    let effect = state.update(Event::Key(Action::TogglePause));
    ticker.apply(effect, now);
    assert!(ticker.is_armed());

    run_for(&mut state, &mut ticker, &mut now, Duration::from_millis(500));
    assert_eq!(state.generation(), 1);
    assert!(!ticker.is_armed());
}
