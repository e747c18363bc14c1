//! Integration tests for the widget's countdown cycle.
//!
//! These drive a `PomodoroWidget` headlessly on virtual time:
//! - Session → Break → Session transitions with one alert each
//! - Pause preserving the remaining time
//! - Adjustment rules while stopped and while running
//! - Reset from arbitrary states
//! - The rendered view following the state

use tokio::sync::mpsc;
use tokio::time::Duration;

use pomodoro_widget::sound::MockAlertPlayer;
use pomodoro_widget::timer::{Action, PomodoroWidget, Tick, Ticker, TICK_PERIOD};
use pomodoro_widget::types::{LengthDelta, Phase, TimerState};
use pomodoro_widget::ui::View;

// ============================================================================
// Test Helpers
// ============================================================================

type Widget = PomodoroWidget<MockAlertPlayer>;

/// Creates a widget with a mock alert and its tick channel.
fn create_widget() -> (Widget, mpsc::UnboundedReceiver<Tick>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let widget = PomodoroWidget::new(MockAlertPlayer::new(), Ticker::new(TICK_PERIOD, tx));
    (widget, rx)
}

/// Sets a phase length by repeated single-minute adjustments.
fn set_length(widget: &mut Widget, phase: Phase, minutes: u32) {
    while widget.state().length_of(phase) > minutes {
        widget.dispatch(Action::Adjust(phase, LengthDelta::Decrement));
    }
    while widget.state().length_of(phase) < minutes {
        widget.dispatch(Action::Adjust(phase, LengthDelta::Increment));
    }
}

/// Delivers `count` ticks from the channel to the widget.
async fn run_ticks(widget: &mut Widget, rx: &mut mpsc::UnboundedReceiver<Tick>, count: u32) {
    for _ in 0..count {
        let tick = rx.recv().await.expect("ticker channel closed");
        widget.handle_tick(tick);
    }
}

// ============================================================================
// Full Cycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_full_session_break_cycle() {
    let (mut widget, mut rx) = create_widget();
    set_length(&mut widget, Phase::Session, 1);
    set_length(&mut widget, Phase::Break, 2);
    assert_eq!(widget.state().time_left, 60);

    widget.dispatch(Action::ToggleRunning);

    run_ticks(&mut widget, &mut rx, 60).await;
    assert_eq!(widget.state().phase, Phase::Break);
    assert_eq!(widget.state().time_left, 120);
    assert_eq!(widget.alert().play_count(), 1);

    run_ticks(&mut widget, &mut rx, 120).await;
    assert_eq!(widget.state().phase, Phase::Session);
    assert_eq!(widget.state().time_left, 60);
    assert_eq!(widget.alert().play_count(), 2);
    assert!(widget.state().is_running);
}

#[tokio::test(start_paused = true)]
async fn test_one_tick_per_second() {
    let (mut widget, mut rx) = create_widget();
    widget.dispatch(Action::ToggleRunning);

    let start = tokio::time::Instant::now();
    run_ticks(&mut widget, &mut rx, 10).await;

    assert!(start.elapsed() >= Duration::from_secs(10));
    assert!(start.elapsed() < Duration::from_secs(11));
    assert_eq!(widget.state().time_left, 1490);
}

#[tokio::test(start_paused = true)]
async fn test_view_follows_transition() {
    let (mut widget, mut rx) = create_widget();
    set_length(&mut widget, Phase::Session, 1);
    widget.dispatch(Action::ToggleRunning);

    run_ticks(&mut widget, &mut rx, 59).await;
    let view = View::from_state(widget.state());
    assert_eq!(view.timer_label, "Session");
    assert_eq!(view.time_left, "00:01");
    assert_eq!(view.start_stop_label, "Pause");

    run_ticks(&mut widget, &mut rx, 1).await;
    let view = View::from_state(widget.state());
    assert_eq!(view.timer_label, "Break");
    assert_eq!(view.time_left, "05:00");
}

// ============================================================================
// Pause
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_pause_preserves_time_left() {
    let (mut widget, mut rx) = create_widget();
    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 5).await;

    widget.dispatch(Action::ToggleRunning);
    tokio::time::sleep(Duration::from_secs(30)).await;
    while let Ok(tick) = rx.try_recv() {
        widget.handle_tick(tick);
    }

    assert_eq!(widget.state().time_left, 1495);
    assert!(!widget.state().is_running);
    assert_eq!(View::from_state(widget.state()).start_stop_label, "Start");
}

#[tokio::test(start_paused = true)]
async fn test_start_pause_without_ticks_is_identity() {
    let (mut widget, _rx) = create_widget();
    let before = widget.state().clone();

    widget.dispatch(Action::ToggleRunning);
    widget.dispatch(Action::ToggleRunning);

    assert_eq!(widget.state(), &before);
    assert!(!widget.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn test_resume_continues_countdown() {
    let (mut widget, mut rx) = create_widget();
    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 3).await;
    widget.dispatch(Action::ToggleRunning);

    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 2).await;

    assert_eq!(widget.state().time_left, 1495);
}

// ============================================================================
// Adjustment
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_adjust_between_pauses_resyncs_active_phase() {
    let (mut widget, mut rx) = create_widget();
    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 10).await;
    widget.dispatch(Action::ToggleRunning);

    widget.dispatch(Action::Adjust(Phase::Session, LengthDelta::Increment));

    assert_eq!(widget.state().session_length, 26);
    assert_eq!(widget.state().time_left, 1560);
}

#[tokio::test(start_paused = true)]
async fn test_adjust_break_during_break_phase() {
    let (mut widget, mut rx) = create_widget();
    set_length(&mut widget, Phase::Session, 1);
    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 60).await;
    widget.dispatch(Action::ToggleRunning);
    assert_eq!(widget.state().phase, Phase::Break);

    widget.dispatch(Action::Adjust(Phase::Break, LengthDelta::Increment));
    assert_eq!(widget.state().time_left, 360);

    widget.dispatch(Action::Adjust(Phase::Session, LengthDelta::Increment));
    assert_eq!(widget.state().time_left, 360);
}

#[tokio::test(start_paused = true)]
async fn test_adjust_rejected_while_running() {
    let (mut widget, mut rx) = create_widget();
    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 1).await;
    let before = widget.state().clone();

    for phase in [Phase::Session, Phase::Break] {
        for delta in [LengthDelta::Decrement, LengthDelta::Increment] {
            widget.dispatch(Action::Adjust(phase, delta));
        }
    }

    assert_eq!(widget.state(), &before);
}

#[test]
fn test_lengths_stay_in_bounds() {
    let (mut widget, _rx) = create_widget();

    for _ in 0..100 {
        widget.dispatch(Action::Adjust(Phase::Session, LengthDelta::Increment));
        widget.dispatch(Action::Adjust(Phase::Break, LengthDelta::Decrement));
    }

    assert_eq!(widget.state().session_length, 60);
    assert_eq!(widget.state().time_left, 3600);
    assert_eq!(widget.state().break_length, 1);
}

// ============================================================================
// Reset
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_reset_while_running_mid_break() {
    let (mut widget, mut rx) = create_widget();
    set_length(&mut widget, Phase::Session, 1);
    set_length(&mut widget, Phase::Break, 10);
    widget.dispatch(Action::ToggleRunning);
    run_ticks(&mut widget, &mut rx, 65).await;
    assert_eq!(widget.state().phase, Phase::Break);

    widget.dispatch(Action::Reset);

    assert_eq!(widget.state(), &TimerState::default());
    assert!(!widget.is_ticking());
    assert!(!widget.alert().is_playing());

    tokio::time::sleep(Duration::from_secs(5)).await;
    while let Ok(tick) = rx.try_recv() {
        widget.handle_tick(tick);
    }
    assert_eq!(widget.state(), &TimerState::default());
}

#[test]
fn test_reset_when_idle() {
    let (mut widget, _rx) = create_widget();
    set_length(&mut widget, Phase::Break, 15);

    widget.dispatch(Action::Reset);

    assert_eq!(widget.state(), &TimerState::default());
    assert_eq!(widget.alert().reset_count(), 1);
}
