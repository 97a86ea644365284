//! Integration tests for screen navigation driven by a manual clock

use stopwatch::app::{Input, Navigator, ScreenKind, Transition};
use stopwatch::clock::ManualClock;
use stopwatch::format::{format_millis, TimeFormat};
use stopwatch::timer::ModeKind;

#[test]
fn test_stopwatch_session() {
    let clock = ManualClock::new(0);
    let mut navigator = Navigator::new(clock.clone(), 5000);

    navigator.handle(Input::SelectStopwatch);
    assert_eq!(
        navigator.active_kind(),
        Some(ScreenKind::Mode(ModeKind::Stopwatch))
    );

    // Start at tick 1000, query at 2500
    clock.set(1000);
    navigator.handle(Input::Toggle);
    clock.set(2500);
    assert_eq!(navigator.active_mode().unwrap().display_ms(), 1500);

    // Pause at 2500, frozen until 9000
    navigator.handle(Input::Toggle);
    clock.set(9000);
    assert_eq!(navigator.active_mode().unwrap().display_ms(), 1500);

    // Resume at 9000, query at 9500
    navigator.handle(Input::Toggle);
    clock.set(9500);
    let mode = navigator.active_mode().unwrap();
    assert_eq!(mode.display_ms(), 2000);
    assert_eq!(format_millis(mode.display_ms(), TimeFormat::Full), "00:00:02,00");

    navigator.handle(Input::Reset);
    assert_eq!(navigator.active_mode().unwrap().display_ms(), 0);
}

#[test]
fn test_countdown_expiry_session() {
    let clock = ManualClock::new(0);
    let mut navigator = Navigator::new(clock.clone(), 5000);

    let applied = navigator.dispatch([Input::SelectCountdown, Input::Toggle]);
    assert_eq!(
        applied,
        vec![Transition::Entered(ModeKind::Countdown), Transition::Stay]
    );

    let mut last = navigator.active_mode().unwrap().display_ms();
    let mut expiries = 0;
    for _ in 0..200 {
        clock.advance(33);
        if let Some(mode) = navigator.active_mode() {
            let remaining = mode.display_ms();
            assert!(remaining < last || remaining == 0);
            last = remaining;
        }
        if navigator.tick() == Transition::Expired {
            expiries += 1;
        }
    }

    assert_eq!(expiries, 1);
    assert_eq!(navigator.active_kind(), Some(ScreenKind::Menu));
}

#[test]
fn test_countdown_expires_exactly_at_duration() {
    let clock = ManualClock::new(0);
    let mut navigator = Navigator::new(clock.clone(), 5000);
    navigator.dispatch([Input::SelectCountdown, Input::Toggle]);

    clock.set(5000);
    assert_eq!(navigator.tick(), Transition::Expired);
    assert_eq!(navigator.active_kind(), Some(ScreenKind::Menu));
}

#[test]
fn test_cancel_then_quit_from_menu() {
    let clock = ManualClock::new(0);
    let mut navigator = Navigator::new(clock, 1000);

    let applied = navigator.dispatch([
        Input::SelectCountdown,
        Input::Back,
        Input::Back,
        Input::SelectStopwatch,
    ]);
    assert_eq!(
        applied,
        vec![
            Transition::Entered(ModeKind::Countdown),
            Transition::Back,
            Transition::Quit,
        ]
    );
    assert!(navigator.is_terminated());
    assert_eq!(navigator.active_kind(), None);
}
