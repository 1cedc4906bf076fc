#![allow(missing_docs)]
//! Host-level tests for time-based button debouncing.

use digit_matrix::config::{BLINK_OFF, BLINK_ON, DEBOUNCE_INTERVAL, POLL_INTERVAL};
use digit_matrix::counter::{ButtonId, DigitCounter};
use digit_matrix::glyph::Digit;
use embassy_time::{Duration, Instant};

const T0: Instant = Instant::from_millis(10_000);

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn value(digit: Option<Digit>) -> Option<u8> {
    digit.map(Digit::value)
}

#[test]
fn starts_at_zero() {
    assert_eq!(DigitCounter::new().current(), Digit::ZERO);
}

#[test]
fn first_press_is_accepted() {
    let mut counter = DigitCounter::new();
    assert_eq!(
        value(counter.on_button_active(ButtonId::Increment, Instant::from_millis(0))),
        Some(1)
    );
}

#[test]
fn press_within_interval_is_suppressed() {
    let mut counter = DigitCounter::new();
    assert_eq!(value(counter.on_button_active(ButtonId::Increment, T0)), Some(1));
    assert_eq!(counter.on_button_active(ButtonId::Increment, T0 + ms(50)), None);
    assert_eq!(counter.current().value(), 1);
}

#[test]
fn press_after_interval_is_accepted() {
    let mut counter = DigitCounter::new();
    assert_eq!(value(counter.on_button_active(ButtonId::Increment, T0)), Some(1));
    assert_eq!(
        value(counter.on_button_active(ButtonId::Increment, T0 + ms(150))),
        Some(2)
    );
}

#[test]
fn exactly_the_interval_is_still_suppressed() {
    let mut counter = DigitCounter::new();
    counter.on_button_active(ButtonId::Increment, T0);
    assert_eq!(
        counter.on_button_active(ButtonId::Increment, T0 + DEBOUNCE_INTERVAL),
        None
    );
    assert_eq!(
        value(counter.on_button_active(
            ButtonId::Increment,
            T0 + DEBOUNCE_INTERVAL + Duration::from_micros(1)
        )),
        Some(2)
    );
}

#[test]
fn suppressed_press_does_not_restart_the_window() {
    let mut counter = DigitCounter::new();
    counter.on_button_active(ButtonId::Increment, T0);
    assert_eq!(counter.on_button_active(ButtonId::Increment, T0 + ms(60)), None);
    // 120 ms after the accepted press, 60 ms after the suppressed one.
    assert_eq!(
        value(counter.on_button_active(ButtonId::Increment, T0 + ms(120))),
        Some(2)
    );
}

#[test]
fn decrement_from_zero_wraps_to_nine() {
    let mut counter = DigitCounter::new();
    assert_eq!(value(counter.on_button_active(ButtonId::Decrement, T0)), Some(9));
}

#[test]
fn increment_from_nine_wraps_to_zero() {
    let mut counter = DigitCounter::new();
    counter.on_button_active(ButtonId::Decrement, T0);
    assert_eq!(counter.current().value(), 9);
    assert_eq!(value(counter.on_button_active(ButtonId::Increment, T0)), Some(0));
}

#[test]
fn buttons_are_debounced_independently() {
    let mut counter = DigitCounter::new();
    assert_eq!(value(counter.on_button_active(ButtonId::Increment, T0)), Some(1));
    assert_eq!(
        value(counter.on_button_active(ButtonId::Decrement, T0 + ms(10))),
        Some(0)
    );
    assert_eq!(counter.on_button_active(ButtonId::Increment, T0 + ms(20)), None);
    assert_eq!(counter.on_button_active(ButtonId::Decrement, T0 + ms(30)), None);
}

#[test]
fn clock_going_backwards_is_suppressed() {
    let mut counter = DigitCounter::new();
    counter.on_button_active(ButtonId::Increment, T0);
    assert_eq!(counter.on_button_active(ButtonId::Increment, T0 - ms(500)), None);
}

#[test]
fn directions() {
    assert_eq!(ButtonId::Increment.direction(), 1);
    assert_eq!(ButtonId::Decrement.direction(), -1);
}

/// Hold one button down for `hold`, sampling every `period`; count accepted presses.
fn accepted_while_held(period: Duration, hold: Duration) -> usize {
    let mut counter = DigitCounter::new();
    let mut now = T0;
    let mut accepted = 0;
    while now <= T0 + hold {
        if counter.on_button_active(ButtonId::Increment, now).is_some() {
            accepted += 1;
        }
        now += period;
    }
    accepted
}

#[test]
fn held_button_at_full_loop_period_steps_every_iteration() {
    let loop_period = BLINK_ON + BLINK_OFF + POLL_INTERVAL;
    assert_eq!(loop_period, ms(210));
    // Samples at 0, 210, ..., 2100 ms: every one is more than 100 ms after the last.
    assert_eq!(accepted_while_held(loop_period, ms(2_100)), 11);
}

#[test]
fn held_button_at_fast_ticks_steps_once_per_window() {
    // Samples every 10 ms; accepted at 0, 110, 220, ... (first sample past 100 ms).
    assert_eq!(accepted_while_held(ms(10), ms(1_000)), 10);
    assert_eq!(accepted_while_held(ms(10), ms(99)), 1);
}

#[test]
fn held_button_at_fifty_ms_ticks() {
    // Samples at 0, 50, 100, 150, ...: 100 ms is not enough, 150 ms is.
    assert_eq!(accepted_while_held(ms(50), ms(600)), 5);
}
