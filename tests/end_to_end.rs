#![allow(missing_docs)]
//! Host-level tests that drive the whole pipeline into a recording strip.

use digit_matrix::app::DigitApp;
use digit_matrix::digit_log::RecordingLog;
use digit_matrix::glyph::{Digit, glyph_for};
use digit_matrix::led_strip::Frame1d;
use digit_matrix::led_strip_host::RecordingStrip;
use digit_matrix::matrix::{DigitMatrix, led_index};
use embassy_futures::block_on;
use embassy_time::{Duration, Instant};

const T0: Instant = Instant::from_millis(5_000);

fn new_app() -> DigitApp<RecordingStrip<25>, RecordingLog> {
    DigitApp::new(DigitMatrix::new(RecordingStrip::new()), RecordingLog::new())
}

/// The bytes a strip should receive for `digit`, built straight from the glyph table.
fn expected_bytes(digit: Digit) -> Vec<u8> {
    let glyph = glyph_for(digit);
    let mut frame = Frame1d::<25>::new();
    for row in 0..5 {
        for col in 0..5 {
            frame[led_index(row, col).expect("in range")] =
                glyph.pixel(row, col).expect("in range");
        }
    }
    frame.channel_bytes().collect()
}

#[test]
fn start_shows_zero_in_one_flush() {
    let mut app = new_app();
    block_on(app.start());

    let strip = app.matrix().sink();
    assert_eq!(strip.bytes().len(), 75);
    assert_eq!(strip.bytes(), expected_bytes(Digit::ZERO));
    assert_eq!(strip.latch_count(), 1);
    assert_eq!(app.current().to_string(), "0");
}

#[test]
fn every_shown_digit_is_logged_once() {
    let mut app = new_app();
    block_on(app.start());
    assert_eq!(app.log().lines(), ["0"]);

    block_on(app.poll(false, true, T0));
    assert_eq!(app.log().lines(), ["0", "1"]);

    // Bounce inside the debounce window: no new line.
    block_on(app.poll(false, true, T0 + Duration::from_millis(40)));
    assert_eq!(app.log().lines(), ["0", "1"]);

    block_on(app.poll(true, false, T0 + Duration::from_millis(40)));
    block_on(app.poll(false, true, T0 + Duration::from_millis(150)));
    assert_eq!(app.log().lines(), ["0", "1", "0", "1"]);
}

#[test]
fn flush_sends_red_green_blue_in_index_order() {
    let mut app = new_app();
    block_on(app.start());

    let frame = app.matrix().frame();
    let bytes = app.matrix().sink().bytes();
    for (index, chunk) in bytes.chunks(3).enumerate() {
        assert_eq!(chunk, [frame[index].r, frame[index].g, frame[index].b]);
    }
    // (row 0, col 1) is LED 23 and lit; (row 0, col 0) is LED 24 and dark.
    assert_eq!(bytes[23 * 3..24 * 3], [13, 0, 0]);
    assert_eq!(bytes[24 * 3..], [0, 0, 0]);
}

#[test]
fn accepted_press_renders_and_flushes_once() {
    let mut app = new_app();
    block_on(async {
        app.start().await;
        let shown = app.poll(false, true, T0).await;
        assert_eq!(shown.map(|digit| digit.to_string()), Some("1".to_string()));
    });

    let strip = app.matrix().sink();
    assert_eq!(strip.frames().len(), 2);
    assert_eq!(strip.latch_count(), 2);
    assert_eq!(strip.bytes()[75..], expected_bytes(app.current()));
}

#[test]
fn suppressed_press_sends_nothing() {
    let mut app = new_app();
    block_on(async {
        app.start().await;
        app.poll(false, true, T0).await;
        let bounce = app.poll(false, true, T0 + Duration::from_millis(40)).await;
        assert_eq!(bounce, None);
    });
    assert_eq!(app.matrix().sink().latch_count(), 2);
    assert_eq!(app.current().value(), 1);
}

#[test]
fn decrement_is_handled_before_increment() {
    let mut app = new_app();
    let shown = block_on(async {
        app.start().await;
        app.poll(true, true, T0).await
    });
    // 0 - 1 = 9, then 9 + 1 = 0: two flushes, ending on 0.
    assert_eq!(shown, Some(Digit::ZERO));
    let strip = app.matrix().sink();
    assert_eq!(strip.latch_count(), 3);
    assert_eq!(app.log().lines(), ["0", "9", "0"]);
    assert_eq!(
        strip.frames()[1].channel_bytes().collect::<Vec<_>>(),
        expected_bytes(Digit::new(9).expect("in range"))
    );
}

#[test]
fn stepping_through_every_digit_and_back() {
    let mut app = new_app();
    block_on(async {
        app.start().await;
        let mut now = T0;
        for expected in 1..=10_u8 {
            now += Duration::from_millis(210);
            let shown = app.poll(false, true, now).await;
            assert_eq!(shown.map(Digit::value), Some(expected % 10));
        }
        now += Duration::from_millis(210);
        assert_eq!(app.poll(true, false, now).await.map(Digit::value), Some(9));
    });
    let last = app.matrix().sink().last_frame().copied();
    assert_eq!(
        last.map(|frame| frame.channel_bytes().collect::<Vec<_>>()),
        Some(expected_bytes(Digit::new(9).expect("in range")))
    );
}

#[test]
fn clear_turns_everything_off() {
    let mut matrix = DigitMatrix::new(RecordingStrip::<25>::new());
    block_on(async {
        matrix.show(Digit::new(8).expect("in range")).await;
        matrix.clear().await;
    });
    assert_eq!(matrix.frame().lit_count(), 0);
    let strip = matrix.into_sink();
    assert_eq!(strip.latch_count(), 2);
    assert!(strip.bytes()[75..].iter().all(|byte| *byte == 0));
}
