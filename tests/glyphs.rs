#![allow(missing_docs)]
//! Host-level tests for the digit glyphs and rendering into the frame buffer.

use digit_matrix::Error;
use digit_matrix::glyph::{
    BRIGHTNESS, Digit, EIGHT_COLOR, GLYPHS, NINE_COLOR, SEVEN_COLOR, THREE_COLOR, ZERO_COLOR,
    glyph_for, glyph_for_value,
};
use digit_matrix::led_strip_host::RecordingStrip;
use digit_matrix::matrix::{DigitMatrix, led_index};
use smart_leds::RGB8;

const BLACK: RGB8 = RGB8::new(0, 0, 0);

fn digit(value: u8) -> Digit {
    Digit::new(value).expect("digit in range")
}

fn stencil(value: u8) -> [String; 5] {
    glyph_for(digit(value)).rows().map(|cells| {
        cells
            .iter()
            .map(|color| if *color == BLACK { '.' } else { '#' })
            .collect()
    })
}

#[test]
fn digit_zero_is_a_red_ring_of_twelve() {
    let zero = glyph_for(Digit::ZERO);
    assert_eq!(zero.lit_count(), 12);
    assert_eq!(stencil(0), [".###.", ".#.#.", ".#.#.", ".#.#.", ".###."]);
    for cells in zero.rows() {
        for color in cells {
            assert!(*color == BLACK || *color == RGB8::new(BRIGHTNESS, 0, 0));
        }
    }
    assert_eq!(ZERO_COLOR, RGB8::new(BRIGHTNESS, 0, 0));
}

#[test]
fn every_glyph_matches_its_stencil() {
    let expected = [
        [".###.", ".#.#.", ".#.#.", ".#.#.", ".###."],
        ["..#..", "..#..", "..#..", "..#..", "..#.."],
        [".###.", "...#.", ".###.", ".#...", ".###."],
        [".###.", "...#.", ".###.", "...#.", ".###."],
        [".#.#.", ".#.#.", ".###.", "...#.", "...#."],
        [".###.", ".#...", ".###.", "...#.", ".###."],
        [".###.", ".#...", ".###.", ".#.#.", ".###."],
        [".###.", "...#.", "...#.", "...#.", "...#."],
        [".###.", ".#.#.", ".###.", ".#.#.", ".###."],
        [".###.", ".#.#.", ".###.", "...#.", ".###."],
    ];
    for (value, rows) in (0..10).zip(expected) {
        assert_eq!(stencil(value), rows, "digit {value}");
    }
}

#[test]
fn lit_counts_per_digit() {
    let counts: Vec<usize> = GLYPHS.iter().map(|glyph| glyph.lit_count()).collect();
    assert_eq!(counts, [12, 5, 11, 11, 9, 11, 12, 7, 13, 12]);
}

#[test]
fn outer_columns_are_always_dark() {
    for glyph in &GLYPHS {
        for cells in glyph.rows() {
            assert_eq!(cells[0], BLACK);
            assert_eq!(cells[4], BLACK);
        }
    }
}

#[test]
fn per_digit_colors_are_preserved() {
    let b = BRIGHTNESS;
    let expected = [
        (b, 0, 0),
        (0, b, 0),
        (0, 0, b),
        (100, b, 0),
        (0, 0, b),
        (0, b, 0),
        (0, 0, b),
        (0, b, b),
        (b, 0, b),
        (b, b, b),
    ];
    for (glyph, (r, g, bl)) in GLYPHS.iter().zip(expected) {
        let lit: Vec<RGB8> = glyph
            .rows()
            .iter()
            .flatten()
            .copied()
            .filter(|color| *color != BLACK)
            .collect();
        assert!(lit.iter().all(|color| *color == RGB8::new(r, g, bl)));
    }
    assert_eq!(THREE_COLOR.r, 100);
    assert_eq!(SEVEN_COLOR, RGB8::new(0, b, b));
    assert_eq!(EIGHT_COLOR, RGB8::new(b, 0, b));
    assert_eq!(NINE_COLOR, RGB8::new(b, b, b));
}

#[test]
fn out_of_range_digit_is_an_error() {
    assert_eq!(Digit::new(10), Err(Error::DigitOutOfRange(10)));
    assert_eq!(Digit::try_from(255_u8), Err(Error::DigitOutOfRange(255)));
    assert!(matches!(
        glyph_for_value(10),
        Err(Error::DigitOutOfRange(10))
    ));
    assert_eq!(glyph_for_value(9).ok(), Some(glyph_for(digit(9))));
}

#[test]
fn glyph_pixel_lookup() {
    let one = glyph_for(digit(1));
    assert_eq!(one.pixel(2, 2), Ok(RGB8::new(0, BRIGHTNESS, 0)));
    assert_eq!(one.pixel(2, 1), Ok(BLACK));
    assert_eq!(
        one.pixel(0, 5),
        Err(Error::CoordinateOutOfRange { row: 0, col: 5 })
    );
}

#[test]
fn glyph_draws_into_panel_frame() {
    let three = glyph_for(digit(3));
    let frame = three.to_frame2d();
    for (row, cells) in three.rows().iter().enumerate() {
        for (col, color) in cells.iter().enumerate() {
            assert_eq!(frame[(col, row)], *color);
        }
    }
}

#[test]
fn render_digit_places_every_cell_through_the_mapper() {
    let mut matrix = DigitMatrix::new(RecordingStrip::<25>::new());
    for value in 0..10 {
        matrix.render_digit(digit(value));
        let glyph = glyph_for(digit(value));
        for row in 0..5 {
            for col in 0..5 {
                let index = led_index(row, col).expect("in range");
                assert_eq!(
                    matrix.frame()[index],
                    glyph.pixel(row, col).expect("in range")
                );
            }
        }
        assert_eq!(matrix.frame().lit_count(), glyph.lit_count());
    }
}

#[test]
fn render_digit_is_idempotent() {
    let mut matrix = DigitMatrix::new(RecordingStrip::<25>::new());
    matrix.render_digit(digit(5));
    let first = *matrix.frame();
    matrix.render_digit(digit(5));
    assert_eq!(*matrix.frame(), first);

    // Rendering overwrites every cell, so the previous digit leaves no trace.
    matrix.render_digit(digit(8));
    matrix.render_digit(digit(5));
    assert_eq!(*matrix.frame(), first);
}

#[test]
fn digit_stepping_wraps() {
    assert_eq!(Digit::ZERO.prev(), digit(9));
    assert_eq!(digit(9).next(), Digit::ZERO);
    assert_eq!(digit(4).step(1), digit(5));
    assert_eq!(digit(4).step(-1), digit(3));
    assert_eq!(digit(4).step(0), digit(4));
    assert_eq!(Digit::all().count(), 10);
}
