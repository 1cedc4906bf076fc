//! Compile-time description of panel geometry and wiring.
//!
//! See [`LedLayout`] for examples including serpentine panels, rotations, and flips.

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` defines how a rectangular `(x, y)` panel of LEDs maps to the linear
/// order of LEDs on a NeoPixel-style (WS2812) strip. Entry `i` of the map is the
/// `(column, row)` cell lit by LED `i`.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// `x` increases to the right, and `y` increases downward.
///
/// Prefer the built-in constructors ([`serpentine_row_major`](Self::serpentine_row_major),
/// [`serpentine_column_major`](Self::serpentine_column_major)) and then apply transforms
/// ([`rotate_180`](Self::rotate_180), [`flip_h`](Self::flip_h), [`flip_v`](Self::flip_v)).
/// For unusual wiring, list every `(x, y)` in strip order with [`LedLayout::new`].
///
/// ## Validation
///
/// Layouts are validated at **compile time** when built in a `const`:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// # Example
///
/// The digit matrix is wired in a snake whose first LED sits in the bottom-right corner:
///
/// ```rust
/// use digit_matrix::led2d::layout::LedLayout;
///
/// const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]);
/// const _: () = assert!(SNAKE.equals(&EXPECTED)); // Compile-time assert
/// ```
///
/// ```text
/// Serpentine 3×2 rotated 180°:
///
///   Before:              After:
///     LED0  LED1  LED2     LED3  LED4  LED5
///     LED5  LED4  LED3     LED2  LED1  LED0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Layouts always cover at least one LED.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Invert the layout into a row-major lookup: entry `y * W + x` is the LED index
    /// that lights cell `(x, y)`.
    ///
    /// ```rust
    /// use digit_matrix::led2d::layout::LedLayout;
    ///
    /// const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    /// const BY_XY: [u16; 6] = MAP.xy_to_index();
    /// assert_eq!(BY_XY, [0, 1, 2, 5, 4, 3]);
    /// ```
    #[must_use]
    pub const fn xy_to_index(&self) -> [u16; N] {
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for xy_to_index"
        );

        let mut mapping = [u16::MAX; N];
        let mut led_index = 0;
        while led_index < N {
            let (col, row) = self.map[led_index];
            let col = col as usize;
            let row = row as usize;
            assert!(col < W, "column out of bounds in xy_to_index");
            assert!(row < H, "row out of bounds in xy_to_index");
            let target_index = row * W + col;
            assert!(
                mapping[target_index] == u16::MAX,
                "duplicate (col,row) in xy_to_index inversion"
            );
            mapping[target_index] = led_index as u16;
            led_index += 1;
        }

        let mut i = 0;
        while i < N {
            assert!(
                mapping[i] != u16::MAX,
                "xy_to_index requires every (col,row) to be covered"
            );
            i += 1;
        }
        mapping
    }

    /// Const equality helper for compile-time asserts.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies mapping covers every cell exactly once across the W×H panel.
    ///
    /// ```rust
    /// use digit_matrix::led2d::layout::LedLayout;
    ///
    /// // 3×2 panel, first row left-to-right, second row right-to-left
    /// const MAP: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
    /// const _: () = assert!(MAP.equals(&LedLayout::serpentine_row_major()));
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Serpentine row-major mapping (alternating left-to-right and right-to-left across rows).
    ///
    /// ```text
    /// Strip snakes across rows (3×2 example):
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Serpentine column-major mapping (alternating top-to-bottom and bottom-to-top down columns).
    ///
    /// ```text
    /// Strip snakes down columns (3×2 example):
    ///   LED0  LED3  LED4
    ///   LED1  LED2  LED5
    /// ```
    #[must_use]
    pub const fn serpentine_column_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if x_index % 2 == 0 {
                    x_index * H + y_index
                } else {
                    x_index * H + (H - 1 - y_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 180°: every LED moves to the diagonally opposite cell.
    ///
    /// ```text
    /// Before (3×2 serpentine): After 180°:
    ///   LED0  LED3  LED4        LED5  LED2  LED1
    ///   LED1  LED2  LED5        LED4  LED3  LED0
    /// ```
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            out[i] = ((W - 1 - c as usize) as u16, (H - 1 - r as usize) as u16);
            i += 1;
        }
        Self::new(out)
    }

    /// Flip horizontally (mirror columns).
    ///
    /// ```text
    /// Before (serpentine): After:
    ///   LED0  LED3  LED4      LED4  LED3  LED0
    ///   LED1  LED2  LED5      LED5  LED2  LED1
    /// ```
    #[must_use]
    pub const fn flip_h(self) -> Self {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            out[i] = ((W - 1 - c as usize) as u16, r);
            i += 1;
        }
        Self::new(out)
    }

    /// Flip vertically (mirror rows).
    ///
    /// ```text
    /// Before (serpentine): After:
    ///   LED0  LED3  LED4      LED1  LED2  LED5
    ///   LED1  LED2  LED5      LED0  LED3  LED4
    /// ```
    #[must_use]
    pub const fn flip_v(self) -> Self {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            out[i] = (c, (H - 1 - r as usize) as u16);
            i += 1;
        }
        Self::new(out)
    }
}
