#![cfg(feature = "host")]
//! PNG previews of what the matrix shows, for host builds.
//!
//! Each LED is drawn as a soft disc on a black board. Colors go through an inverse gamma
//! so the dim glyph colors remain visible on screen.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder, ScaledFloat};

use crate::config::{LED_COUNT, MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::glyph::{Digit, glyph_for};
use crate::led_strip::Frame1d;
use crate::led2d::Frame2d;
use crate::matrix::DIGIT_LAYOUT;

const PREVIEW_INVERSE_GAMMA: f32 = 0.45;

type PngResult<T = ()> = Result<T, Box<dyn Error>>;

/// Render a `Frame2d` into a PNG file sized to the requested maximum dimension.
///
/// # Errors
///
/// Returns any I/O or encoding error.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> PngResult {
    let geometry = PanelGeometry::new(W, H, target_max_dimension)?;
    let pixels = geometry.render(frame);
    write_png(output_path.as_ref(), &geometry, &[pixels], None)
}

/// Render the strip frame of the digit matrix, mapped back onto the 5×5 grid.
///
/// # Errors
///
/// Returns any I/O or encoding error.
pub fn write_strip_frame_png(
    strip_frame: &Frame1d<LED_COUNT>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> PngResult {
    let frame = Frame2d::from_strip_frame(strip_frame, &DIGIT_LAYOUT);
    write_frame_png(&frame, output_path, target_max_dimension)
}

/// Render the glyph for `digit` into a PNG file.
///
/// # Errors
///
/// Returns any I/O or encoding error.
pub fn write_digit_png(
    digit: Digit,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> PngResult {
    write_frame_png(&glyph_for(digit).to_frame2d(), output_path, target_max_dimension)
}

/// Render multiple `Frame2d` values into a looping APNG file.
///
/// # Errors
///
/// Returns an error for an empty frame list, a delay that does not fit the APNG
/// header, or any I/O or encoding error.
pub fn write_frames_apng<const W: usize, const H: usize>(
    frames: &[Frame2d<W, H>],
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    frame_delay_ms: u32,
) -> PngResult {
    if frames.is_empty() {
        return Err("frames must not be empty".into());
    }
    let delay_num = u16::try_from(frame_delay_ms)?;
    if delay_num == 0 {
        return Err("frame_delay_ms must be positive".into());
    }
    let geometry = PanelGeometry::new(W, H, target_max_dimension)?;
    let pixels: Vec<Vec<u8>> = frames.iter().map(|frame| geometry.render(frame)).collect();
    write_png(output_path.as_ref(), &geometry, &pixels, Some(delay_num))
}

/// Render 0 through 9 as a looping APNG, one digit per frame.
///
/// # Errors
///
/// Returns any I/O or encoding error.
pub fn write_digits_apng(
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    frame_delay_ms: u32,
) -> PngResult {
    let frames: Vec<Frame2d<MATRIX_WIDTH, MATRIX_HEIGHT>> = Digit::all()
        .map(|digit| glyph_for(digit).to_frame2d())
        .collect();
    write_frames_apng(&frames, output_path, target_max_dimension, frame_delay_ms)
}

// ============================================================================
// Rendering
// ============================================================================

/// Pixel layout of a preview image: one square cell per LED plus a border.
struct PanelGeometry {
    columns: u32,
    rows: u32,
    cell_size: u32,
    led_radius: u32,
    width: u32,
    height: u32,
}

impl PanelGeometry {
    fn new(columns: usize, rows: usize, target_max_dimension: u32) -> PngResult<Self> {
        if target_max_dimension == 0 {
            return Err("target_max_dimension must be positive".into());
        }
        let columns = u32::try_from(columns)?;
        let rows = u32::try_from(rows)?;
        let mut cell_size = target_max_dimension;
        while cell_size > 1 {
            let led_radius = Self::radius_for(cell_size);
            let max_dimension = columns.max(rows) * cell_size + led_radius * 2;
            if max_dimension <= target_max_dimension {
                break;
            }
            cell_size -= 1;
        }
        let led_radius = Self::radius_for(cell_size);
        if led_radius < 3 {
            return Err("target_max_dimension is too small for a preview".into());
        }
        Ok(Self {
            columns,
            rows,
            cell_size,
            led_radius,
            width: columns * cell_size + led_radius * 2,
            height: rows * cell_size + led_radius * 2,
        })
    }

    const fn radius_for(cell_size: u32) -> u32 {
        let led_margin = if cell_size / 8 > 1 { cell_size / 8 } else { 1 };
        cell_size.saturating_sub(led_margin * 2) / 2
    }

    /// 16-bit RGB samples, big-endian, row by row.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        reason = "preview images are small"
    )]
    fn render<const W: usize, const H: usize>(&self, frame: &Frame2d<W, H>) -> Vec<u8> {
        let border = self.led_radius;
        let mut bytes = vec![0u8; (self.width * self.height * 3 * 2) as usize];
        let center = (self.cell_size - 1) as i32 / 2;
        let fade_width = self.led_radius / 3;
        let led_radius_f = self.led_radius as f32;
        let inner_radius_f = (self.led_radius - fade_width) as f32;
        let radius_sq = (self.led_radius * self.led_radius) as i32;

        for (row_index, cells) in frame.0.iter().enumerate().take(self.rows as usize) {
            for (column_index, pixel) in cells.iter().enumerate().take(self.columns as usize) {
                let channels = [pixel.r, pixel.g, pixel.b].map(inverse_gamma_to_linear);
                let cell_origin_x = column_index as u32 * self.cell_size;
                let cell_origin_y = row_index as u32 * self.cell_size;

                for local_y in 0..self.cell_size {
                    let delta_y = local_y as i32 - center;
                    for local_x in 0..self.cell_size {
                        let delta_x = local_x as i32 - center;
                        let distance_sq = delta_x * delta_x + delta_y * delta_y;
                        if distance_sq > radius_sq {
                            continue;
                        }
                        let distance = (distance_sq as f32).sqrt();
                        let intensity = if distance <= inner_radius_f {
                            1.0
                        } else {
                            let fade_span = led_radius_f - inner_radius_f;
                            (1.0 - (distance - inner_radius_f) / fade_span).max(0.0)
                        };
                        let x = border + cell_origin_x + local_x;
                        let y = border + cell_origin_y + local_y;
                        let pixel_index = ((y * self.width + x) * 3 * 2) as usize;
                        for (offset, linear) in channels.iter().enumerate() {
                            let sample = linear_to_u16(linear * intensity).to_be_bytes();
                            bytes[pixel_index + offset * 2] = sample[0];
                            bytes[pixel_index + offset * 2 + 1] = sample[1];
                        }
                    }
                }
            }
        }
        bytes
    }
}

fn write_png(
    output_path: &Path,
    geometry: &PanelGeometry,
    frames: &[Vec<u8>],
    frame_delay_ms: Option<u16>,
) -> PngResult {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), geometry.width, geometry.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    if frame_delay_ms.is_some() {
        encoder.set_animated(u32::try_from(frames.len())?, 0)?;
    }
    let mut writer = encoder.write_header()?;
    for pixels in frames {
        if let Some(delay) = frame_delay_ms {
            writer.set_frame_delay(delay, 1000)?;
        }
        writer.write_image_data(pixels)?;
    }
    writer.finish()?;
    println!("wrote PNG to {}", output_path.display());
    Ok(())
}

fn inverse_gamma_to_linear(channel: u8) -> f32 {
    (f32::from(channel) / 255.0).powf(PREVIEW_INVERSE_GAMMA)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=65535"
)]
fn linear_to_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}
