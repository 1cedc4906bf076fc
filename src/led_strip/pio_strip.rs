//! WS2812 output through an RP2040/RP2350 PIO state machine.

use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program, Rgb as RgbOrder};
use embassy_time::Timer;

use super::{Frame1d, StripSink};
use crate::config::LATCH_DELAY;

/// A [`StripSink`] that shifts frames out of a PIO state machine with DMA.
///
/// Channel bytes go out red, green, blue per pixel, matching
/// [`Frame1d::channel_bytes`]. After each frame, [`latch`](StripSink::latch) holds the line
/// low for [`LATCH_DELAY`].
///
/// # Example
///
/// ```rust,ignore
/// use digit_matrix::led_strip::pio_strip::PioStrip;
/// use embassy_rp::bind_interrupts;
/// use embassy_rp::peripherals::PIO0;
/// use embassy_rp::pio::{InterruptHandler, Pio};
/// use embassy_rp::pio_programs::ws2812::PioWs2812Program;
///
/// bind_interrupts!(struct Irqs {
///     PIO0_IRQ_0 => InterruptHandler<PIO0>;
/// });
///
/// let p = embassy_rp::init(Default::default());
/// let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
/// let program = PioWs2812Program::new(&mut common);
/// let strip = PioStrip::<_, 0, 25>::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
/// ```
pub struct PioStrip<'d, PIO: Instance, const SM: usize, const N: usize> {
    driver: PioWs2812<'d, PIO, SM, N, RgbOrder>,
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> PioStrip<'d, PIO, SM, N> {
    /// Load the state machine with the WS2812 program and bind it to `pin`.
    #[must_use]
    pub fn new(
        common: &mut Common<'d, PIO>,
        state_machine: StateMachine<'d, PIO, SM>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
        program: &PioWs2812Program<'d, PIO>,
    ) -> Self {
        Self {
            driver: PioWs2812::with_color_order(common, state_machine, dma, pin, program),
        }
    }
}

impl<PIO: Instance, const SM: usize, const N: usize> StripSink<N> for PioStrip<'_, PIO, SM, N> {
    async fn write_frame(&mut self, frame: &Frame1d<N>) {
        self.driver.write(frame).await;
    }

    async fn latch(&mut self) {
        Timer::after(LATCH_DELAY).await;
    }
}
