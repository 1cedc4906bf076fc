#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;
use digit_matrix::{
    Result,
    app::DigitApp,
    button::{Button, PressedTo},
    config::{BLINK_OFF, BLINK_ON, LED_COUNT, POLL_INTERVAL},
    digit_log::DefmtLog,
    indicator::{IndicatorColor, RgbIndicator},
    led_strip::pio_strip::PioStrip,
    matrix::DigitMatrix,
};
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    gpio::{Level, Output},
    peripherals::PIO0,
    pio::{InterruptHandler, Pio},
    pio_programs::ws2812::PioWs2812Program,
};
use embassy_time::{Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Matrix data on GPIO 7, driven by PIO0 state machine 0.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let strip = PioStrip::<_, 0, LED_COUNT>::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    let mut matrix = DigitMatrix::new(strip);
    matrix.clear().await;

    // Both buttons short to GND; A (GPIO 5) counts up, B (GPIO 6) counts down.
    let mut button_a = Button::new(p.PIN_5, PressedTo::Ground);
    let mut button_b = Button::new(p.PIN_6, PressedTo::Ground);

    // Indicator: red GPIO 13, green GPIO 12, blue GPIO 11.
    let mut indicator = RgbIndicator::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_11, Level::Low),
    )?;

    let mut app = DigitApp::new(matrix, DefmtLog);
    app.start().await;

    loop {
        indicator.set(IndicatorColor::Red)?;
        Timer::after(BLINK_ON).await;
        indicator.set(IndicatorColor::Off)?;
        Timer::after(BLINK_OFF).await;

        let decrement_pressed = button_b.is_pressed()?;
        let increment_pressed = button_a.is_pressed()?;
        app.poll(decrement_pressed, increment_pressed, Instant::now())
            .await;

        Timer::after(POLL_INTERVAL).await;
    }
}
