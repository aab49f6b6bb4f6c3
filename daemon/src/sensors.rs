//! GPIO sensor drivers: PIR motion input and HC-SR04 ultrasonic ranger.
//!
//! The HC-SR04 measurement is a bounded busy-wait: both echo edges are
//! polled against a deadline from `board`, so a wedged or disconnected
//! sensor degrades to an out-of-range reading instead of hanging the loop.

use std::time::{Duration, Instant};

use pihound::board;
use pihound::sonar::RangeReading;
use rppal::gpio::{Gpio, InputPin, Level, OutputPin};

/// PIR motion sensor on a single digital input.
///
/// Reads the instantaneous line state; the module itself does the
/// infrared processing and holds the line high while motion is seen.
pub struct Pir {
    pin: InputPin,
}

impl Pir {
    pub fn new(gpio: &Gpio) -> Result<Self, rppal::gpio::Error> {
        let pin = gpio.get(board::PIR_PIN)?.into_input();
        log::info!("PIR ready on GPIO{}", board::PIR_PIN);
        Ok(Self { pin })
    }

    pub fn motion_detected(&self) -> bool {
        self.pin.is_high()
    }
}

/// HC-SR04 ultrasonic ranger on a trigger output and an echo input.
pub struct HcSr04 {
    trig: OutputPin,
    echo: InputPin,
}

impl HcSr04 {
    pub fn new(gpio: &Gpio) -> Result<Self, rppal::gpio::Error> {
        let trig = gpio.get(board::TRIG_PIN)?.into_output_low();
        let echo = gpio.get(board::ECHO_PIN)?.into_input();
        log::info!(
            "HC-SR04 ready on GPIO{} (trig) / GPIO{} (echo)",
            board::TRIG_PIN,
            board::ECHO_PIN
        );
        Ok(Self { trig, echo })
    }

    /// Take one distance measurement.
    ///
    /// Pulses the trigger line, then waits for the echo pulse with a
    /// deadline on each edge. Either deadline expiring means no object
    /// in range.
    pub fn measure(&mut self) -> RangeReading {
        self.trig.set_high();
        spin_for(Duration::from_micros(board::TRIG_PULSE_US));
        self.trig.set_low();

        if !wait_for_level(
            &self.echo,
            Level::High,
            Duration::from_millis(board::ECHO_START_TIMEOUT_MS),
        ) {
            return RangeReading::OutOfRange;
        }
        let rise = Instant::now();

        if !wait_for_level(
            &self.echo,
            Level::Low,
            Duration::from_millis(board::ECHO_PULSE_TIMEOUT_MS),
        ) {
            return RangeReading::OutOfRange;
        }

        RangeReading::from_round_trip(rise.elapsed())
    }
}

/// Busy-wait until `pin` reads `level` or the deadline expires.
/// Returns false on timeout.
fn wait_for_level(pin: &InputPin, level: Level, deadline: Duration) -> bool {
    let start = Instant::now();
    while pin.read() != level {
        if start.elapsed() > deadline {
            return false;
        }
        std::hint::spin_loop();
    }
    true
}

/// Busy-wait for a sub-millisecond interval. `thread::sleep` granularity
/// is too coarse for the 10 µs trigger pulse.
fn spin_for(interval: Duration) {
    let start = Instant::now();
    while start.elapsed() < interval {
        std::hint::spin_loop();
    }
}
