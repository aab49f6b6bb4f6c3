//! Buzzer driver on a plain GPIO output.
//!
//! The alarm is an active buzzer: drive the line high to sound, low to
//! silence. The pin is acquired low and `rppal` resets it on drop, so the
//! buzzer cannot be left sounding past process exit.

use pihound::board;
use rppal::gpio::{Gpio, OutputPin};

pub struct Buzzer {
    pin: OutputPin,
}

impl Buzzer {
    pub fn new(gpio: &Gpio) -> Result<Self, rppal::gpio::Error> {
        let pin = gpio.get(board::BUZZER_PIN)?.into_output_low();
        log::info!("Buzzer ready on GPIO{}", board::BUZZER_PIN);
        Ok(Self { pin })
    }

    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}
