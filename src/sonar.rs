/// Ultrasonic time-of-flight conversion.
///
/// The HC-SR04 reports distance as the width of its echo pulse: the sound
/// round trip at ~343 m/s. This module turns a measured round-trip
/// `Duration` into a typed reading, clamping anything past the sensor's
/// physical ceiling to [`RangeReading::OutOfRange`]. A timed-out echo is
/// also `OutOfRange`: a missing echo means nothing in front of the
/// sensor, never an object at distance zero.
use core::time::Duration;

/// Speed of sound in centimeters per microsecond (dry air, ~20 °C).
pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

/// Physical ceiling of the HC-SR04 in centimeters. Readings beyond this
/// are echo artifacts, not objects.
pub const MAX_RANGE_CM: f32 = 400.0;

/// One distance measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeReading {
    /// An object returned an echo at this many centimeters.
    Contact(f32),
    /// No echo within range: timed out, or past the sensor ceiling.
    OutOfRange,
}

impl RangeReading {
    /// Convert a measured echo round trip into a reading.
    ///
    /// Distance is half the round trip at the speed of sound. Round trips
    /// that decode past [`MAX_RANGE_CM`] clamp to `OutOfRange`.
    pub fn from_round_trip(round_trip: Duration) -> Self {
        let cm = round_trip.as_micros() as f32 * (SPEED_OF_SOUND_CM_PER_US / 2.0);
        if cm > MAX_RANGE_CM {
            RangeReading::OutOfRange
        } else {
            RangeReading::Contact(cm)
        }
    }

    /// True if an object was seen closer than `threshold_cm`.
    ///
    /// `OutOfRange` is never closer than any threshold; a timeout must
    /// not raise a proximity alert.
    pub fn is_closer_than(&self, threshold_cm: f32) -> bool {
        match *self {
            RangeReading::Contact(cm) => cm < threshold_cm,
            RangeReading::OutOfRange => false,
        }
    }

    /// Numeric distance for display. `OutOfRange` reports the ceiling.
    pub fn centimeters(&self) -> f32 {
        match *self {
            RangeReading::Contact(cm) => cm,
            RangeReading::OutOfRange => MAX_RANGE_CM,
        }
    }
}
