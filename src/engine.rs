/// The monitor engine: one context object, one tick at a time.
///
/// Hardware access goes through the [`MonitorIo`] seam so the engine runs
/// identically against GPIO pins on the Pi and scripted fakes in tests.
/// The engine owns the IO context, re-evaluates the alert condition every
/// tick, and drives the alarm line to match. There is no latching and no
/// cooldown; the alarm tracks the per-iteration alert state exactly.
use core::fmt::Display;

use crate::monitor::{evaluate, MonitorConfig, SensorSample, Status};
use crate::sonar::RangeReading;

/// Hardware seam for the monitor loop.
///
/// Implementations own the pin handles. All three operations are sampled
/// once per tick; errors propagate to the caller, which decides whether
/// they are fatal.
pub trait MonitorIo {
    type Error: Display;

    /// Instantaneous PIR line state.
    fn read_motion(&mut self) -> Result<bool, Self::Error>;

    /// One ultrasonic measurement. A missing echo is not an error; it
    /// must come back as [`RangeReading::OutOfRange`].
    fn measure_distance(&mut self) -> Result<RangeReading, Self::Error>;

    /// Drive the alarm line.
    fn set_alarm(&mut self, active: bool) -> Result<(), Self::Error>;
}

/// The two states of the monitor machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Monitoring,
    Alerting,
}

/// What one tick saw and did.
#[derive(Debug, Clone, Copy)]
pub struct TickReport {
    pub sample: SensorSample,
    pub status: Status,
    pub state: MonitorState,
    /// True when this tick crossed between `Monitoring` and `Alerting`.
    pub changed: bool,
    /// Monotonic iteration counter, wrapping.
    pub cycle: u32,
}

/// Monitor engine over an IO context.
pub struct Engine<IO: MonitorIo> {
    io: IO,
    config: MonitorConfig,
    state: MonitorState,
    cycle: u32,
}

impl<IO: MonitorIo> Engine<IO> {
    pub fn new(io: IO, config: MonitorConfig) -> Self {
        Self {
            io,
            config,
            state: MonitorState::Monitoring,
            cycle: 0,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Run one monitor iteration: sample both sensors, evaluate, drive
    /// the alarm line, report.
    pub fn tick(&mut self) -> Result<TickReport, IO::Error> {
        let motion = self.io.read_motion()?;
        let range = self.io.measure_distance()?;
        let sample = SensorSample { motion, range };

        let status = evaluate(&sample, &self.config);
        let next = if status.is_alert() {
            MonitorState::Alerting
        } else {
            MonitorState::Monitoring
        };

        self.io.set_alarm(status.is_alert())?;

        let changed = next != self.state;
        if changed {
            match next {
                MonitorState::Alerting => log::info!("Alert raised: {}", status.as_str()),
                MonitorState::Monitoring => log::info!("Alert cleared"),
            }
        }
        self.state = next;

        let cycle = self.cycle;
        self.cycle = self.cycle.wrapping_add(1);

        Ok(TickReport {
            sample,
            status,
            state: next,
            changed,
            cycle,
        })
    }

    /// Force the alarm off and return to `Monitoring`. The shutdown path
    /// must leave the alarm line low no matter what state the engine
    /// was in.
    pub fn disarm(&mut self) -> Result<(), IO::Error> {
        self.state = MonitorState::Monitoring;
        self.io.set_alarm(false)
    }
}
