/// Alert evaluation for the monitor loop.
///
/// One iteration's readings are combined with a disjunctive rule: alert
/// when motion is seen OR an object sits closer than the configured
/// threshold. Evaluation is pure and stateless; the readings live for
/// one iteration and only the config outlives it.
use core::fmt::Write;

use heapless::String;

use crate::sonar::RangeReading;

/// Distance below which an object counts as an intruder, in centimeters.
pub const DEFAULT_THRESHOLD_CM: f32 = 30.0;

/// Monitor configuration, fixed for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    /// Proximity alert threshold in centimeters.
    pub threshold_cm: f32,
}

impl MonitorConfig {
    pub const fn new() -> Self {
        Self {
            threshold_cm: DEFAULT_THRESHOLD_CM,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Both sensor readings from one loop iteration.
#[derive(Debug, Clone, Copy)]
pub struct SensorSample {
    /// Instantaneous PIR state.
    pub motion: bool,
    /// Ultrasonic distance measurement.
    pub range: RangeReading,
}

/// Outcome of evaluating one sample.
///
/// Motion takes precedence in the reported cause when both conditions
/// hold; the alert itself is the OR of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing seen.
    Monitoring,
    /// PIR reported motion.
    MotionDetected,
    /// Object closer than the threshold.
    ObjectTooClose,
}

impl Status {
    /// Human-readable console form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Monitoring => "Monitoring...",
            Status::MotionDetected => "Motion Detected!",
            Status::ObjectTooClose => "Object too close!",
        }
    }

    /// True for any status that should sound the buzzer.
    pub fn is_alert(&self) -> bool {
        !matches!(self, Status::Monitoring)
    }
}

/// Evaluate one sample against the configured threshold.
pub fn evaluate(sample: &SensorSample, config: &MonitorConfig) -> Status {
    if sample.motion {
        Status::MotionDetected
    } else if sample.range.is_closer_than(config.threshold_cm) {
        Status::ObjectTooClose
    } else {
        Status::Monitoring
    }
}

/// Maximum length of a rendered status line.
pub const STATUS_LINE_LEN: usize = 64;

/// Render the canonical one-line console form of an iteration.
///
/// e.g. `Object too close! | motion: clear | distance: 23.4 cm`
pub fn status_line(sample: &SensorSample, status: Status) -> String<STATUS_LINE_LEN> {
    let mut line = String::new();
    let motion = if sample.motion { "detected" } else { "clear" };
    let _ = write!(line, "{} | motion: {} | distance: ", status.as_str(), motion);
    match sample.range {
        RangeReading::Contact(cm) => {
            let _ = write!(line, "{cm:.1} cm");
        }
        RangeReading::OutOfRange => {
            let _ = line.push_str("out of range");
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFG: MonitorConfig = MonitorConfig::new();

    fn sample(motion: bool, range: RangeReading) -> SensorSample {
        SensorSample { motion, range }
    }

    // ── Disjunctive rule ────────────────────────────────────────────

    #[test]
    fn close_object_alerts_regardless_of_motion() {
        for motion in [false, true] {
            let s = sample(motion, RangeReading::Contact(20.0));
            assert!(evaluate(&s, &CFG).is_alert(), "motion={motion}");
        }
    }

    #[test]
    fn motion_alerts_regardless_of_distance() {
        for range in [
            RangeReading::Contact(5.0),
            RangeReading::Contact(50.0),
            RangeReading::OutOfRange,
        ] {
            let s = sample(true, range);
            assert_eq!(evaluate(&s, &CFG), Status::MotionDetected, "{range:?}");
        }
    }

    #[test]
    fn no_motion_and_far_object_is_quiet() {
        let s = sample(false, RangeReading::Contact(50.0));
        assert_eq!(evaluate(&s, &CFG), Status::Monitoring);
        assert!(!evaluate(&s, &CFG).is_alert());
    }

    #[test]
    fn distance_exactly_at_threshold_is_quiet() {
        let s = sample(false, RangeReading::Contact(DEFAULT_THRESHOLD_CM));
        assert_eq!(evaluate(&s, &CFG), Status::Monitoring);
    }

    #[test]
    fn echo_timeout_never_raises_proximity_alert() {
        let s = sample(false, RangeReading::OutOfRange);
        assert_eq!(evaluate(&s, &CFG), Status::Monitoring);
    }

    #[test]
    fn motion_wins_cause_when_both_conditions_hold() {
        let s = sample(true, RangeReading::Contact(10.0));
        assert_eq!(evaluate(&s, &CFG), Status::MotionDetected);
    }

    #[test]
    fn custom_threshold_is_honored() {
        let cfg = MonitorConfig { threshold_cm: 100.0 };
        let s = sample(false, RangeReading::Contact(50.0));
        assert_eq!(evaluate(&s, &cfg), Status::ObjectTooClose);
    }

    // ── Status text ─────────────────────────────────────────────────

    #[test]
    fn status_strings_match_console_vocabulary() {
        assert_eq!(Status::Monitoring.as_str(), "Monitoring...");
        assert_eq!(Status::MotionDetected.as_str(), "Motion Detected!");
        assert_eq!(Status::ObjectTooClose.as_str(), "Object too close!");
    }

    #[test]
    fn only_monitoring_is_quiet() {
        assert!(!Status::Monitoring.is_alert());
        assert!(Status::MotionDetected.is_alert());
        assert!(Status::ObjectTooClose.is_alert());
    }

    // ── Line rendering ──────────────────────────────────────────────

    #[test]
    fn status_line_renders_contact_distance() {
        let s = sample(false, RangeReading::Contact(23.44));
        let line = status_line(&s, evaluate(&s, &CFG));
        assert_eq!(
            line.as_str(),
            "Monitoring... | motion: clear | distance: 23.4 cm"
        );
    }

    #[test]
    fn status_line_renders_motion_alert() {
        let s = sample(true, RangeReading::Contact(50.0));
        let line = status_line(&s, evaluate(&s, &CFG));
        assert_eq!(
            line.as_str(),
            "Motion Detected! | motion: detected | distance: 50.0 cm"
        );
    }

    #[test]
    fn status_line_renders_out_of_range() {
        let s = sample(false, RangeReading::OutOfRange);
        let line = status_line(&s, evaluate(&s, &CFG));
        assert_eq!(
            line.as_str(),
            "Monitoring... | motion: clear | distance: out of range"
        );
    }

    #[test]
    fn status_line_never_overflows_buffer() {
        // Worst case: longest status, longest distance rendering
        let s = sample(false, RangeReading::Contact(399.95));
        let line = status_line(&s, Status::ObjectTooClose);
        assert!(line.len() <= STATUS_LINE_LEN);
        assert!(line.as_str().ends_with("cm"));
    }
}
