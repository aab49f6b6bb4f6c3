/// Hardware layout for the Raspberry Pi build.
///
/// Pin assignments (BCM numbering) and loop timing are fixed at compile
/// time. Everything the daemon needs to know about the wiring lives here.

/// PIR motion sensor data line.
pub const PIR_PIN: u8 = 17;

/// HC-SR04 trigger line.
pub const TRIG_PIN: u8 = 23;

/// HC-SR04 echo line.
pub const ECHO_PIN: u8 = 24;

/// Active buzzer drive line.
pub const BUZZER_PIN: u8 = 18;

/// Pause between monitor iterations in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 200;

/// HC-SR04 trigger pulse width in microseconds (datasheet: >= 10 µs).
pub const TRIG_PULSE_US: u64 = 10;

/// Deadline for the echo line to go high after triggering, in milliseconds.
///
/// The sensor raises echo within a few hundred microseconds; a line that
/// stays low this long means no measurement is coming.
pub const ECHO_START_TIMEOUT_MS: u64 = 30;

/// Deadline for the echo pulse to end, in milliseconds.
///
/// A 400 cm round trip is ~23 ms; a pulse still high past this bound means
/// no object in range.
pub const ECHO_PULSE_TIMEOUT_MS: u64 = 30;

/// PIR warm-up after power-on in milliseconds. Readings before this are
/// unreliable.
pub const PIR_WARMUP_MS: u64 = 2000;

/// Minimum interval between reprints of an unchanged status line.
pub const STATUS_REFRESH_MS: u64 = 1000;

/// Emit a cycle summary log line every this many iterations.
pub const CYCLE_LOG_STRIDE: u32 = 10;

/// Board identifier for startup logging.
pub const BOARD_NAME: &str = "raspberry_pi";
