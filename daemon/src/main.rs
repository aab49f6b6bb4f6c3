//! PiHound — Raspberry Pi daemon
//!
//! Owns the four GPIO lines, implements the core `MonitorIo` seam on top
//! of them, and runs the blocking poll loop: sample PIR, measure distance,
//! drive the buzzer, print status, sleep. SIGINT flips an atomic flag; the
//! loop then disarms the engine so the buzzer ends low before the pins are
//! released.

mod buzzer;
mod display;
mod sensors;

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use pihound::board;
use pihound::engine::{Engine, MonitorIo};
use pihound::monitor::{status_line, MonitorConfig};
use pihound::sonar::RangeReading;
use rppal::gpio::Gpio;

use buzzer::Buzzer;
use display::StatusDisplay;
use sensors::{HcSr04, Pir};

static RUNNING: AtomicBool = AtomicBool::new(true);

/// The context object owning all pin handles, passed into the engine.
struct PinContext {
    pir: Pir,
    sonar: HcSr04,
    buzzer: Buzzer,
}

impl MonitorIo for PinContext {
    // rppal pin reads and writes cannot fail once the pins are acquired.
    type Error = Infallible;

    fn read_motion(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pir.motion_detected())
    }

    fn measure_distance(&mut self) -> Result<RangeReading, Self::Error> {
        Ok(self.sonar.measure())
    }

    fn set_alarm(&mut self, active: bool) -> Result<(), Self::Error> {
        self.buzzer.set(active);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("PiHound v{} starting on {}", pihound::VERSION, board::BOARD_NAME);

    ctrlc::set_handler(|| RUNNING.store(false, Ordering::SeqCst))
        .context("failed to install SIGINT handler")?;

    // ── Hardware acquisition (fatal on failure) ──────────────────────

    let gpio = Gpio::new()
        .context("GPIO access failed (not a Raspberry Pi, or /dev/gpiomem unavailable?)")?;
    let pir = Pir::new(&gpio).context("PIR motion sensor init failed")?;
    let sonar = HcSr04::new(&gpio).context("HC-SR04 ultrasonic sensor init failed")?;
    let buzzer = Buzzer::new(&gpio).context("buzzer init failed")?;

    log::info!("Letting the PIR settle for {} ms", board::PIR_WARMUP_MS);
    thread::sleep(Duration::from_millis(board::PIR_WARMUP_MS));

    // ── Monitor loop ─────────────────────────────────────────────────

    let mut engine = Engine::new(
        PinContext { pir, sonar, buzzer },
        MonitorConfig::new(),
    );
    let mut status_display = StatusDisplay::new();
    display::show_startup();

    let poll = Duration::from_millis(board::POLL_INTERVAL_MS);
    while RUNNING.load(Ordering::SeqCst) {
        match engine.tick() {
            Ok(report) => {
                status_display.show(&report);
                if report.cycle % board::CYCLE_LOG_STRIDE == 0 {
                    log::info!(
                        "[cycle {}] {}",
                        report.cycle,
                        status_line(&report.sample, report.status)
                    );
                }
            }
            Err(e) => log::warn!("monitor iteration failed: {e}"),
        }
        thread::sleep(poll);
    }

    // ── Shutdown (buzzer must end low) ───────────────────────────────

    log::info!("Interrupt received, shutting down");
    if let Err(e) = engine.disarm() {
        log::error!("failed to silence buzzer: {e}");
    }
    display::show_shutdown();
    log::info!("Shutdown complete");
    Ok(())
}
