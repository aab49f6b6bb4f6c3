//! Console status renderer.
//!
//! Status lines go to stdout; structured logs stay on stderr via the `log`
//! facade. An unchanged status reprints at most once per refresh interval
//! so a quiet room doesn't scroll the terminal at poll rate.

use std::time::{Duration, Instant};

use pihound::board;
use pihound::engine::TickReport;
use pihound::monitor::{status_line, Status};

const BANNER_RULE: &str = "==================================================";

pub struct StatusDisplay {
    refresh: Duration,
    last_print: Option<Instant>,
    last_status: Option<Status>,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self {
            refresh: Duration::from_millis(board::STATUS_REFRESH_MS),
            last_print: None,
            last_status: None,
        }
    }

    /// Print the status line for one iteration, unless it would repeat an
    /// unchanged status inside the refresh window.
    pub fn show(&mut self, report: &TickReport) {
        let status_changed = self.last_status != Some(report.status);
        let refresh_due = self.last_print.map_or(true, |t| t.elapsed() >= self.refresh);
        if !status_changed && !refresh_due {
            return;
        }

        println!("{}", status_line(&report.sample, report.status));
        self.last_status = Some(report.status);
        self.last_print = Some(Instant::now());
    }
}

pub fn show_startup() {
    println!("{BANNER_RULE}");
    println!("  PIHOUND - RASPBERRY PI INTRUSION MONITOR");
    println!("{BANNER_RULE}");
    println!("Monitoring armed. Press Ctrl+C to stop.");
}

pub fn show_shutdown() {
    println!("{BANNER_RULE}");
    println!("Monitor stopped. Buzzer off, pins released.");
}
