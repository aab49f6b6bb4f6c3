//! PiHound library — portable intrusion monitor engine.
//!
//! This crate contains all detection logic with no platform dependencies,
//! testable on any host with `cargo test`: ultrasonic time-of-flight
//! conversion, the disjunctive alert rule, the two-state monitor machine,
//! and the [`engine::MonitorIo`] seam that hardware binaries implement.
//! The Raspberry Pi daemon (`daemon/`) is a thin consumer that provides
//! GPIO access and console output.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod engine;
pub mod monitor;
pub mod sonar;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
