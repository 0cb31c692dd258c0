//! Fixed-width text rendering of clock readings.
//!
//! Unknown values are shown as dashed placeholders so they can never be
//! mistaken for a reading.

use crate::model::param::{ParameterKind, ParameterValue};

pub const RATE_PLACEHOLDER: &str = "--------";
pub const QUANTUM_PLACEHOLDER: &str = "------";
pub const LATENCY_PLACEHOLDER: &str = "----";

/// Sample rate in kHz (44100 -> "44.1", 48000 -> "48"), sub-kHz rates in Hz
pub fn format_rate(rate: ParameterValue) -> String {
    match rate {
        None => RATE_PLACEHOLDER.to_string(),
        Some(rate) if rate < 1000 => rate.to_string(),
        Some(rate) if rate % 1000 == 0 => (rate / 1000).to_string(),
        Some(rate) => format!("{:.1}", rate as f64 / 1000.0),
    }
}

/// Quantum as a raw frame count
pub fn format_quantum(quantum: ParameterValue) -> String {
    match quantum {
        Some(quantum) => quantum.to_string(),
        None => QUANTUM_PLACEHOLDER.to_string(),
    }
}

/// Latency in ms, one decimal from 10 ms up and two below, to keep the
/// width steady ("9.83", "10.4")
pub fn format_latency(latency: Option<f64>) -> String {
    match latency {
        Some(ms) if ms.trunc().abs() >= 10.0 => format!("{:.1}", ms),
        Some(ms) => format!("{:.2}", ms),
        None => LATENCY_PLACEHOLDER.to_string(),
    }
}

/// Label of an available value's button
pub fn format_button(kind: ParameterKind, value: u32) -> String {
    match kind {
        ParameterKind::Rate => format_rate(Some(value)),
        ParameterKind::Quantum => value.to_string(),
    }
}
