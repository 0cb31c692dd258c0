use crate::{
    controller::compute_latency,
    model::param::{ParameterKind, ParameterValue},
};

/// Working snapshot of the daemon's clock configuration
///
/// Only ever replaced as a whole by a sync; a partially refreshed
/// snapshot would mix readings from different points in time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurrentState {
    pub rate: ParameterValue,
    pub quantum: ParameterValue,
}

impl CurrentState {
    pub fn get(&self, kind: ParameterKind) -> ParameterValue {
        match kind {
            ParameterKind::Rate => self.rate,
            ParameterKind::Quantum => self.quantum,
        }
    }

    /// Latency of one quantum in milliseconds, if both readings are known
    pub fn latency(&self) -> Option<f64> {
        compute_latency(self.rate, self.quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        let state = CurrentState::default();
        assert_eq!(state.get(ParameterKind::Rate), None);
        assert_eq!(state.get(ParameterKind::Quantum), None);
        assert_eq!(state.latency(), None);
    }

    #[test]
    fn latency_needs_both_readings() {
        let state = CurrentState {
            rate: None,
            quantum: Some(256),
        };
        assert_eq!(state.latency(), None);

        let state = CurrentState {
            rate: Some(48000),
            quantum: Some(480),
        };
        assert_eq!(state.latency(), Some(10.0));
    }
}
