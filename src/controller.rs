//! pwclockctl's single point of access to the daemon clock settings.

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    model::{
        param::{ParameterKind, ParameterValue},
        state::CurrentState,
    },
    rts::pipewire::{ParameterStore, Slot},
};

/// Reasons a mutation was not (known to be) issued successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The value is not one of the kind's available values, nothing was sent
    Unavailable { kind: ParameterKind, value: u32 },
    /// The daemon command signalled failure
    Failed { kind: ParameterKind, value: u32 },
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { kind, value } => {
                write!(f, "{} is not an available {} value", value, kind)
            }
            Self::Failed { kind, value } => write!(f, "failed to force {} to {}", kind, value),
        }
    }
}

/// Wraps a [`ParameterStore`] and normalises its readings
pub struct Controller<S> {
    store: S,
}

impl<S: ParameterStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the value currently in effect for `kind`
    ///
    /// The forced value wins whenever it is readable, the natural value
    /// is only consulted when no override can be read.  Every call goes
    /// back to the store.
    pub fn get_current_value(&self, kind: ParameterKind) -> ParameterValue {
        let value = self
            .store
            .query(kind, Slot::Override)
            .or_else(|| self.store.query(kind, Slot::Natural));
        debug!("Current {}: {:?}", kind, value);
        value
    }

    /// Force `kind` to `value` on the daemon
    ///
    /// `Ok` only means the command did not report an error.  The value
    /// actually in effect must be re-read afterwards.
    pub fn set_value(&self, value: u32, kind: ParameterKind) -> Result<(), SetError> {
        if !kind.is_available(value) {
            warn!("Refusing to force {} to unavailable value {}", kind, value);
            return Err(SetError::Unavailable { kind, value });
        }

        info!("Forcing {} to {}", kind, value);
        if self.store.mutate(kind, value) {
            Ok(())
        } else {
            Err(SetError::Failed { kind, value })
        }
    }

    /// Re-read every parameter into a fresh snapshot
    pub fn sync(&self) -> CurrentState {
        CurrentState {
            rate: self.get_current_value(ParameterKind::Rate),
            quantum: self.get_current_value(ParameterKind::Quantum),
        }
    }
}

/// Latency of one quantum in milliseconds
pub fn compute_latency(rate: ParameterValue, quantum: ParameterValue) -> Option<f64> {
    match (rate, quantum) {
        (Some(rate), Some(quantum)) if rate > 0 => Some(quantum as f64 * 1000.0 / rate as f64),
        _ => None,
    }
}
