use std::fmt;

/// Sample rates offered by the panel, in Hz
pub const AVAILABLE_RATES: [u32; 7] = [44100, 48000, 88200, 96000, 176400, 192000, 384000];

/// Quantum sizes offered by the panel, in frames
pub const AVAILABLE_QUANTA: [u32; 8] = [32, 64, 128, 256, 512, 1024, 2048, 4096];

/// Unit shown next to the derived latency
pub const LATENCY_UNIT: &str = "ms";

/// A clock reading; `None` when the daemon value is unknown or unset
pub type ParameterValue = Option<u32>;

/// The settable clock parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Clock sample rate in Hz
    Rate,
    /// Frames per scheduling cycle
    Quantum,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 2] = [ParameterKind::Rate, ParameterKind::Quantum];

    /// The fixed, ordered set of values a user may pick for this kind
    pub fn available(self) -> &'static [u32] {
        match self {
            Self::Rate => &AVAILABLE_RATES,
            Self::Quantum => &AVAILABLE_QUANTA,
        }
    }

    pub fn is_available(self, value: u32) -> bool {
        self.available().contains(&value)
    }

    /// Suffix used in the `clock.*` metadata keys
    pub fn key_name(self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::Quantum => "quantum",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Rate => "Sample Rate",
            Self::Quantum => "Buffer Size",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Rate => "kHz",
            Self::Quantum => "samples",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_sets_are_ordered() {
        for kind in ParameterKind::ALL.iter() {
            let values = kind.available();
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{} unsorted", kind);
        }
    }

    #[test]
    fn membership() {
        assert!(ParameterKind::Rate.is_available(44100));
        assert!(!ParameterKind::Rate.is_available(22050));
        assert!(ParameterKind::Quantum.is_available(4096));
        assert!(!ParameterKind::Quantum.is_available(48000));
    }
}
