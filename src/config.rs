//! Core configuration where it differs from the defaults.
//!
//! Leaving the ADC and the secondary timers uninitialised saves flash; the
//! `initialize-adc` and `initialize-secondary-timers` features turn that
//! initialisation on.

pub const DEFAULT_INITIALIZE_ADC: bool = cfg!(feature = "initialize-adc");
pub const DEFAULT_INITIALIZE_SECONDARY_TIMERS: bool = cfg!(feature = "initialize-secondary-timers");

/// Pin numbering schemes used for this part
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinMapping {
    Clockwise,
    /// older name of `Clockwise`
    Standard,
}

impl PinMapping {
    pub const fn is_clockwise(self) -> bool {
        matches!(self, PinMapping::Clockwise | PinMapping::Standard)
    }
}

/// Mapping the tables in this crate implement
pub const PIN_MAPPING: PinMapping = PinMapping::Clockwise;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping() {
        assert!(PIN_MAPPING.is_clockwise());
        assert!(PinMapping::Standard.is_clockwise());
    }

    #[cfg(not(feature = "initialize-adc"))]
    #[test]
    fn test_adc_not_initialized_by_default() {
        assert!(!DEFAULT_INITIALIZE_ADC);
    }
}
