//! Serial wiring: two hardware USARTs and the USI.
//!
//! There is no SPI or TWI module. The USI provides both; as a master its DI
//! is MISO and DO is MOSI. The MISO/MOSI labels in the datasheet pinout are
//! for ISP programming, where the chip is the slave, and are the other way
//! round.
//!
//! `SS` is arbitrary. Master mode libraries expect one to exist.

use crate::pins::{DigitalPin, PIN_PA7, PIN_PB0, PIN_PB1, PIN_PB2, PIN_PC1, PIN_PC2};
use crate::port::{Register, DDRB, DDRC, PINB, PINC, PORTB, PORTC, PUEB, PUEC};

/// hardware serial is available
pub const USE_SOFTWARE_SERIAL: bool = false;
/// SPI goes through the USI
pub const USE_SOFTWARE_SPI: bool = true;

//==========================================================
// USI

pub const USI_DI: DigitalPin = PIN_PB1;
pub const USI_DO: DigitalPin = PIN_PB2;
pub const USI_SCK: DigitalPin = PIN_PC1;
pub const SS: DigitalPin = PIN_PC2;

// master mode names
pub const MISO: DigitalPin = USI_DI;
pub const MOSI: DigitalPin = USI_DO;
pub const SCK: DigitalPin = USI_SCK;
pub const SDA: DigitalPin = USI_DI;
pub const SCL: DigitalPin = USI_SCK;

// data pins
pub const USI_DDR: Register = DDRB;
pub const USI_PORT: Register = PORTB;
pub const USI_PIN: Register = PINB;
pub const USI_PUE: Register = PUEB;
pub const USI_DO_BIT: u8 = 2;
pub const USI_DI_BIT: u8 = 1;

// clock pin
pub const USI_CLOCK_DDR: Register = DDRC;
pub const USI_CLOCK_PORT: Register = PORTC;
pub const USI_CLOCK_PIN: Register = PINC;
pub const USI_CLOCK_PUE: Register = PUEC;
pub const USI_CLOCK_BIT: u8 = 1;

/// Interrupt vector numbers
pub const USI_START_VECTOR: u8 = 23;
pub const USI_OVERFLOW_VECTOR: u8 = 24;

/// USISIF, start condition flag in USISR
pub const USI_START_COND_INT: u8 = 7;

//==========================================================
// USARTs

pub const PIN_HWSERIAL0_TX: DigitalPin = PIN_PB0;
pub const PIN_HWSERIAL0_RX: DigitalPin = PIN_PA7;

pub const PIN_HWSERIAL1_TX: DigitalPin = PIN_PB1;
pub const PIN_HWSERIAL1_RX: DigitalPin = PIN_PB2;

/// Number of hardware USARTs
pub const NUM_HWSERIAL: u8 = 2;

/// (TX, RX) pins of USART `n`
pub const fn hwserial_pins(n: u8) -> Option<(DigitalPin, DigitalPin)> {
    match n {
        0 => Some((PIN_HWSERIAL0_TX, PIN_HWSERIAL0_RX)),
        1 => Some((PIN_HWSERIAL1_TX, PIN_HWSERIAL1_RX)),
        _ => None,
    }
}

/// Whether `pin` is part of the USI
pub const fn is_usi(pin: DigitalPin) -> bool {
    pin.number() == USI_DI.number()
        || pin.number() == USI_DO.number()
        || pin.number() == USI_SCK.number()
}

//==========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usi_registers_match_pins() {
        assert_eq!(USI_DI.port().mode_register(), USI_DDR);
        assert_eq!(USI_DO.port().output_register(), USI_PORT);
        assert_eq!(USI_DI.port().input_register(), USI_PIN);
        assert_eq!(USI_DO.port().pullup_register(), USI_PUE);
        assert_eq!(USI_DI.bit(), USI_DI_BIT);
        assert_eq!(USI_DO.bit(), USI_DO_BIT);

        assert_eq!(USI_SCK.port().mode_register(), USI_CLOCK_DDR);
        assert_eq!(USI_SCK.port().output_register(), USI_CLOCK_PORT);
        assert_eq!(USI_SCK.port().input_register(), USI_CLOCK_PIN);
        assert_eq!(USI_SCK.port().pullup_register(), USI_CLOCK_PUE);
        assert_eq!(USI_SCK.bit(), USI_CLOCK_BIT);
    }

    #[test]
    fn test_hwserial() {
        assert_eq!(hwserial_pins(0), Some((PIN_PB0, PIN_PA7)));
        assert_eq!(hwserial_pins(1), Some((PIN_PB1, PIN_PB2)));
        assert_eq!(hwserial_pins(NUM_HWSERIAL), None);
        assert!(!USE_SOFTWARE_SERIAL);
    }

    #[test]
    fn test_usi_shares_serial1() {
        // USART1 and the USI data pins cannot be used together
        let (tx, rx) = hwserial_pins(1).unwrap();
        assert!(is_usi(tx) && is_usi(rx));
        assert!(!is_usi(SS));
    }
}
