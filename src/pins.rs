//! Digital pin numbering.
//!
//! Pins are numbered clockwise around the package starting at `PA0`: all of
//! port A, then port B, then `PC0`-`PC2`. `PC3` is the reset line, so it is
//! skipped and given the last number, after the two crystal pins `PC4` and
//! `PC5`.
//!
//! ```text
//!                  +-\/-+
//! TX0   ( 8) PB0  1|a  a|20  PB1 ( 9)   TX1
//! RX0   ( 7) PA7  2|a  a|19  PB2 (10)   RX1
//!     * ( 6) PA6  3|a  a|18  PB3 (11) *
//!     * ( 5) PA5  4|a  a|17  PC0 (12) *
//!       ( 4) PA4  5|a  a|16  PC1 (13)
//!       ( 3) PA3  6|a  a|15  PC2 (14)
//!       ( 2) PA2  7|    |14  PC3/RESET (17)
//!       ( 1) PA1  8|   x|13  PC4 (15)
//!       ( 0) PA0  9|   x|12  PC5 (16)
//!            GND 10|    |11  VCC
//!                  +----+
//!
//! * PWM pin, a ADC pin, x crystal pin
//! ```

use crate::port::Port;
use crate::timer::Timer;
use core::convert::TryFrom;
use ufmt::derive::uDebug;

pub const NUM_DIGITAL_PINS: usize = 18;

/// Number of pins on the package, power included
pub const NUM_PACKAGE_PINS: u8 = 20;

//==========================================================

/// An external I/O pin, by its digital pin number
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitalPin(u8);

/// raw pin number did not name a pin
#[derive(Debug, uDebug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidPin {}

pub const PIN_PA0: DigitalPin = DigitalPin(0);
pub const PIN_PA1: DigitalPin = DigitalPin(1);
pub const PIN_PA2: DigitalPin = DigitalPin(2);
pub const PIN_PA3: DigitalPin = DigitalPin(3);
pub const PIN_PA4: DigitalPin = DigitalPin(4);
pub const PIN_PA5: DigitalPin = DigitalPin(5);
pub const PIN_PA6: DigitalPin = DigitalPin(6);
pub const PIN_PA7: DigitalPin = DigitalPin(7);
pub const PIN_PB0: DigitalPin = DigitalPin(8);
pub const PIN_PB1: DigitalPin = DigitalPin(9);
pub const PIN_PB2: DigitalPin = DigitalPin(10);
pub const PIN_PB3: DigitalPin = DigitalPin(11);
pub const PIN_PC0: DigitalPin = DigitalPin(12);
pub const PIN_PC1: DigitalPin = DigitalPin(13);
pub const PIN_PC2: DigitalPin = DigitalPin(14);
/// RESET
pub const PIN_PC3: DigitalPin = DigitalPin(17);
/// XTAL2
pub const PIN_PC4: DigitalPin = DigitalPin(15);
/// XTAL1
pub const PIN_PC5: DigitalPin = DigitalPin(16);

pub const LED_BUILTIN: DigitalPin = PIN_PC0;

/// `PIN_An` is the digital pin carrying analog channel `n`
pub const PIN_A0: DigitalPin = PIN_PA3;
pub const PIN_A1: DigitalPin = PIN_PA4;
pub const PIN_A2: DigitalPin = PIN_PA5;
pub const PIN_A3: DigitalPin = PIN_PA6;
pub const PIN_A4: DigitalPin = PIN_PA7;
pub const PIN_A5: DigitalPin = PIN_PB0;
pub const PIN_A6: DigitalPin = PIN_PB1;
pub const PIN_A7: DigitalPin = PIN_PB2;
pub const PIN_A8: DigitalPin = PIN_PB3;
pub const PIN_A9: DigitalPin = PIN_PC0;
pub const PIN_A10: DigitalPin = PIN_PC1;
pub const PIN_A11: DigitalPin = PIN_PC2;

//==========================================================

pub const DIGITAL_PIN_TO_PORT: [Port; NUM_DIGITAL_PINS] = [
    Port::A, // 0
    Port::A,
    Port::A,
    Port::A,
    Port::A,
    Port::A,
    Port::A,
    Port::A,
    Port::B, // 8
    Port::B,
    Port::B,
    Port::B,
    Port::C, // 12
    Port::C,
    Port::C,
    Port::C,
    Port::C,
    Port::C, // 17 = RESET
];

pub const DIGITAL_PIN_TO_BIT_MASK: [u8; NUM_DIGITAL_PINS] = [
    1 << 0, // 0
    1 << 1,
    1 << 2,
    1 << 3,
    1 << 4,
    1 << 5,
    1 << 6,
    1 << 7,
    1 << 0, // 8
    1 << 1,
    1 << 2,
    1 << 3,
    1 << 0, // 12
    1 << 1,
    1 << 2,
    1 << 4, // skip RESET
    1 << 5,
    1 << 3, // 17 = RESET
];

pub const DIGITAL_PIN_TO_TIMER: [Timer; NUM_DIGITAL_PINS] = [
    Timer::NotOnTimer, // 0
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::Timer0B, // 5
    Timer::Timer1B, // 6
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::Timer1A, // 11
    Timer::Timer0A, // 12
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer,
    Timer::NotOnTimer, // 17 = RESET
];

/// Package pin for each digital pin, see the drawing at the top
const DIGITAL_PIN_TO_PACKAGE_PIN: [u8; NUM_DIGITAL_PINS] = [
    9, 8, 7, 6, 5, 4, 3, 2, // PA0-PA7
    1, 20, 19, 18, // PB0-PB3
    17, 16, 15, // PC0-PC2
    13, 12, // PC4, PC5
    14, // PC3
];

const PIN_NAMES: [&str; NUM_DIGITAL_PINS] = [
    "PA0", "PA1", "PA2", "PA3", "PA4", "PA5", "PA6", "PA7", "PB0", "PB1", "PB2", "PB3", "PC0",
    "PC1", "PC2", "PC4", "PC5", "PC3",
];

//==========================================================

impl DigitalPin {
    /// `None` unless `number < NUM_DIGITAL_PINS`
    pub const fn new(number: u8) -> Option<DigitalPin> {
        if (number as usize) < NUM_DIGITAL_PINS {
            Some(DigitalPin(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn port(self) -> Port {
        DIGITAL_PIN_TO_PORT[self.0 as usize]
    }

    pub const fn bit_mask(self) -> u8 {
        DIGITAL_PIN_TO_BIT_MASK[self.0 as usize]
    }

    /// Bit position within the port
    pub const fn bit(self) -> u8 {
        self.bit_mask().trailing_zeros() as u8
    }

    pub const fn timer(self) -> Timer {
        DIGITAL_PIN_TO_TIMER[self.0 as usize]
    }

    /// Pin number on the 20 pin package
    pub const fn package_pin(self) -> u8 {
        DIGITAL_PIN_TO_PACKAGE_PIN[self.0 as usize]
    }

    /// Digital pin at package pin `package_pin`, `None` for power pins
    pub const fn from_package_pin(package_pin: u8) -> Option<DigitalPin> {
        let mut i = 0;
        while i < NUM_DIGITAL_PINS {
            if DIGITAL_PIN_TO_PACKAGE_PIN[i] == package_pin {
                return Some(DigitalPin(i as u8));
            }
            i += 1;
        }
        None
    }

    /// Datasheet name, `"PA0"` etc.
    pub const fn name(self) -> &'static str {
        PIN_NAMES[self.0 as usize]
    }

    /// Every digital pin in numeric order
    pub fn all() -> impl Iterator<Item = DigitalPin> {
        (0..NUM_DIGITAL_PINS as u8).map(DigitalPin)
    }
}

impl From<DigitalPin> for u8 {
    fn from(original: DigitalPin) -> u8 {
        original.0
    }
}

impl From<DigitalPin> for usize {
    fn from(original: DigitalPin) -> usize {
        original.0 as usize
    }
}

/// convert from a raw pin number
impl TryFrom<u8> for DigitalPin {
    type Error = InvalidPin;

    fn try_from(original: u8) -> Result<Self, Self::Error> {
        DigitalPin::new(original).ok_or(InvalidPin {})
    }
}

//==========================================================
// raw pin number lookups, None when the number is not a pin

pub const fn digital_pin_to_port(p: u8) -> Option<Port> {
    match DigitalPin::new(p) {
        Some(pin) => Some(pin.port()),
        None => None,
    }
}

pub const fn digital_pin_to_bit_mask(p: u8) -> Option<u8> {
    match DigitalPin::new(p) {
        Some(pin) => Some(pin.bit_mask()),
        None => None,
    }
}

pub const fn digital_pin_to_bit(p: u8) -> Option<u8> {
    match DigitalPin::new(p) {
        Some(pin) => Some(pin.bit()),
        None => None,
    }
}

/// Raw timer table entry, `Timer::NotOnTimer` for pins without PWM and
/// for numbers that are not pins
pub const fn digital_pin_to_timer(p: u8) -> Timer {
    match DigitalPin::new(p) {
        Some(pin) => pin.timer(),
        None => Timer::NotOnTimer,
    }
}

//==========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_unique_per_port() {
        for port in Port::ALL.iter() {
            let mut seen = 0u8;
            for pin in DigitalPin::all().filter(|p| p.port() == *port) {
                let mask = pin.bit_mask();
                assert_eq!(mask.count_ones(), 1);
                assert_eq!(seen & mask, 0, "{} overlaps", pin.name());
                seen |= mask;
            }
        }
    }

    #[test]
    fn test_port_c_has_six_pins() {
        let mask = DigitalPin::all()
            .filter(|p| p.port() == Port::C)
            .fold(0u8, |m, p| m | p.bit_mask());
        assert_eq!(mask, 0b0011_1111);
    }

    #[test]
    fn test_names_agree_with_tables() {
        for pin in DigitalPin::all() {
            let name = pin.name().as_bytes();
            assert_eq!(name[0], b'P');
            assert_eq!(name[1] as char, pin.port().letter());
            assert_eq!(name[2] - b'0', pin.bit());
        }
    }

    #[test]
    fn test_reset_pin() {
        assert_eq!(PIN_PC3.number(), 17);
        assert_eq!(PIN_PC3.port(), Port::C);
        assert_eq!(PIN_PC3.bit(), 3);
        assert_eq!(PIN_PC3.package_pin(), 14);
    }

    #[test]
    fn test_package_pins() {
        assert_eq!(PIN_PB0.package_pin(), 1);
        assert_eq!(PIN_PA0.package_pin(), 9);
        assert_eq!(PIN_PB1.package_pin(), 20);
        assert_eq!(DigitalPin::from_package_pin(10), None);
        assert_eq!(DigitalPin::from_package_pin(11), None);
        assert_eq!(DigitalPin::from_package_pin(0), None);
        assert_eq!(DigitalPin::from_package_pin(21), None);
        for pin in DigitalPin::all() {
            assert_eq!(DigitalPin::from_package_pin(pin.package_pin()), Some(pin));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(DigitalPin::new(18), None);
        assert_eq!(DigitalPin::try_from(200), Err(InvalidPin {}));
        assert_eq!(digital_pin_to_port(18), None);
        assert_eq!(digital_pin_to_bit_mask(255), None);
        assert_eq!(digital_pin_to_bit(18), None);
        assert_eq!(digital_pin_to_timer(18), Timer::NotOnTimer);
        assert_eq!(digital_pin_to_port(17), Some(Port::C));
        assert_eq!(digital_pin_to_bit(15), Some(4));
    }

    #[test]
    fn test_led() {
        assert_eq!(LED_BUILTIN, PIN_PC0);
        assert_eq!(LED_BUILTIN.number(), 12);
    }
}
