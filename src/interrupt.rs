//! Interrupt sources reachable from pins.
//!
//! Every I/O pin has a pin change interrupt. The three PCINT banks map
//! directly to the ports: PCINT0-7 are port A (`PCMSK0`), PCINT8-11 port B
//! (`PCMSK1`) and PCINT12-17 port C (`PCMSK2`). A bank is enabled by its
//! PCIE bit in `GIMSK`.
//!
//! The only "full service" external interrupt, INT0, is on `PC2`.

use crate::pins::{DigitalPin, PIN_PC2};
use crate::port::{Port, Register};

//==========================================================

pub const PCMSK0: Register = Register::from_io(0x27);
pub const PCMSK1: Register = Register::from_io(0x28);
pub const PCMSK2: Register = Register::from_io(0x29);
pub const GIFR: Register = Register::from_io(0x3A);
pub const GIMSK: Register = Register::from_io(0x3B);

// GIMSK bits
pub const PCIE0: u8 = 3;
pub const PCIE1: u8 = 4;
pub const PCIE2: u8 = 5;
pub const INT0: u8 = 6;

/// Pin wired to INT0
pub const EXTERNAL_INTERRUPT_PIN: DigitalPin = PIN_PC2;

//==========================================================

/// Everything needed to enable a pin change interrupt on one pin
///
/// Only [`pin_change`] builds one, so the bank bit is always one of
/// `PCIE0`..`PCIE2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinChange {
    control: Register,
    control_bit: u8,
    mask: Register,
    mask_bit: u8,
}

impl PinChange {
    /// Register holding the bank enable bit
    pub const fn control(&self) -> Register {
        self.control
    }

    pub const fn control_bit(&self) -> u8 {
        self.control_bit
    }

    /// Register holding the bank flag, at the same bit as the enable
    pub const fn flag(&self) -> Register {
        GIFR
    }

    /// Bank mask register
    pub const fn mask(&self) -> Register {
        self.mask
    }

    pub const fn mask_bit(&self) -> u8 {
        self.mask_bit
    }

    /// Bank number, 0 to 2
    pub const fn bank(&self) -> u8 {
        match self.control_bit {
            PCIE0 => 0,
            PCIE1 => 1,
            _ => 2,
        }
    }

    /// Global PCINT number
    pub const fn pcint(&self) -> u8 {
        match self.control_bit {
            PCIE0 => self.mask_bit,
            PCIE1 => 8 + self.mask_bit,
            _ => 12 + self.mask_bit,
        }
    }
}

//==========================================================

/// Pin change control register for raw pin `p`
pub const fn digital_pin_to_pcicr(p: u8) -> Option<Register> {
    if p < 18 {
        Some(GIMSK)
    } else {
        None
    }
}

/// Bit of the bank enable in the control register
pub const fn digital_pin_to_pcicr_bit(p: u8) -> Option<u8> {
    if p < 8 {
        Some(PCIE0)
    } else if p < 12 {
        Some(PCIE1)
    } else if p < 18 {
        Some(PCIE2)
    } else {
        None
    }
}

pub const fn digital_pin_to_pcmsk(p: u8) -> Option<Register> {
    if p < 8 {
        Some(PCMSK0)
    } else if p < 12 {
        Some(PCMSK1)
    } else if p < 18 {
        Some(PCMSK2)
    } else {
        None
    }
}

/// Bit within the mask register, which is the bit within the port
pub const fn digital_pin_to_pcmsk_bit(p: u8) -> Option<u8> {
    if p < 8 {
        Some(p)
    } else if p < 12 {
        Some(p - 8)
    } else if p < 15 {
        Some(p - 12)
    } else if p == 17 {
        Some(3)
    } else if p < 17 {
        Some(p - 11)
    } else {
        None
    }
}

pub const fn pin_change(p: u8) -> Option<PinChange> {
    match (
        digital_pin_to_pcicr(p),
        digital_pin_to_pcicr_bit(p),
        digital_pin_to_pcmsk(p),
        digital_pin_to_pcmsk_bit(p),
    ) {
        (Some(control), Some(control_bit), Some(mask), Some(mask_bit)) => Some(PinChange {
            control,
            control_bit,
            mask,
            mask_bit,
        }),
        _ => None,
    }
}

/// Mask register serving a whole port
pub const fn port_to_pcmsk(port: Port) -> Register {
    match port {
        Port::A => PCMSK0,
        Port::B => PCMSK1,
        Port::C => PCMSK2,
    }
}

/// External interrupt number for raw pin `p`, `None` is NOT_AN_INTERRUPT
pub const fn digital_pin_to_interrupt(p: u8) -> Option<u8> {
    if p == EXTERNAL_INTERRUPT_PIN.number() {
        Some(0)
    } else {
        None
    }
}

/// Enable register and bit of external interrupt `n`
pub const fn external_interrupt_enable(n: u8) -> Option<(Register, u8)> {
    match n {
        0 => Some((GIMSK, INT0)),
        _ => None,
    }
}

/// Flag register and bit of external interrupt `n`
pub const fn external_interrupt_flag(n: u8) -> Option<(Register, u8)> {
    match n {
        0 => Some((GIFR, INT0)),
        _ => None,
    }
}

//==========================================================
