//! Ports of the ATtiny1634 and the register tables behind them.
//!
//! Each port has four registers: `DDRx` (mode), `PORTx` (output), `PINx`
//! (input) and `PUEx` (pull-up enable). Unlike most classic AVRs the pull-ups
//! are not switched through `PORTx`, so the pull-up table is as important as
//! the other three.
//!
//! The `PORT_TO_*` tables are indexed by port id. Id 0 is [`NOT_A_PORT`] and
//! always holds `None`.

use core::convert::TryFrom;

//==========================================================

/// Data space address of an 8-bit I/O register
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// I/O space starts 0x20 bytes into data space
    pub const IO_OFFSET: u8 = 0x20;

    /// Last address in I/O space
    pub const IO_END: u8 = 0x3F;

    /// Register at `io` in I/O space, for the register constants of this
    /// crate. `io` must not exceed [`Register::IO_END`].
    pub(crate) const fn from_io(io: u8) -> Register {
        Register(io + Self::IO_OFFSET)
    }

    /// Register at `io` in I/O space (the address used by `in`/`out`),
    /// `None` past the end of I/O space
    pub const fn checked_from_io(io: u8) -> Option<Register> {
        if io <= Self::IO_END {
            Some(Register(io + Self::IO_OFFSET))
        } else {
            None
        }
    }

    /// Address in data space
    pub const fn addr(self) -> u8 {
        self.0
    }

    /// Address in I/O space
    pub const fn io_addr(self) -> u8 {
        self.0 - Self::IO_OFFSET
    }
}

impl From<Register> for u8 {
    fn from(original: Register) -> u8 {
        original.0
    }
}

//==========================================================
// port registers, C is lowest in I/O space

pub const PINC: Register = Register::from_io(0x07);
pub const DDRC: Register = Register::from_io(0x08);
pub const PORTC: Register = Register::from_io(0x09);
pub const PUEC: Register = Register::from_io(0x0A);
pub const PINB: Register = Register::from_io(0x0B);
pub const DDRB: Register = Register::from_io(0x0C);
pub const PORTB: Register = Register::from_io(0x0D);
pub const PUEB: Register = Register::from_io(0x0E);
pub const PINA: Register = Register::from_io(0x0F);
pub const DDRA: Register = Register::from_io(0x10);
pub const PORTA: Register = Register::from_io(0x11);
pub const PUEA: Register = Register::from_io(0x12);

//==========================================================

/// Port id reserved for "no port"
pub const NOT_A_PORT: u8 = 0;

/// Number of real ports
pub const NUM_PORTS: usize = 3;

/// A group of up to 8 pins sharing one register set
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Port {
    A,
    B,
    C,
}

impl Port {
    /// All ports in id order
    pub const ALL: [Port; NUM_PORTS] = [Port::A, Port::B, Port::C];

    /// Table index of this port, 1-based so 0 can mean [`NOT_A_PORT`]
    pub const fn id(self) -> u8 {
        match self {
            Port::A => 1,
            Port::B => 2,
            Port::C => 3,
        }
    }

    pub const fn from_id(id: u8) -> Option<Port> {
        match id {
            1 => Some(Port::A),
            2 => Some(Port::B),
            3 => Some(Port::C),
            _ => None,
        }
    }

    /// Letter used in pin names, `'A'` for PA0 and so on
    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
        }
    }

    /// `DDRx`
    pub const fn mode_register(self) -> Register {
        match self {
            Port::A => DDRA,
            Port::B => DDRB,
            Port::C => DDRC,
        }
    }

    /// `PORTx`
    pub const fn output_register(self) -> Register {
        match self {
            Port::A => PORTA,
            Port::B => PORTB,
            Port::C => PORTC,
        }
    }

    /// `PINx`
    pub const fn input_register(self) -> Register {
        match self {
            Port::A => PINA,
            Port::B => PINB,
            Port::C => PINC,
        }
    }

    /// `PUEx`
    pub const fn pullup_register(self) -> Register {
        match self {
            Port::A => PUEA,
            Port::B => PUEB,
            Port::C => PUEC,
        }
    }
}

impl From<Port> for u8 {
    fn from(original: Port) -> u8 {
        original.id()
    }
}

impl From<Port> for usize {
    fn from(original: Port) -> usize {
        original.id() as usize
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PortParseError {}

/// convert from a port id
impl TryFrom<u8> for Port {
    type Error = PortParseError;

    fn try_from(original: u8) -> Result<Self, Self::Error> {
        Port::from_id(original).ok_or(PortParseError {})
    }
}

//==========================================================

pub const PORT_TO_MODE: [Option<Register>; NUM_PORTS + 1] =
    [None, Some(DDRA), Some(DDRB), Some(DDRC)];

pub const PORT_TO_OUTPUT: [Option<Register>; NUM_PORTS + 1] =
    [None, Some(PORTA), Some(PORTB), Some(PORTC)];

pub const PORT_TO_PULLUP: [Option<Register>; NUM_PORTS + 1] =
    [None, Some(PUEA), Some(PUEB), Some(PUEC)];

pub const PORT_TO_INPUT: [Option<Register>; NUM_PORTS + 1] =
    [None, Some(PINA), Some(PINB), Some(PINC)];

const fn lookup(table: &[Option<Register>; NUM_PORTS + 1], id: u8) -> Option<Register> {
    if (id as usize) <= NUM_PORTS {
        table[id as usize]
    } else {
        None
    }
}

/// Mode register for port id `id`, `None` for [`NOT_A_PORT`] or unknown ids
pub const fn port_to_mode(id: u8) -> Option<Register> {
    lookup(&PORT_TO_MODE, id)
}

pub const fn port_to_output(id: u8) -> Option<Register> {
    lookup(&PORT_TO_OUTPUT, id)
}

pub const fn port_to_pullup(id: u8) -> Option<Register> {
    lookup(&PORT_TO_PULLUP, id)
}

pub const fn port_to_input(id: u8) -> Option<Register> {
    lookup(&PORT_TO_INPUT, id)
}

//==========================================================
